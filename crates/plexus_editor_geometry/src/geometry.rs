// SPDX-License-Identifier: MIT OR Apache-2.0
//! Node outline derivation and port hit resolution.

use crate::graph::{GraphModel, NodeId, PortDirection, PortIndex};
use crate::style::StyleProvider;
use egui::emath::TSTransform;
use egui::{Pos2, Rect, Vec2};

/// Margin added on all sides of the size-derived outline under the
/// `reduced-shape-margins` feature.
const REDUCED_SHAPE_MARGIN: f32 = 5.0;

/// Shape and port placement contract for nodes.
///
/// Concrete geometries implement the per-node queries
/// ([`NodeGeometry::size`], [`NodeGeometry::bounding_rect`],
/// [`NodeGeometry::port_position`]) and inject their collaborators through
/// [`NodeGeometry::graph`] and [`NodeGeometry::style`]; the provided
/// methods define the shape-construction and hit-testing contract around
/// them. All methods are pure queries with no caching, safe to call once
/// per pointer-move event.
pub trait NodeGeometry {
    /// The graph model owning the actual topology.
    fn graph(&self) -> &dyn GraphModel;

    /// Style constants used to derive the hit tolerance.
    fn style(&self) -> &dyn StyleProvider;

    /// Width and height of the node's content box, in node-local units.
    fn size(&self, node_id: NodeId) -> Vec2;

    /// Bounding rectangle of the node in node-local coordinates.
    fn bounding_rect(&self, node_id: NodeId) -> Rect;

    /// Node-local position of one port.
    fn port_position(&self, node_id: NodeId, direction: PortDirection, index: PortIndex) -> Pos2;

    /// Closed outline used for pointer-over-node hit-testing.
    ///
    /// With the `reduced-shape-margins` feature this is the content box
    /// grown by a fixed margin on all four sides; otherwise it is exactly
    /// [`NodeGeometry::bounding_rect`].
    fn shape(&self, node_id: NodeId) -> Rect {
        if cfg!(feature = "reduced-shape-margins") {
            Rect::from_min_size(Pos2::ZERO, self.size(node_id)).expand(REDUCED_SHAPE_MARGIN)
        } else {
            self.bounding_rect(node_id)
        }
    }

    /// Node-local port position mapped into scene coordinates through the
    /// pan/zoom `transform`.
    fn port_scene_position(
        &self,
        node_id: NodeId,
        direction: PortDirection,
        index: PortIndex,
        transform: TSTransform,
    ) -> Pos2 {
        transform * self.port_position(node_id, direction, index)
    }

    /// Resolve `node_point` (node-local) to a port index.
    ///
    /// Ports are scanned in index order against the current count reported
    /// by the graph model; the first port strictly closer than
    /// `2.0 * connection_point_diameter` wins. Overlapping tolerance zones
    /// therefore resolve to the lowest index, not the closest port.
    /// Returns `None` when no port is within tolerance or `direction` is
    /// [`PortDirection::None`].
    fn check_port_hit(
        &self,
        node_id: NodeId,
        direction: PortDirection,
        node_point: Pos2,
    ) -> Option<PortIndex> {
        let count = match direction {
            PortDirection::In => self.graph().in_port_count(node_id),
            PortDirection::Out => self.graph().out_port_count(node_id),
            PortDirection::None => return None,
        };

        let tolerance = 2.0 * self.style().connection_point_diameter();

        (0..count as PortIndex).find(|&index| {
            self.port_position(node_id, direction, index)
                .distance(node_point)
                < tolerance
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::NodeStyle;

    /// Fixed-topology graph model answering the same counts for every node.
    struct TestGraph {
        inputs: usize,
        outputs: usize,
    }

    impl GraphModel for TestGraph {
        fn in_port_count(&self, _node_id: NodeId) -> usize {
            self.inputs
        }

        fn out_port_count(&self, _node_id: NodeId) -> usize {
            self.outputs
        }
    }

    /// Vertical port columns: input `i` at (10, 10 + 40i), output `i` at
    /// (170, 10 + 40i).
    struct ColumnGeometry {
        graph: TestGraph,
        style: NodeStyle,
    }

    impl NodeGeometry for ColumnGeometry {
        fn graph(&self) -> &dyn GraphModel {
            &self.graph
        }

        fn style(&self) -> &dyn StyleProvider {
            &self.style
        }

        fn size(&self, _node_id: NodeId) -> Vec2 {
            Vec2::new(180.0, 250.0)
        }

        fn bounding_rect(&self, node_id: NodeId) -> Rect {
            Rect::from_min_size(Pos2::new(-10.0, -10.0), self.size(node_id) + Vec2::splat(20.0))
        }

        fn port_position(
            &self,
            _node_id: NodeId,
            direction: PortDirection,
            index: PortIndex,
        ) -> Pos2 {
            let x = match direction {
                PortDirection::In => 10.0,
                _ => 170.0,
            };
            Pos2::new(x, 10.0 + 40.0 * index as f32)
        }
    }

    fn column_geometry() -> ColumnGeometry {
        ColumnGeometry {
            graph: TestGraph {
                inputs: 6,
                outputs: 2,
            },
            style: NodeStyle::default(),
        }
    }

    #[test]
    fn test_hit_within_tolerance() {
        let geometry = column_geometry();
        // Default diameter 8.0 gives a tolerance of 16.0.
        let hit = geometry.check_port_hit(NodeId(0), PortDirection::In, Pos2::new(25.9, 10.0));
        assert_eq!(hit, Some(0));
    }

    #[test]
    fn test_exact_tolerance_distance_misses() {
        let geometry = column_geometry();
        // Distance is exactly 2 * diameter; the inequality is strict.
        let hit = geometry.check_port_hit(NodeId(0), PortDirection::In, Pos2::new(26.0, 10.0));
        assert_eq!(hit, None);
    }

    #[test]
    fn test_hit_prefers_lowest_index_over_closest() {
        let mut geometry = column_geometry();
        geometry.style.connection_point_diameter = 30.0;

        // Ports 3 (d=30), 4 (d=10), and 5 (d=50) are all inside the 60.0
        // tolerance; the scan stops at the lowest index, not the closest.
        let hit = geometry.check_port_hit(NodeId(0), PortDirection::In, Pos2::new(10.0, 160.0));
        assert_eq!(hit, Some(3));
    }

    #[test]
    fn test_direction_none_short_circuits() {
        let geometry = column_geometry();
        // Exactly on input port 0; the direction still gates the query.
        let hit = geometry.check_port_hit(NodeId(0), PortDirection::None, Pos2::new(10.0, 10.0));
        assert_eq!(hit, None);
    }

    #[test]
    fn test_out_scan_is_bounded_by_live_count() {
        let geometry = column_geometry();
        // (170, 90) is where output 2 would sit, but only 2 outputs exist.
        let hit = geometry.check_port_hit(NodeId(0), PortDirection::Out, Pos2::new(170.0, 90.0));
        assert_eq!(hit, None);

        let hit = geometry.check_port_hit(NodeId(0), PortDirection::Out, Pos2::new(170.0, 50.0));
        assert_eq!(hit, Some(1));
    }

    #[test]
    fn test_no_hit_on_empty_node() {
        let geometry = ColumnGeometry {
            graph: TestGraph {
                inputs: 0,
                outputs: 0,
            },
            style: NodeStyle::default(),
        };
        let hit = geometry.check_port_hit(NodeId(7), PortDirection::In, Pos2::new(10.0, 10.0));
        assert_eq!(hit, None);
    }

    #[cfg(not(feature = "reduced-shape-margins"))]
    #[test]
    fn test_shape_is_bounding_rect() {
        let geometry = column_geometry();
        assert_eq!(geometry.shape(NodeId(0)), geometry.bounding_rect(NodeId(0)));
    }

    #[cfg(feature = "reduced-shape-margins")]
    #[test]
    fn test_shape_is_size_with_margins() {
        let geometry = column_geometry();
        let expected =
            Rect::from_min_size(Pos2::ZERO, geometry.size(NodeId(0))).expand(5.0);
        assert_eq!(geometry.shape(NodeId(0)), expected);
    }

    #[test]
    fn test_port_scene_position_applies_transform() {
        let geometry = column_geometry();
        let transform = TSTransform::new(Vec2::new(100.0, 50.0), 2.0);

        let scene = geometry.port_scene_position(NodeId(0), PortDirection::In, 0, transform);
        assert_eq!(scene, Pos2::new(120.0, 70.0));
    }

    #[test]
    fn test_port_scene_position_identity() {
        let geometry = column_geometry();
        let scene =
            geometry.port_scene_position(NodeId(0), PortDirection::Out, 1, TSTransform::IDENTITY);
        assert_eq!(scene, Pos2::new(170.0, 50.0));
    }
}
