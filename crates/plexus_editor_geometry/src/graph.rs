// SPDX-License-Identifier: MIT OR Apache-2.0
//! Graph model abstraction consumed by node geometry.

use serde::{Deserialize, Serialize};

/// Opaque handle identifying one node inside an externally owned graph.
///
/// Lifetime and validity of the handle are governed entirely by the
/// [`GraphModel`] implementor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub u32);

/// Direction of a connection port on a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PortDirection {
    /// Input side of a node.
    In,
    /// Output side of a node.
    Out,
    /// No direction; port hit queries short-circuit to "no hit".
    None,
}

/// Index of a port within one direction of a node.
///
/// "No port" is `Option::<PortIndex>::None` throughout this crate.
pub type PortIndex = u32;

/// Read-only topology queries a graph model answers for geometry.
///
/// Counts are fetched live on every geometry call and never cached here,
/// since the graph may mutate between calls. Repeated queries must be
/// side-effect free. Passing a node handle that is no longer valid is the
/// implementor's domain; this crate neither detects nor masks it.
pub trait GraphModel {
    /// Current number of input ports on `node_id`.
    fn in_port_count(&self, node_id: NodeId) -> usize;

    /// Current number of output ports on `node_id`.
    fn out_port_count(&self, node_id: NodeId) -> usize;
}
