// SPDX-License-Identifier: MIT OR Apache-2.0
//! Style parameters consumed by hit-testing.

use serde::{Deserialize, Serialize};

/// Source of the style constants geometry depends on.
///
/// Injected explicitly into each [`crate::NodeGeometry`] implementor
/// rather than read from ambient global state, so hit tolerances stay
/// testable in isolation.
pub trait StyleProvider {
    /// Diameter of a painted connection point, in node-local units.
    fn connection_point_diameter(&self) -> f32;
}

/// Plain style values with editor defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NodeStyle {
    /// Diameter of a painted connection point.
    pub connection_point_diameter: f32,
}

impl Default for NodeStyle {
    fn default() -> Self {
        Self {
            connection_point_diameter: 8.0,
        }
    }
}

impl StyleProvider for NodeStyle {
    fn connection_point_diameter(&self) -> f32 {
        self.connection_point_diameter
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_diameter() {
        let style = NodeStyle::default();
        assert_eq!(style.connection_point_diameter(), 8.0);
    }
}
