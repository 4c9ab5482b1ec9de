// SPDX-License-Identifier: MIT OR Apache-2.0
//! Node geometry and port hit-testing for Plexus Editor.
//!
//! This crate defines the spatial contract of the node editor: how a
//! node's outline is derived for pointer-over-node hit-testing, and how a
//! pointer position resolves to a specific connection port.
//!
//! ## Architecture
//!
//! - [`GraphModel`] abstracts the externally owned graph; geometry only
//!   asks it for live port counts.
//! - [`StyleProvider`] injects the one style constant hit-testing needs,
//!   the connection point diameter.
//! - [`NodeGeometry`] is the abstract geometry: concrete layouts implement
//!   the per-node queries, the trait provides shape construction and port
//!   hit resolution around them.
//!
//! All queries are pure and recompute from scratch on every call, trading
//! recomputation cost for freshness against a mutable graph.

pub mod geometry;
pub mod graph;
pub mod style;

pub use geometry::NodeGeometry;
pub use graph::{GraphModel, NodeId, PortDirection, PortIndex};
pub use style::{NodeStyle, StyleProvider};
