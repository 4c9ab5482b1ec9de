// SPDX-License-Identifier: MIT OR Apache-2.0
//! Node model registry for Plexus Editor.
//!
//! This crate defines the extension contract for pluggable node types:
//! third-party models register a factory under a unique type name, grouped
//! into categories for palette UIs, and the editor instantiates them by
//! name without knowing their concrete types.
//!
//! ## Architecture
//!
//! - [`NodeModel`] is the polymorphic behavioral unit a registry entry
//!   produces; one implementor per node "type".
//! - [`ModelRegistry`] owns the name → factory catalog together with
//!   category and display-name metadata.
//!
//! The registry is single-threaded by design: it holds no synchronization
//! and is meant to live on the editor's event-processing thread.

pub mod model;
pub mod registry;

pub use model::{ModelCreator, NodeModel};
pub use registry::ModelRegistry;
