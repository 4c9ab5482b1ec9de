// SPDX-License-Identifier: MIT OR Apache-2.0
//! The pluggable node model contract.

/// Behavioral unit instantiated by the registry; represents one node type.
///
/// A model reports the unique type name it is registered under and a
/// human-readable display name for palette UIs. Types that can report
/// these without being constructed override the `static_*` accessors; the
/// registry prefers those and only constructs a throwaway probe instance
/// when they are absent.
pub trait NodeModel {
    /// Unique type name claimed by this model.
    fn name(&self) -> String;

    /// Human-readable label shown in palettes. Defaults to [`NodeModel::name`].
    fn display_name(&self) -> String {
        self.name()
    }

    /// Type-level name, if the type can report one without an instance.
    fn static_name() -> Option<String>
    where
        Self: Sized,
    {
        None
    }

    /// Type-level display name, if the type can report one without an instance.
    fn static_display_name() -> Option<String>
    where
        Self: Sized,
    {
        None
    }
}

/// Factory stored per registered model.
///
/// Every invocation hands the caller sole ownership of a freshly
/// constructed instance.
pub type ModelCreator = Box<dyn Fn() -> Box<dyn NodeModel>>;
