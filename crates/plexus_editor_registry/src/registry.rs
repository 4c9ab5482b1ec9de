// SPDX-License-Identifier: MIT OR Apache-2.0
//! Name → factory catalog for pluggable node types.

use crate::model::{ModelCreator, NodeModel};
use indexmap::{IndexMap, IndexSet};

/// Catalog mapping type names to model factories, with category metadata
/// for building palette UIs.
///
/// Model registration is first-write-wins: once a name is claimed, its
/// creator, category, and display name are never overwritten, so a plugin's
/// type cannot be accidentally shadowed by a later registration. Category
/// display names are the opposite, last-write-wins, since they are cosmetic
/// and may be corrected repeatedly by later configuration.
///
/// The registry owns unique factory closures and is move-only.
pub struct ModelRegistry {
    creators: IndexMap<String, ModelCreator>,
    model_categories: IndexMap<String, String>,
    model_display_names: IndexMap<String, String>,
    categories: IndexSet<String>,
    category_display_names: IndexMap<String, String>,
}

impl ModelRegistry {
    /// Category assigned when registration does not name one.
    pub const DEFAULT_CATEGORY: &'static str = "Nodes";

    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            creators: IndexMap::new(),
            model_categories: IndexMap::new(),
            model_display_names: IndexMap::new(),
            categories: IndexSet::new(),
            category_display_names: IndexMap::new(),
        }
    }

    /// Register a model type with an explicit factory, under
    /// [`ModelRegistry::DEFAULT_CATEGORY`].
    pub fn register_creator<M>(&mut self, creator: impl Fn() -> Box<dyn NodeModel> + 'static)
    where
        M: NodeModel,
    {
        self.register_creator_in::<M>(Self::DEFAULT_CATEGORY, creator);
    }

    /// Register a model type with an explicit factory.
    ///
    /// The registered name comes from [`NodeModel::static_name`] when `M`
    /// provides one; otherwise the factory is invoked once and the probe
    /// instance is asked for its dynamic name. The display name resolves
    /// the same way, reusing the probe. If the name is already claimed the
    /// call is silently ignored: no overwrite, no error, and the new
    /// creator is never stored.
    pub fn register_creator_in<M>(
        &mut self,
        category: impl Into<String>,
        creator: impl Fn() -> Box<dyn NodeModel> + 'static,
    ) where
        M: NodeModel,
    {
        let creator: ModelCreator = Box::new(creator);

        let (name, display_name) = match (M::static_name(), M::static_display_name()) {
            (Some(name), Some(display_name)) => (name, display_name),
            (static_name, static_display_name) => {
                let probe = creator();
                (
                    static_name.unwrap_or_else(|| probe.name()),
                    static_display_name.unwrap_or_else(|| probe.display_name()),
                )
            }
        };

        if self.creators.contains_key(&name) {
            return;
        }

        let category = category.into();
        self.categories.insert(category.clone());
        self.model_categories.insert(name.clone(), category);
        self.model_display_names.insert(name.clone(), display_name);
        self.creators.insert(name, creator);
    }

    /// Register a default-constructible model type under
    /// [`ModelRegistry::DEFAULT_CATEGORY`].
    pub fn register_model<M>(&mut self)
    where
        M: NodeModel + Default + 'static,
    {
        self.register_model_in::<M>(Self::DEFAULT_CATEGORY);
    }

    /// Register a default-constructible model type.
    pub fn register_model_in<M>(&mut self, category: impl Into<String>)
    where
        M: NodeModel + Default + 'static,
    {
        self.register_creator_in::<M>(category, || Box::new(M::default()));
    }

    /// Instantiate the model registered under `name`.
    ///
    /// Returns `None` for an unknown name; absence is an expected outcome,
    /// not an error. The caller receives sole ownership of the instance.
    pub fn create(&self, name: &str) -> Option<Box<dyn NodeModel>> {
        self.creators.get(name).map(|creator| creator())
    }

    /// Check whether a type name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.creators.contains_key(name)
    }

    /// Name → factory association for every registered model.
    pub fn creators(&self) -> &IndexMap<String, ModelCreator> {
        &self.creators
    }

    /// Names of all registered models, in registration order.
    pub fn registered_model_names(&self) -> impl Iterator<Item = &str> {
        self.creators.keys().map(String::as_str)
    }

    /// Name → category association for every registered model.
    pub fn model_categories(&self) -> &IndexMap<String, String> {
        &self.model_categories
    }

    /// Name → display-name association for every registered model.
    pub fn model_display_names(&self) -> &IndexMap<String, String> {
        &self.model_display_names
    }

    /// The distinct categories seen across all registrations.
    pub fn categories(&self) -> &IndexSet<String> {
        &self.categories
    }

    /// Display name for a category: the registered override if present,
    /// else the category key itself.
    pub fn category_display_name<'a>(&'a self, category: &'a str) -> &'a str {
        self.category_display_names
            .get(category)
            .map_or(category, String::as_str)
    }

    /// Set or replace the display name for a category.
    ///
    /// Always overwrites, unlike model registration.
    pub fn register_category_display_name(
        &mut self,
        category: impl Into<String>,
        display_name: impl Into<String>,
    ) {
        self.category_display_names
            .insert(category.into(), display_name.into());
    }
}

impl Default for ModelRegistry {
    fn default() -> Self {
        Self::new()
    }
}
