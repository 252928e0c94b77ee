use serde::{Deserialize, Serialize};

use forno_core::{ItemId, PriceExemptIds};

use crate::catalog::{Catalog, Category};

/// The ingredient set of a custom pizza, in insertion order. Order only
/// matters for display; pricing treats this as a set.
///
/// Exclusivity rules enforced by [`toggle`](Self::toggle):
/// - at most one crust and one sauce (selecting another replaces it),
/// - the default cheese, once present, cannot be toggled off — only
///   [`clear`](Self::clear) removes it,
/// - everything else toggles on and off freely.
///
/// The pricing engine re-applies the crust/sauce rule defensively, so a
/// selection built without this type still prices correctly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct IngredientSelection {
    ids: Vec<ItemId>,
}

impl IngredientSelection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The builder's starting state: default sauce and default cheese
    /// pre-selected, as the storefront opens it.
    #[must_use]
    pub fn with_defaults(defaults: &PriceExemptIds) -> Self {
        Self {
            ids: vec![defaults.default_sauce.clone(), defaults.default_cheese.clone()],
        }
    }

    /// Unvalidated construction, for callers that already hold a raw id
    /// list. Pricing tolerates any shape.
    #[must_use]
    pub fn from_ids(ids: Vec<ItemId>) -> Self {
        Self { ids }
    }

    /// Toggle `id` in or out of the selection.
    ///
    /// Ids unknown to the catalog are ignored on add (they cannot be
    /// classified), but still removable if already present.
    pub fn toggle(&mut self, catalog: &Catalog, defaults: &PriceExemptIds, id: &ItemId) {
        if self.contains(id) {
            if *id == defaults.default_cheese {
                return;
            }
            self.ids.retain(|known| known != id);
            return;
        }

        let Some(item) = catalog.get(id) else {
            return;
        };
        match item.category {
            Category::Crust => self.replace_category(catalog, Category::Crust),
            Category::Sauce => self.replace_category(catalog, Category::Sauce),
            _ => {}
        }
        self.ids.push(id.clone());
    }

    fn replace_category(&mut self, catalog: &Catalog, category: Category) {
        self.ids
            .retain(|known| catalog.get(known).map(|item| item.category) != Some(category));
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    #[must_use]
    pub fn contains(&self, id: &ItemId) -> bool {
        self.ids.iter().any(|known| known == id)
    }

    #[must_use]
    pub fn ids(&self) -> &[ItemId] {
        &self.ids
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
