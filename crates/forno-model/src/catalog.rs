use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

use forno_core::ItemId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError(pub String);

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ValidationError {}

pub const NAME_MAX_LEN: usize = 128;

/// Drink format subset used by deal option constraints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DrinkSize {
    Small,
    Large,
}

/// Closed set of purchasable-unit categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Pizza,
    Crust,
    Sauce,
    Cheese,
    Meat,
    Vegetable,
    DrinkSmall,
    DrinkLarge,
    Side,
    Deal,
}

impl Category {
    /// Whether items of this category can appear in a custom-pizza
    /// ingredient selection.
    #[must_use]
    pub const fn is_ingredient(self) -> bool {
        matches!(
            self,
            Self::Crust | Self::Sauce | Self::Cheese | Self::Meat | Self::Vegetable
        )
    }

    #[must_use]
    pub const fn drink_size(self) -> Option<DrinkSize> {
        match self {
            Self::DrinkSmall => Some(DrinkSize::Small),
            Self::DrinkLarge => Some(DrinkSize::Large),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pizza => "pizza",
            Self::Crust => "crust",
            Self::Sauce => "sauce",
            Self::Cheese => "cheese",
            Self::Meat => "meat",
            Self::Vegetable => "vegetable",
            Self::DrinkSmall => "drink_small",
            Self::DrinkLarge => "drink_large",
            Self::Side => "side",
            Self::Deal => "deal",
        }
    }
}

/// One purchasable unit. Immutable for the lifetime of a pricing/cart
/// session; the catalog store collaborator owns the data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogItem {
    pub id: ItemId,
    pub name: String,
    pub base_price: Decimal,
    pub category: Category,
    #[serde(default)]
    pub popular: bool,
    #[serde(default)]
    pub image_ref: Option<String>,
}

impl CatalogItem {
    pub fn new(
        id: ItemId,
        name: impl Into<String>,
        base_price: Decimal,
        category: Category,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError("item name must not be empty".to_string()));
        }
        if name.len() > NAME_MAX_LEN {
            return Err(ValidationError(format!(
                "item name exceeds max length {NAME_MAX_LEN}"
            )));
        }
        if base_price.is_sign_negative() {
            return Err(ValidationError(format!(
                "item {id} base price must be >= 0"
            )));
        }
        Ok(Self {
            id,
            name,
            base_price,
            category,
            popular: false,
            image_ref: None,
        })
    }

    #[must_use]
    pub fn with_popular(mut self, popular: bool) -> Self {
        self.popular = popular;
        self
    }

    #[must_use]
    pub fn with_image_ref(mut self, image_ref: impl Into<String>) -> Self {
        self.image_ref = Some(image_ref.into());
        self
    }
}

/// Read-only item collection keyed by id. The engine only ever queries
/// it; mutation happens on the collaborator side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Catalog {
    items: BTreeMap<ItemId, CatalogItem>,
}

impl Catalog {
    pub fn from_items(items: Vec<CatalogItem>) -> Result<Self, ValidationError> {
        let mut map = BTreeMap::new();
        for item in items {
            let id = item.id.clone();
            if map.insert(id.clone(), item).is_some() {
                return Err(ValidationError(format!("duplicate catalog id `{id}`")));
            }
        }
        Ok(Self { items: map })
    }

    #[must_use]
    pub fn get(&self, id: &ItemId) -> Option<&CatalogItem> {
        self.items.get(id)
    }

    #[must_use]
    pub fn contains(&self, id: &ItemId) -> bool {
        self.items.contains_key(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> impl Iterator<Item = &CatalogItem> {
        self.items.values()
    }

    #[must_use]
    pub fn by_category(&self, category: Category) -> Vec<&CatalogItem> {
        self.items
            .values()
            .filter(|item| item.category == category)
            .collect()
    }

    /// The "popular pizzas" storefront query.
    #[must_use]
    pub fn popular_pizzas(&self) -> Vec<&CatalogItem> {
        self.items
            .values()
            .filter(|item| item.category == Category::Pizza && item.popular)
            .collect()
    }

    /// Case-insensitive name filter, the shape deal option subsets use.
    #[must_use]
    pub fn name_contains(&self, category: Category, needle: &str) -> Vec<&CatalogItem> {
        let needle = needle.to_ascii_lowercase();
        self.items
            .values()
            .filter(|item| {
                item.category == category && item.name.to_ascii_lowercase().contains(&needle)
            })
            .collect()
    }
}
