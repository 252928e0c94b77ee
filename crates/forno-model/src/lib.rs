#![forbid(unsafe_code)]
//! Storefront domain model SSOT.
//!
//! ```compile_fail
//! use forno_model::Category;
//!
//! fn exhaustive_match(c: Category) -> &'static str {
//!     match c {
//!         Category::Pizza => "p",
//!         Category::Crust => "c",
//!         Category::Sauce => "s",
//!     }
//! }
//! ```

mod cart_line;
mod catalog;
mod deal;
mod school;
mod selection;

pub use cart_line::{CartLineItem, LineDetail};
pub use catalog::{
    Catalog, CatalogItem, Category, DrinkSize, ValidationError, NAME_MAX_LEN,
};
pub use deal::{DealBook, DealKind, DealOffer, HourRange, TimeWindow};
pub use school::{search_schools, School, SCHOOLS};
pub use selection::IngredientSelection;

pub use forno_core::{FulfillmentMethod, ItemId};

pub const CRATE_NAME: &str = "forno-model";
