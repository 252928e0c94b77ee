#![forbid(unsafe_code)]
//! Pricing engine: pure price derivation for catalog items and custom
//! pizzas. No I/O, no clock, no logging; callers own all of that.

mod engine;

pub use engine::{price_catalog_item, price_custom_pizza};
pub use forno_core::{quote_from_base, round2, PriceQuote};

pub const CRATE_NAME: &str = "forno-pricing";
