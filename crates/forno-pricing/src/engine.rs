// SPDX-License-Identifier: Apache-2.0

use rust_decimal::Decimal;

use forno_core::{quote_from_base, round2, EngineConfig, PriceQuote};
use forno_model::{Catalog, CatalogItem, Category, IngredientSelection};

/// Price a custom pizza from its ingredient selection.
///
/// The selection is taken as-is and defensively re-normalized:
/// - ids missing from the catalog contribute nothing (lenient lookup
///   policy, not an error),
/// - only the first crust and the first sauce encountered are counted,
///   so a selection that slipped past the builder's exclusivity rule is
///   never double-charged,
/// - the price-exempt ids (default sauce, default cheese) stay valid
///   entries but contribute nothing.
///
/// The un-rounded ingredient sum is multiplied by the markup and rounded
/// half-up once; tax and total derive from that rounded base.
#[must_use]
pub fn price_custom_pizza(
    catalog: &Catalog,
    config: &EngineConfig,
    selection: &IngredientSelection,
) -> PriceQuote {
    let mut sum = Decimal::ZERO;
    let mut crust_counted = false;
    let mut sauce_counted = false;

    for id in selection.ids() {
        let Some(item) = catalog.get(id) else {
            continue;
        };
        match item.category {
            Category::Crust => {
                if crust_counted {
                    continue;
                }
                crust_counted = true;
            }
            Category::Sauce => {
                if sauce_counted {
                    continue;
                }
                sauce_counted = true;
            }
            _ => {}
        }
        if config.exempt.contains(id) {
            continue;
        }
        sum += item.base_price;
    }

    quote_from_base(round2(sum * config.markup), config.tax_rate)
}

/// Price a plain catalog item: base, rate-derived tax, total.
#[must_use]
pub fn price_catalog_item(item: &CatalogItem, config: &EngineConfig) -> PriceQuote {
    quote_from_base(item.base_price, config.tax_rate)
}
