// SPDX-License-Identifier: Apache-2.0

use rust_decimal::Decimal;

use forno_core::{quote_from_base, EngineConfig, Error, PriceQuote, Result};
use forno_model::{Catalog, DealKind, DealOffer, ItemId};

use crate::selection::DealSelection;

const STUDENT_FACTOR: Decimal = Decimal::from_parts(5, 0, 0, false, 1);
const LATE_NIGHT_FACTOR: Decimal = Decimal::from_parts(7, 0, 0, false, 1);

/// Price an eligible selection under its deal's formula.
///
/// Callers gate on [`crate::is_eligible`] first; a selection that does
/// not carry the pizzas its formula needs fails closed here as well.
/// Discount factors apply to the un-rounded pizza price and the result
/// is rounded once, inside the final quote derivation.
pub fn price_deal(
    offer: &DealOffer,
    selection: &DealSelection,
    catalog: &Catalog,
    config: &EngineConfig,
) -> Result<PriceQuote> {
    let base = match offer.kind {
        DealKind::TwoPizzaFreeOne => {
            let (first, second) = match selection.pizzas() {
                [first, second] => (first, second),
                _ => return Err(ineligible(offer)),
            };
            let first = pizza_price(catalog, first).ok_or_else(|| ineligible(offer))?;
            let second = pizza_price(catalog, second).ok_or_else(|| ineligible(offer))?;
            // The cheaper pizza is free; the charged base is the dearer one.
            first.max(second)
        }
        DealKind::Bundle | DealKind::LunchCombo => offer.list_price,
        DealKind::StudentDiscount => {
            let pizza = single_pizza_price(catalog, selection).ok_or_else(|| ineligible(offer))?;
            pizza * STUDENT_FACTOR
        }
        DealKind::LateNight => {
            // Eligibility admits one pizza or more; the discount applies
            // to every pizza in the selection.
            if selection.pizzas().is_empty() {
                return Err(ineligible(offer));
            }
            let mut sum = Decimal::ZERO;
            for id in selection.pizzas() {
                sum += pizza_price(catalog, id).ok_or_else(|| ineligible(offer))?;
            }
            sum * LATE_NIGHT_FACTOR
        }
    };
    Ok(quote_from_base(base, config.tax_rate))
}

fn ineligible(offer: &DealOffer) -> Error {
    Error::IneligibleDeal {
        deal: offer.id.to_string(),
    }
}

fn pizza_price(catalog: &Catalog, id: &ItemId) -> Option<Decimal> {
    catalog.get(id).map(|item| item.base_price)
}

fn single_pizza_price(catalog: &Catalog, selection: &DealSelection) -> Option<Decimal> {
    match selection.pizzas() {
        [only] => pizza_price(catalog, only),
        _ => None,
    }
}
