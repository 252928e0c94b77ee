// SPDX-License-Identifier: Apache-2.0

//! Money arithmetic for the storefront core.
//!
//! Every externally observed amount is a two-decimal `Decimal`, rounded
//! half-up exactly once at the end of a computation. Summing
//! already-rounded subtotals is not allowed anywhere in the engine: it
//! accumulates rounding error across multi-ingredient pizzas.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Round to two decimal places, half-up.
#[must_use]
pub fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Convert an amount to minor currency units (cents) for the payment
/// collaborator. `None` when the amount does not fit an `i64`.
#[must_use]
pub fn to_minor_units(value: Decimal) -> Option<i64> {
    (round2(value) * Decimal::ONE_HUNDRED).to_i64()
}

/// A fully derived price: `tax == round2(base * rate)` and
/// `total == round2(base + tax)`, always.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PriceQuote {
    pub base: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
}

/// The single place where tax and total are derived from a base amount.
#[must_use]
pub fn quote_from_base(base: Decimal, tax_rate: Decimal) -> PriceQuote {
    let base = round2(base);
    let tax = round2(base * tax_rate);
    let total = round2(base + tax);
    PriceQuote { base, tax, total }
}
