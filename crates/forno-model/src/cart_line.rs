use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use forno_core::{quote_from_base, round2, ItemId, PriceQuote};

use crate::catalog::ValidationError;
use crate::deal::DealKind;
use crate::school::School;

/// What a cart line actually contains, kept for receipts and the order
/// record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineDetail {
    Plain,
    CustomPizza { ingredients: Vec<ItemId> },
    Deal {
        kind: DealKind,
        selections: Vec<ItemId>,
        school: Option<School>,
    },
}

/// One cart row: a purchasable id with per-unit prices fixed at
/// insertion time and a quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CartLineItem {
    pub id: ItemId,
    pub name: String,
    pub unit_base: Decimal,
    pub unit_tax: Decimal,
    pub unit_total: Decimal,
    pub quantity: u32,
    pub detail: LineDetail,
}

impl CartLineItem {
    #[must_use]
    pub fn new(id: ItemId, name: impl Into<String>, quote: PriceQuote, detail: LineDetail) -> Self {
        Self {
            id,
            name: name.into(),
            unit_base: quote.base,
            unit_tax: quote.tax,
            unit_total: quote.total,
            quantity: 1,
            detail,
        }
    }

    /// Check the per-line money invariants against a tax rate.
    pub fn validate(&self, tax_rate: Decimal) -> Result<(), ValidationError> {
        if self.quantity == 0 {
            return Err(ValidationError(format!(
                "line {} quantity must be >= 1",
                self.id
            )));
        }
        let expected = quote_from_base(self.unit_base, tax_rate);
        if self.unit_tax != expected.tax {
            return Err(ValidationError(format!(
                "line {} unit tax {} does not match rate-derived {}",
                self.id, self.unit_tax, expected.tax
            )));
        }
        if self.unit_total != round2(self.unit_base + self.unit_tax) {
            return Err(ValidationError(format!(
                "line {} unit total {} does not match base + tax",
                self.id, self.unit_total
            )));
        }
        Ok(())
    }
}
