use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::ItemId;

/// Canonical sales tax rate: 0.13.
///
/// The legacy storefront charged 0.10 on one catalog-add path and 0.13
/// everywhere else; that was a latent inconsistency, not a tax policy.
/// A deployment that needs another rate changes it here, once.
pub const DEFAULT_TAX_RATE: Decimal = Decimal::from_parts(13, 0, 0, false, 2);

/// Markup multiplier applied to the summed ingredient cost of a custom
/// pizza: 1.40.
pub const DEFAULT_MARKUP: Decimal = Decimal::from_parts(140, 0, 0, false, 2);

/// Seconds between order-status simulation ticks.
pub const DEFAULT_STAGE_INTERVAL_SECS: u64 = 10;

/// The two ingredients whose base price never enters a custom-pizza sum.
/// They stay valid selection entries; they just cost nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PriceExemptIds {
    pub default_sauce: ItemId,
    pub default_cheese: ItemId,
}

impl PriceExemptIds {
    #[must_use]
    pub fn new(default_sauce: ItemId, default_cheese: ItemId) -> Self {
        Self {
            default_sauce,
            default_cheese,
        }
    }

    #[must_use]
    pub fn contains(&self, id: &ItemId) -> bool {
        *id == self.default_sauce || *id == self.default_cheese
    }
}

/// Engine-wide pricing and simulation knobs. Constructed in code and
/// handed down explicitly; there is no ambient global configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EngineConfig {
    pub tax_rate: Decimal,
    pub markup: Decimal,
    pub exempt: PriceExemptIds,
    pub stage_interval_secs: u64,
}

impl EngineConfig {
    #[must_use]
    pub fn new(exempt: PriceExemptIds) -> Self {
        Self {
            tax_rate: DEFAULT_TAX_RATE,
            markup: DEFAULT_MARKUP,
            exempt,
            stage_interval_secs: DEFAULT_STAGE_INTERVAL_SECS,
        }
    }

    #[must_use]
    pub fn with_tax_rate(mut self, tax_rate: Decimal) -> Self {
        self.tax_rate = tax_rate;
        self
    }

    #[must_use]
    pub fn with_markup(mut self, markup: Decimal) -> Self {
        self.markup = markup;
        self
    }

    #[must_use]
    pub fn with_stage_interval_secs(mut self, secs: u64) -> Self {
        self.stage_interval_secs = secs;
        self
    }
}
