use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use forno_core::{EngineConfig, FulfillmentMethod, ItemId, PriceQuote};
use forno_deals::CommittedDeal;
use forno_model::{Catalog, CartLineItem, CatalogItem, IngredientSelection, LineDetail};
use forno_pricing::{price_catalog_item, price_custom_pizza};

/// A priced purchasable unit ready to enter the cart. Prices are
/// computed exactly once, here; repeat additions of the same id reuse
/// the unit prices already on the line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineCandidate {
    pub id: ItemId,
    pub name: String,
    pub quote: PriceQuote,
    pub detail: LineDetail,
}

impl LineCandidate {
    /// A plain catalog item (menu pizza, drink, side).
    #[must_use]
    pub fn catalog_item(item: &CatalogItem, config: &EngineConfig) -> Self {
        Self {
            id: item.id.clone(),
            name: item.name.clone(),
            quote: price_catalog_item(item, config),
            detail: LineDetail::Plain,
        }
    }

    /// A built-to-order pizza. The caller names it and supplies the
    /// session-unique id the line will merge under.
    #[must_use]
    pub fn custom_pizza(
        id: ItemId,
        name: impl Into<String>,
        catalog: &Catalog,
        config: &EngineConfig,
        selection: &IngredientSelection,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            quote: price_custom_pizza(catalog, config, selection),
            detail: LineDetail::CustomPizza {
                ingredients: selection.ids().to_vec(),
            },
        }
    }

    /// A deal that passed its eligibility gate.
    #[must_use]
    pub fn deal(committed: &CommittedDeal) -> Self {
        Self {
            id: committed.offer_id.clone(),
            name: committed.title.clone(),
            quote: committed.quote,
            detail: committed.line_detail(),
        }
    }
}

/// The in-memory order ledger: insertion-ordered lines, unique by id.
///
/// Totals are always derived from the lines on demand — nothing is
/// cached, so no sequence of operations can desynchronize them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLineItem>,
    fulfillment: FulfillmentMethod,
}

impl Default for Cart {
    fn default() -> Self {
        Self::new(FulfillmentMethod::Pickup)
    }
}

impl Cart {
    #[must_use]
    pub fn new(fulfillment: FulfillmentMethod) -> Self {
        Self {
            lines: Vec::new(),
            fulfillment,
        }
    }

    /// Add one unit of `candidate`. An existing line with the same id
    /// absorbs it as quantity, keeping its original unit prices even if
    /// the catalog has moved since.
    pub fn add_line(&mut self, candidate: &LineCandidate) {
        if let Some(line) = self.lines.iter_mut().find(|line| line.id == candidate.id) {
            line.quantity += 1;
            return;
        }
        self.lines.push(CartLineItem::new(
            candidate.id.clone(),
            candidate.name.clone(),
            candidate.quote,
            candidate.detail.clone(),
        ));
    }

    /// Remove one unit; the line disappears when its quantity reaches
    /// zero. An absent id is a no-op — quantity is already zero.
    pub fn decrement(&mut self, id: &ItemId) {
        if let Some(line) = self.lines.iter_mut().find(|line| line.id == *id) {
            line.quantity = line.quantity.saturating_sub(1);
        }
        self.lines.retain(|line| line.quantity > 0);
    }

    /// Remove the whole line regardless of quantity. Returns how many
    /// units were dropped: the line's full quantity, or 0 when absent.
    pub fn remove_line(&mut self, id: &ItemId) -> u32 {
        let removed = self
            .lines
            .iter()
            .find(|line| line.id == *id)
            .map_or(0, |line| line.quantity);
        self.lines.retain(|line| line.id != *id);
        removed
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn set_fulfillment(&mut self, fulfillment: FulfillmentMethod) {
        self.fulfillment = fulfillment;
    }

    #[must_use]
    pub fn fulfillment(&self) -> FulfillmentMethod {
        self.fulfillment
    }

    #[must_use]
    pub fn lines(&self) -> &[CartLineItem] {
        &self.lines
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        self.sum_over(|line| line.unit_base)
    }

    #[must_use]
    pub fn tax(&self) -> Decimal {
        self.sum_over(|line| line.unit_tax)
    }

    #[must_use]
    pub fn total(&self) -> Decimal {
        self.sum_over(|line| line.unit_total)
    }

    fn sum_over(&self, unit: impl Fn(&CartLineItem) -> Decimal) -> Decimal {
        self.lines
            .iter()
            .map(|line| unit(line) * Decimal::from(line.quantity))
            .sum()
    }

    /// Immutable view for collaborators: lines plus the derived totals,
    /// frozen at this instant.
    #[must_use]
    pub fn snapshot(&self) -> CartSnapshot {
        CartSnapshot {
            lines: self.lines.clone(),
            fulfillment: self.fulfillment,
            item_count: self.item_count(),
            subtotal: self.subtotal(),
            tax: self.tax(),
            total: self.total(),
        }
    }
}

/// What checkout and receipts consume. Mutating the cart afterwards
/// does not touch an already-taken snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CartSnapshot {
    pub lines: Vec<CartLineItem>,
    pub fulfillment: FulfillmentMethod,
    pub item_count: u32,
    pub subtotal: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
}
