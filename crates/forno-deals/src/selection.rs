use serde::{Deserialize, Serialize};

use forno_core::{Clock, EngineConfig, Error, ItemId, PriceQuote, Result};
use forno_model::{Catalog, DealKind, DealOffer, LineDetail, School};

use crate::eligibility::is_eligible;
use crate::pricing::price_deal;

/// Where a candidate selection stands. There is no rejected state: an
/// unsatisfied selection simply stays in `Selecting`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionStatus {
    Selecting,
    Valid,
}

/// A candidate deal selection being assembled in the UI: pizza, side,
/// and drink slots plus an optional school affiliation.
///
/// Slots hold distinct ids in insertion order. The builder enforces
/// nothing else; [`is_eligible`] is the single source of truth and
/// [`commit`](Self::commit) is the only gate into the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct DealSelection {
    pizzas: Vec<ItemId>,
    sides: Vec<ItemId>,
    drinks: Vec<ItemId>,
    school: Option<School>,
}

impl DealSelection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_pizza(&mut self, id: &ItemId) {
        toggle(&mut self.pizzas, id);
    }

    pub fn toggle_side(&mut self, id: &ItemId) {
        toggle(&mut self.sides, id);
    }

    pub fn toggle_drink(&mut self, id: &ItemId) {
        toggle(&mut self.drinks, id);
    }

    pub fn set_school(&mut self, school: School) {
        self.school = Some(school);
    }

    pub fn clear_school(&mut self) {
        self.school = None;
    }

    #[must_use]
    pub fn pizzas(&self) -> &[ItemId] {
        &self.pizzas
    }

    #[must_use]
    pub fn sides(&self) -> &[ItemId] {
        &self.sides
    }

    #[must_use]
    pub fn drinks(&self) -> &[ItemId] {
        &self.drinks
    }

    #[must_use]
    pub fn school(&self) -> Option<&School> {
        self.school.as_ref()
    }

    /// Current position in the `Selecting -> Valid` progression.
    #[must_use]
    pub fn status(
        &self,
        offer: &DealOffer,
        catalog: &Catalog,
        clock: &dyn Clock,
    ) -> SelectionStatus {
        if is_eligible(offer, self, catalog, clock) {
            SelectionStatus::Valid
        } else {
            SelectionStatus::Selecting
        }
    }

    /// The `Valid -> Committed` transition. Re-evaluates eligibility
    /// with a fresh clock read: a modal left open across a time-window
    /// boundary fails here, not at the cart.
    pub fn commit(
        self,
        offer: &DealOffer,
        catalog: &Catalog,
        config: &EngineConfig,
        clock: &dyn Clock,
    ) -> Result<CommittedDeal> {
        if !is_eligible(offer, &self, catalog, clock) {
            return Err(Error::IneligibleDeal {
                deal: offer.id.to_string(),
            });
        }
        let quote = price_deal(offer, &self, catalog, config)?;
        Ok(CommittedDeal {
            offer_id: offer.id.clone(),
            title: offer.title.clone(),
            kind: offer.kind,
            selection: self,
            quote,
        })
    }
}

fn toggle(slot: &mut Vec<ItemId>, id: &ItemId) {
    if slot.iter().any(|known| known == id) {
        slot.retain(|known| known != id);
    } else {
        slot.push(id.clone());
    }
}

/// A selection that passed its deal's gate, priced and frozen for the
/// cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CommittedDeal {
    pub offer_id: ItemId,
    pub title: String,
    pub kind: DealKind,
    pub selection: DealSelection,
    pub quote: PriceQuote,
}

impl CommittedDeal {
    /// Receipt detail for the cart line this deal becomes.
    #[must_use]
    pub fn line_detail(&self) -> LineDetail {
        let mut selections = Vec::new();
        selections.extend_from_slice(self.selection.pizzas());
        selections.extend_from_slice(self.selection.sides());
        selections.extend_from_slice(self.selection.drinks());
        LineDetail::Deal {
            kind: self.kind,
            selections,
            school: self.selection.school().cloned(),
        }
    }
}
