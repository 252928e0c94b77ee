// SPDX-License-Identifier: Apache-2.0

use chrono::Timelike;

use forno_core::Clock;
use forno_model::{Catalog, CatalogItem, Category, DealKind, DealOffer, DrinkSize, HourRange, ItemId};

use crate::selection::DealSelection;

/// Decide whether `selection` satisfies `offer`'s structural and time
/// constraints right now.
///
/// Pure in its inputs plus the injected clock: no I/O, no side effects.
/// Ids unknown to the catalog fail the category checks, so a stale
/// selection stays in `Selecting` instead of reaching the cart.
#[must_use]
pub fn is_eligible(
    offer: &DealOffer,
    selection: &DealSelection,
    catalog: &Catalog,
    clock: &dyn Clock,
) -> bool {
    if !offer.active {
        return false;
    }
    if let Some(window) = &offer.time_window {
        if !window.contains(clock.now()) {
            return false;
        }
    }

    let pizzas = selection.pizzas();
    let sides = selection.sides();
    let drinks = selection.drinks();

    match offer.kind {
        DealKind::TwoPizzaFreeOne => slot_filled(catalog, pizzas, 2, is_pizza),
        DealKind::Bundle => {
            slot_filled(catalog, pizzas, 2, is_pizza)
                && slot_filled(catalog, sides, 2, is_side)
                && slot_filled(catalog, drinks, 1, is_large_drink)
        }
        DealKind::StudentDiscount => {
            slot_filled(catalog, pizzas, 1, is_pizza) && selection.school().is_some()
        }
        DealKind::LunchCombo => {
            slot_filled(catalog, pizzas, 1, is_cheese_pizza)
                && slot_filled(catalog, drinks, 1, is_small_drink)
        }
        DealKind::LateNight => {
            !pizzas.is_empty()
                && pizzas.iter().all(|id| holds(catalog, id, is_pizza))
                && HourRange::LATE_NIGHT.contains(clock.now().hour())
        }
    }
}

/// A slot is filled when it holds exactly `expected` ids and every id
/// passes the subset predicate.
fn slot_filled(
    catalog: &Catalog,
    ids: &[ItemId],
    expected: usize,
    accepts: fn(&CatalogItem) -> bool,
) -> bool {
    ids.len() == expected && ids.iter().all(|id| holds(catalog, id, accepts))
}

fn holds(catalog: &Catalog, id: &ItemId, accepts: fn(&CatalogItem) -> bool) -> bool {
    catalog.get(id).is_some_and(accepts)
}

fn is_pizza(item: &CatalogItem) -> bool {
    item.category == Category::Pizza
}

fn is_side(item: &CatalogItem) -> bool {
    item.category == Category::Side
}

fn is_large_drink(item: &CatalogItem) -> bool {
    item.category.drink_size() == Some(DrinkSize::Large)
}

fn is_small_drink(item: &CatalogItem) -> bool {
    item.category.drink_size() == Some(DrinkSize::Small)
}

fn is_cheese_pizza(item: &CatalogItem) -> bool {
    is_pizza(item) && item.name.to_ascii_lowercase().contains("cheese")
}
