use forno_core::{EngineConfig, ItemId, PriceExemptIds};
use forno_model::{Catalog, CatalogItem, Category, IngredientSelection};
use forno_pricing::{price_custom_pizza, round2};
use rust_decimal_macros::dec;

fn id(raw: &str) -> ItemId {
    ItemId::new(raw).expect("item id")
}

fn config() -> EngineConfig {
    EngineConfig::new(PriceExemptIds::new(id("classic-tomato"), id("mozzarella")))
}

fn catalog() -> Catalog {
    Catalog::from_items(vec![
        CatalogItem::new(id("thin-crust"), "Thin Crust", dec!(4.00), Category::Crust)
            .expect("item"),
        CatalogItem::new(id("stuffed-crust"), "Stuffed Crust", dec!(6.50), Category::Crust)
            .expect("item"),
        CatalogItem::new(id("classic-tomato"), "Classic Tomato", dec!(1.00), Category::Sauce)
            .expect("item"),
        CatalogItem::new(id("pesto"), "Pesto", dec!(2.25), Category::Sauce).expect("item"),
        CatalogItem::new(id("mozzarella"), "Mozzarella", dec!(1.50), Category::Cheese)
            .expect("item"),
        CatalogItem::new(id("feta"), "Feta", dec!(2.00), Category::Cheese).expect("item"),
        CatalogItem::new(id("pepperoni"), "Pepperoni", dec!(2.50), Category::Meat).expect("item"),
        CatalogItem::new(id("mushroom"), "Mushroom", dec!(1.75), Category::Vegetable)
            .expect("item"),
    ])
    .expect("catalog")
}

#[test]
fn price_exempt_defaults_contribute_nothing() {
    // Default crust + default sauce + default cheese: only the crust is
    // charged, marked up and rounded once.
    let selection = IngredientSelection::from_ids(vec![
        id("thin-crust"),
        id("classic-tomato"),
        id("mozzarella"),
    ]);
    let quote = price_custom_pizza(&catalog(), &config(), &selection);

    let expected_base = round2(dec!(4.00) * dec!(1.40));
    assert_eq!(quote.base, expected_base);
    assert_eq!(quote.tax, round2(expected_base * dec!(0.13)));
    assert_eq!(quote.total, round2(expected_base + quote.tax));
}

#[test]
fn second_crust_never_adds_a_second_contribution() {
    let single = IngredientSelection::from_ids(vec![id("thin-crust"), id("pepperoni")]);
    let doubled = IngredientSelection::from_ids(vec![
        id("thin-crust"),
        id("stuffed-crust"),
        id("pepperoni"),
    ]);

    let single_quote = price_custom_pizza(&catalog(), &config(), &single);
    let doubled_quote = price_custom_pizza(&catalog(), &config(), &doubled);

    assert_eq!(single_quote, doubled_quote);
}

#[test]
fn first_encountered_sauce_wins() {
    // Pesto first: charged. Default sauce second: ignored as a duplicate
    // sauce, not merely as an exempt id.
    let pesto_first =
        IngredientSelection::from_ids(vec![id("pesto"), id("classic-tomato")]);
    let quote = price_custom_pizza(&catalog(), &config(), &pesto_first);
    assert_eq!(quote.base, round2(dec!(2.25) * dec!(1.40)));

    // Default sauce first: it occupies the sauce slot at zero cost and
    // the premium sauce is ignored.
    let default_first =
        IngredientSelection::from_ids(vec![id("classic-tomato"), id("pesto")]);
    let quote = price_custom_pizza(&catalog(), &config(), &default_first);
    assert_eq!(quote.base, dec!(0.00));
}

#[test]
fn unknown_ids_contribute_zero_without_failing() {
    let selection = IngredientSelection::from_ids(vec![
        id("pepperoni"),
        id("discontinued-topping"),
    ]);
    let quote = price_custom_pizza(&catalog(), &config(), &selection);
    assert_eq!(quote.base, round2(dec!(2.50) * dec!(1.40)));
}

#[test]
fn rounding_happens_once_not_per_ingredient() {
    // 3 x 0.33: summed-then-marked-up gives round2(0.99 * 1.4) = 1.39,
    // per-ingredient rounding would give 3 x round2(0.462) = 1.38.
    let cheap = Catalog::from_items(vec![
        CatalogItem::new(id("oregano"), "Oregano", dec!(0.33), Category::Vegetable)
            .expect("item"),
        CatalogItem::new(id("basil"), "Basil", dec!(0.33), Category::Vegetable).expect("item"),
        CatalogItem::new(id("chili-flakes"), "Chili Flakes", dec!(0.33), Category::Vegetable)
            .expect("item"),
    ])
    .expect("catalog");
    let selection =
        IngredientSelection::from_ids(vec![id("oregano"), id("basil"), id("chili-flakes")]);
    let quote = price_custom_pizza(&cheap, &config(), &selection);
    assert_eq!(quote.base, dec!(1.39));
}
