use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use forno_core::{FixedClock, ItemId};
use forno_deals::{is_eligible, DealSelection};
use forno_model::{Catalog, CatalogItem, Category, DealKind, DealOffer};
use rust_decimal::Decimal;

fn id(raw: &str) -> ItemId {
    ItemId::new(raw).expect("item id")
}

fn fixture() -> (Catalog, Vec<DealOffer>, DealSelection, FixedClock) {
    let catalog = Catalog::from_items(vec![
        CatalogItem::new(id("margherita"), "Margherita", Decimal::new(1200, 2), Category::Pizza)
            .expect("item"),
        CatalogItem::new(id("diavola"), "Diavola", Decimal::new(1500, 2), Category::Pizza)
            .expect("item"),
        CatalogItem::new(id("garlic-bread"), "Garlic Bread", Decimal::new(500, 2), Category::Side)
            .expect("item"),
        CatalogItem::new(id("wings"), "Wings", Decimal::new(900, 2), Category::Side)
            .expect("item"),
        CatalogItem::new(id("cola-large"), "Cola 2L", Decimal::new(400, 2), Category::DrinkLarge)
            .expect("item"),
    ])
    .expect("catalog");

    let offers = vec![
        DealOffer::new(
            id("deal-two-for-one"),
            "Two Pizzas, One Free",
            Decimal::ZERO,
            DealKind::TwoPizzaFreeOne,
        )
        .expect("offer"),
        DealOffer::new(
            id("deal-bundle"),
            "Family Bundle",
            Decimal::new(2999, 2),
            DealKind::Bundle,
        )
        .expect("offer"),
        DealOffer::new(
            id("deal-late-night"),
            "Late Night Special",
            Decimal::ZERO,
            DealKind::LateNight,
        )
        .expect("offer"),
    ];

    let mut selection = DealSelection::new();
    selection.toggle_pizza(&id("margherita"));
    selection.toggle_pizza(&id("diavola"));
    selection.toggle_side(&id("garlic-bread"));
    selection.toggle_side(&id("wings"));
    selection.toggle_drink(&id("cola-large"));

    let clock = FixedClock(
        NaiveDate::from_ymd_opt(2025, 3, 5)
            .expect("date")
            .and_hms_opt(23, 0, 0)
            .expect("time"),
    );

    (catalog, offers, selection, clock)
}

fn bench_eligibility(c: &mut Criterion) {
    let (catalog, offers, selection, clock) = fixture();

    c.bench_function("is_eligible_all_kinds", |b| {
        b.iter(|| {
            offers
                .iter()
                .filter(|offer| {
                    is_eligible(
                        black_box(offer),
                        black_box(&selection),
                        black_box(&catalog),
                        &clock,
                    )
                })
                .count()
        })
    });
}

criterion_group!(benches, bench_eligibility);
criterion_main!(benches);
