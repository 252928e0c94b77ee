// SPDX-License-Identifier: Apache-2.0

use chrono::NaiveDate;
use forno_cart::{complete_order, submit_order, Cart, LineCandidate, StageTracker};
use forno_core::{
    ContactDetails, EngineConfig, FixedClock, FulfillmentMethod, ItemId, PriceExemptIds,
    RecordingCheckout, RecordingNotifier, RecordingOrderStore,
};
use forno_model::{Catalog, CatalogItem, Category};
use rust_decimal_macros::dec;

fn id(raw: &str) -> ItemId {
    ItemId::new(raw).expect("item id")
}

fn config() -> EngineConfig {
    EngineConfig::new(PriceExemptIds::new(id("classic-tomato"), id("mozzarella")))
}

fn catalog() -> Catalog {
    Catalog::from_items(vec![
        CatalogItem::new(id("margherita"), "Margherita", dec!(10.00), Category::Pizza)
            .expect("item")
            .with_image_ref("img/margherita.webp"),
        CatalogItem::new(id("cola-large"), "Cola 2L", dec!(4.00), Category::DrinkLarge)
            .expect("item"),
    ])
    .expect("catalog")
}

fn contact() -> ContactDetails {
    ContactDetails {
        name: "Dana".to_string(),
        phone: "416-555-0199".to_string(),
        email: "dana@example.com".to_string(),
        address: None,
    }
}

fn clock() -> FixedClock {
    FixedClock(
        NaiveDate::from_ymd_opt(2025, 3, 5)
            .expect("date")
            .and_hms_opt(18, 0, 0)
            .expect("time"),
    )
}

fn loaded_cart() -> Cart {
    let catalog = catalog();
    let config = config();
    let mut cart = Cart::new(FulfillmentMethod::Pickup);
    let margherita = LineCandidate::catalog_item(
        catalog.get(&id("margherita")).expect("pizza"),
        &config,
    );
    cart.add_line(&margherita);
    cart.add_line(&margherita);
    cart.add_line(&LineCandidate::catalog_item(
        catalog.get(&id("cola-large")).expect("drink"),
        &config,
    ));
    cart
}

#[test]
fn submit_builds_payload_record_and_notification() {
    let cart = loaded_cart();
    let orders = RecordingOrderStore::default();
    let checkout = RecordingCheckout::default();
    let notifier = RecordingNotifier::default();

    let session = submit_order(&cart, &contact(), &catalog(), &orders, &checkout, &notifier)
        .expect("checkout session");

    // Cart untouched until the success callback.
    assert_eq!(cart.item_count(), 3);

    let payloads = checkout.sessions.lock().expect("sessions");
    assert_eq!(payloads.len(), 1);
    let payload = &payloads[0];
    // 2 x 11.30 + 4.52 = 27.12 in cents.
    assert_eq!(payload.total_minor, 2712);
    assert_eq!(payload.lines.len(), 2);
    assert_eq!(payload.lines[0].unit_base_minor, 1000);
    assert_eq!(payload.lines[0].quantity, 2);
    assert_eq!(
        payload.lines[0].image_ref.as_deref(),
        Some("img/margherita.webp")
    );

    let records = orders.orders.lock().expect("orders");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].0, session.order_id);
    assert_eq!(records[0].1.fulfillment, FulfillmentMethod::Pickup);

    let summaries = notifier.summaries.lock().expect("summaries");
    assert_eq!(summaries.len(), 1);
    assert!(summaries[0].contains("Margherita x2"));
}

#[test]
fn notification_failure_never_fails_the_checkout() {
    let cart = loaded_cart();
    let orders = RecordingOrderStore::default();
    let checkout = RecordingCheckout::default();
    let notifier = RecordingNotifier::failing();

    let session = submit_order(&cart, &contact(), &catalog(), &orders, &checkout, &notifier);
    assert!(session.is_ok());
}

#[test]
fn collaborator_failure_leaves_the_cart_intact() {
    let cart = loaded_cart();
    let orders = RecordingOrderStore::default();
    let checkout = RecordingCheckout::failing();
    let notifier = RecordingNotifier::default();

    let result = submit_order(&cart, &contact(), &catalog(), &orders, &checkout, &notifier);
    assert!(result.is_err());
    assert_eq!(cart.item_count(), 3);
    // Nothing was notified for a session that never opened.
    assert!(notifier.summaries.lock().expect("summaries").is_empty());
}

#[test]
fn validation_rejects_before_any_collaborator_is_called() {
    let orders = RecordingOrderStore::default();
    let checkout = RecordingCheckout::default();
    let notifier = RecordingNotifier::default();

    // Empty cart.
    let empty = Cart::default();
    assert!(submit_order(&empty, &contact(), &catalog(), &orders, &checkout, &notifier).is_err());

    // Delivery without an address.
    let mut cart = loaded_cart();
    cart.set_fulfillment(FulfillmentMethod::Delivery);
    assert!(submit_order(&cart, &contact(), &catalog(), &orders, &checkout, &notifier).is_err());

    // Blank name.
    let mut no_name = contact();
    no_name.name = "  ".to_string();
    let cart = loaded_cart();
    assert!(submit_order(&cart, &no_name, &catalog(), &orders, &checkout, &notifier).is_err());

    assert!(orders.orders.lock().expect("orders").is_empty());
    assert!(checkout.sessions.lock().expect("sessions").is_empty());
}

#[test]
fn delivery_with_address_passes_validation() {
    let mut cart = loaded_cart();
    cart.set_fulfillment(FulfillmentMethod::Delivery);
    let mut contact = contact();
    contact.address = Some("100 College St".to_string());

    let orders = RecordingOrderStore::default();
    let checkout = RecordingCheckout::default();
    let notifier = RecordingNotifier::default();
    assert!(submit_order(&cart, &contact, &catalog(), &orders, &checkout, &notifier).is_ok());
}

#[test]
fn success_callback_clears_cart_and_starts_tracking() {
    let mut cart = loaded_cart();
    let mut tracker = StageTracker::new();
    let orders = RecordingOrderStore::default();
    let checkout = RecordingCheckout::default();
    let notifier = RecordingNotifier::default();

    let session = submit_order(&cart, &contact(), &catalog(), &orders, &checkout, &notifier)
        .expect("checkout session");

    complete_order(&mut cart, &mut tracker, &session.order_id, &orders, &clock())
        .expect("complete");

    assert!(cart.is_empty());
    assert_eq!(tracker.stage(), 1);
    assert!(!tracker.is_complete());
}

#[test]
fn completion_requires_an_existing_order_record() {
    let mut cart = loaded_cart();
    let mut tracker = StageTracker::new();
    let orders = RecordingOrderStore::default();

    let unknown = forno_core::OrderId::new("order-777").expect("order id");
    let result = complete_order(&mut cart, &mut tracker, &unknown, &orders, &clock());

    assert!(result.is_err());
    assert_eq!(cart.item_count(), 3);
    assert!(tracker.is_idle());
}
