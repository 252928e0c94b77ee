use std::fmt::Write as _;

use tracing::{info, warn};

use forno_core::{
    to_minor_units, CheckoutLine, CheckoutPayload, CheckoutPort, Clock, ContactDetails, Error,
    FulfillmentMethod, NotificationPort, OrderId, OrderRecordPort, PendingOrder, PendingOrderLine,
    Result, SessionHandle,
};
use forno_model::Catalog;

use crate::cart::{Cart, CartSnapshot};
use crate::tracking::StageTracker;

/// What the caller holds while the buyer is off at the payment page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutSession {
    pub order_id: OrderId,
    pub session: SessionHandle,
}

/// Start a checkout: validate the boundary inputs, persist the pending
/// order record, open a payment session, and fire the best-effort order
/// notification.
///
/// The cart itself is not touched — on any collaborator failure the
/// buyer retries without rebuilding the order. Only the later success
/// callback ([`complete_order`]) clears state.
pub fn submit_order(
    cart: &Cart,
    contact: &ContactDetails,
    catalog: &Catalog,
    orders: &dyn OrderRecordPort,
    checkout: &dyn CheckoutPort,
    notifier: &dyn NotificationPort,
) -> Result<CheckoutSession> {
    let snapshot = cart.snapshot();
    validate_submission(&snapshot, contact)?;

    let total_minor = to_minor_units(snapshot.total).ok_or(Error::Validation {
        field: "total",
        reason: "amount does not fit minor units",
    })?;

    let record = pending_order(&snapshot, contact, total_minor)?;
    let order_id = orders.create_pending(&record)?;

    let payload = checkout_payload(&snapshot, catalog, total_minor)?;
    let session = checkout.create_session(&payload)?;

    info!(
        order_id = %order_id,
        items = snapshot.item_count,
        total_minor,
        "checkout session created"
    );

    // Best-effort by contract: log and move on, never surface to the buyer.
    if let Err(err) = notifier.send_order_summary(&order_summary(&snapshot, contact, &order_id)) {
        warn!(order_id = %order_id, error = %err, "order notification failed");
    }

    Ok(CheckoutSession { order_id, session })
}

/// The payment-success callback: confirm the pending record exists,
/// then clear the cart and restart tracking at stage 1.
pub fn complete_order(
    cart: &mut Cart,
    tracker: &mut StageTracker,
    order_id: &OrderId,
    orders: &dyn OrderRecordPort,
    clock: &dyn Clock,
) -> Result<()> {
    if !orders.exists(order_id)? {
        return Err(Error::Collaborator {
            service: "order_store",
            message: format!("pending order `{order_id}` not found"),
        });
    }
    cart.clear();
    tracker.reset();
    tracker.start(clock.now());
    info!(order_id = %order_id, "order completed, cart cleared");
    Ok(())
}

fn validate_submission(snapshot: &CartSnapshot, contact: &ContactDetails) -> Result<()> {
    if snapshot.lines.is_empty() {
        return Err(Error::Validation {
            field: "cart",
            reason: "must contain at least one line",
        });
    }
    if contact.name.trim().is_empty() {
        return Err(Error::Validation {
            field: "name",
            reason: "must not be empty",
        });
    }
    if contact.phone.trim().is_empty() {
        return Err(Error::Validation {
            field: "phone",
            reason: "must not be empty",
        });
    }
    if !contact.email.contains('@') {
        return Err(Error::Validation {
            field: "email",
            reason: "must be an email address",
        });
    }
    if snapshot.fulfillment == FulfillmentMethod::Delivery
        && contact
            .address
            .as_ref()
            .map_or(true, |address| address.trim().is_empty())
    {
        return Err(Error::Validation {
            field: "address",
            reason: "required for delivery",
        });
    }
    Ok(())
}

fn pending_order(
    snapshot: &CartSnapshot,
    contact: &ContactDetails,
    total_minor: i64,
) -> Result<PendingOrder> {
    Ok(PendingOrder {
        lines: snapshot
            .lines
            .iter()
            .map(|line| PendingOrderLine {
                id: line.id.clone(),
                name: line.name.clone(),
                unit_base: line.unit_base,
                quantity: line.quantity,
            })
            .collect(),
        fulfillment: snapshot.fulfillment,
        contact: contact.clone(),
        total_minor,
    })
}

fn checkout_payload(
    snapshot: &CartSnapshot,
    catalog: &Catalog,
    total_minor: i64,
) -> Result<CheckoutPayload> {
    let mut lines = Vec::with_capacity(snapshot.lines.len());
    for line in &snapshot.lines {
        let unit_base_minor = to_minor_units(line.unit_base).ok_or(Error::Validation {
            field: "unit_base",
            reason: "amount does not fit minor units",
        })?;
        lines.push(CheckoutLine {
            id: line.id.clone(),
            name: line.name.clone(),
            unit_base_minor,
            quantity: line.quantity,
            image_ref: catalog
                .get(&line.id)
                .and_then(|item| item.image_ref.clone()),
        });
    }
    Ok(CheckoutPayload { lines, total_minor })
}

fn order_summary(snapshot: &CartSnapshot, contact: &ContactDetails, order_id: &OrderId) -> String {
    let mut text = format!(
        "Order {order_id} ({}) for {}\n",
        snapshot.fulfillment.as_str(),
        contact.name
    );
    for line in &snapshot.lines {
        let _ = writeln!(
            text,
            "{} x{} @ {} = {}",
            line.name,
            line.quantity,
            line.unit_total,
            line.unit_total * rust_decimal::Decimal::from(line.quantity)
        );
    }
    let _ = write!(text, "Total: {}", snapshot.total);
    text
}
