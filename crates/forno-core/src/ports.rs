// SPDX-License-Identifier: Apache-2.0

//! Narrow contracts to the external collaborators.
//!
//! Deterministic engine paths never read the wall clock or talk to a
//! collaborator directly; they take these ports as explicit inputs. The
//! in-memory implementations below are the test doubles used across the
//! workspace.

use chrono::{Local, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::sync::Mutex;

use crate::errors::Result;
use crate::types::{FulfillmentMethod, ItemId, OrderId};

/// Wall-clock access, injected wherever eligibility depends on time.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// The real clock: local wall time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock pinned to one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// Opaque session handle returned by the payment provider; the UI layer
/// redirects the buyer with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionHandle(String);

impl SessionHandle {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// One normalized line handed to the payment provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CheckoutLine {
    pub id: ItemId,
    pub name: String,
    pub unit_base_minor: i64,
    pub quantity: u32,
    pub image_ref: Option<String>,
}

/// Everything the payment provider needs to open a hosted session.
/// Amounts are minor currency units (cents).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CheckoutPayload {
    pub lines: Vec<CheckoutLine>,
    pub total_minor: i64,
}

pub trait CheckoutPort {
    fn create_session(&self, payload: &CheckoutPayload) -> Result<SessionHandle>;
}

/// Buyer contact details captured at checkout. Field-level validation
/// happens at the checkout boundary, before any collaborator is called.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContactDetails {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PendingOrderLine {
    pub id: ItemId,
    pub name: String,
    pub unit_base: Decimal,
    pub quantity: u32,
}

/// The order record persisted before redirecting to payment. Its id is
/// the session's correlation key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PendingOrder {
    pub lines: Vec<PendingOrderLine>,
    pub fulfillment: FulfillmentMethod,
    pub contact: ContactDetails,
    pub total_minor: i64,
}

pub trait OrderRecordPort {
    fn create_pending(&self, record: &PendingOrder) -> Result<OrderId>;
    fn exists(&self, id: &OrderId) -> Result<bool>;
}

/// Fire-and-forget order summary. Callers log failures and move on;
/// delivery is best-effort by contract.
pub trait NotificationPort {
    fn send_order_summary(&self, text: &str) -> Result<()>;
}

fn into_inner_lossy<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
}

/// Records payloads and hands out sequential session handles.
#[derive(Debug, Default)]
pub struct RecordingCheckout {
    pub sessions: Mutex<Vec<CheckoutPayload>>,
    pub fail: bool,
}

impl RecordingCheckout {
    #[must_use]
    pub fn failing() -> Self {
        Self {
            sessions: Mutex::new(Vec::new()),
            fail: true,
        }
    }
}

impl CheckoutPort for RecordingCheckout {
    fn create_session(&self, payload: &CheckoutPayload) -> Result<SessionHandle> {
        if self.fail {
            return Err(crate::errors::Error::Collaborator {
                service: "checkout",
                message: "session creation refused".to_string(),
            });
        }
        let mut sessions = into_inner_lossy(&self.sessions);
        sessions.push(payload.clone());
        Ok(SessionHandle::new(format!("sess-{}", sessions.len())))
    }
}

/// Stores pending orders in memory under sequential ids.
#[derive(Debug, Default)]
pub struct RecordingOrderStore {
    pub orders: Mutex<Vec<(OrderId, PendingOrder)>>,
}

impl OrderRecordPort for RecordingOrderStore {
    fn create_pending(&self, record: &PendingOrder) -> Result<OrderId> {
        let mut orders = into_inner_lossy(&self.orders);
        let id = OrderId::new(format!("order-{}", orders.len() + 1))?;
        orders.push((id.clone(), record.clone()));
        Ok(id)
    }

    fn exists(&self, id: &OrderId) -> Result<bool> {
        let orders = into_inner_lossy(&self.orders);
        Ok(orders.iter().any(|(known, _)| known == id))
    }
}

/// Captures summaries; can be flipped to fail for the best-effort tests.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    pub summaries: Mutex<Vec<String>>,
    pub fail: bool,
}

impl RecordingNotifier {
    #[must_use]
    pub fn failing() -> Self {
        Self {
            summaries: Mutex::new(Vec::new()),
            fail: true,
        }
    }
}

impl NotificationPort for RecordingNotifier {
    fn send_order_summary(&self, text: &str) -> Result<()> {
        if self.fail {
            return Err(crate::errors::Error::Collaborator {
                service: "notification",
                message: "webhook unreachable".to_string(),
            });
        }
        into_inner_lossy(&self.summaries).push(text.to_string());
        Ok(())
    }
}
