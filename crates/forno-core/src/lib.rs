#![forbid(unsafe_code)]
//! Shared vocabulary of the forno storefront core.
//!
//! Everything time- or collaborator-dependent flows through the ports in
//! [`ports`]; the pricing and eligibility crates stay pure functions of
//! their explicit inputs.

mod config;
mod errors;
mod money;
mod ports;
mod types;

pub use config::{EngineConfig, PriceExemptIds, DEFAULT_MARKUP, DEFAULT_STAGE_INTERVAL_SECS, DEFAULT_TAX_RATE};
pub use errors::{Error, Result};
pub use money::{quote_from_base, round2, to_minor_units, PriceQuote};
pub use ports::{
    CheckoutLine, CheckoutPayload, CheckoutPort, Clock, ContactDetails, FixedClock,
    NotificationPort, OrderRecordPort, PendingOrder, PendingOrderLine, RecordingCheckout,
    RecordingNotifier, RecordingOrderStore, SessionHandle, SystemClock,
};
pub use types::{FulfillmentMethod, ItemId, OrderId, ID_MAX_LEN};

pub const CRATE_NAME: &str = "forno-core";
