#![forbid(unsafe_code)]
//! Cart aggregation and checkout orchestration.
//!
//! The [`Cart`] is an explicit value owned by the session layer — passed
//! in, never reached through a global. Mutations go through its methods;
//! everything a collaborator needs is a [`CartSnapshot`], so line data
//! and derived totals can never drift apart.

mod cart;
mod checkout;
mod tracking;

pub use cart::{Cart, CartSnapshot, LineCandidate};
pub use checkout::{complete_order, submit_order, CheckoutSession};
pub use tracking::{spawn_ticker, OrderStatus, StageTracker, TickerHandle, STAGE_COUNT};

pub const CRATE_NAME: &str = "forno-cart";
