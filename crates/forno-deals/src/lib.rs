#![forbid(unsafe_code)]
//! Deal eligibility engine.
//!
//! Each [`forno_model::DealKind`] owns one eligibility predicate and one
//! price formula, dispatched by exhaustive match — adding a kind without
//! both is a compile error, and unknown kinds cannot exist past parsing.
//!
//! A candidate selection moves `Selecting -> Valid -> Committed`; there
//! is no invalid terminal state, only a not-yet-satisfied one. Commit
//! re-reads the injected clock, so time-windowed eligibility is enforced
//! at the moment it matters.

mod eligibility;
mod pricing;
mod selection;

pub use eligibility::is_eligible;
pub use pricing::price_deal;
pub use selection::{CommittedDeal, DealSelection, SelectionStatus};

pub const CRATE_NAME: &str = "forno-deals";
