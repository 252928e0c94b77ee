use std::fmt;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures that can cross a boundary of the storefront core.
///
/// Catalog lookup misses are deliberately absent: unknown ids contribute
/// zero to a price and are never fatal. Quantity underflow in the cart is
/// clamped, not reported.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// User input rejected before any state was touched.
    Validation {
        field: &'static str,
        reason: &'static str,
    },
    /// A deal selection failed its structural or time-window gate.
    IneligibleDeal { deal: String },
    /// An external collaborator call failed; retryable from the caller's
    /// point of view, cart state is left unchanged.
    Collaborator {
        service: &'static str,
        message: String,
    },
    InvalidIdentifier {
        kind: &'static str,
        value: String,
        reason: &'static str,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation { field, reason } => write!(f, "invalid {field}: {reason}"),
            Self::IneligibleDeal { deal } => write!(f, "selection is not eligible for deal `{deal}`"),
            Self::Collaborator { service, message } => {
                write!(f, "{service} call failed: {message}")
            }
            Self::InvalidIdentifier {
                kind,
                value,
                reason,
            } => write!(f, "invalid {kind} `{value}`: {reason}"),
        }
    }
}

impl std::error::Error for Error {}
