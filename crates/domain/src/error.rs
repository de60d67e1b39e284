//! Common error types used across the workspace.
//!
//! Each layer produces typed errors and converts upward via `#[from]`:
//! drafts and payloads raise [`ValidationError`], the gateway adapters raise
//! [`GatewayError`], and [`FreightdeckError`] is the umbrella where both can
//! flow through the same `Result`.

/// A form draft or payload violated a domain invariant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A required text field was left blank.
    #[error("{field} must not be empty")]
    Required { field: &'static str },

    /// A numeric form field did not parse.
    #[error("{field} must be a number")]
    InvalidNumber { field: &'static str },

    /// A shipment was submitted without a customer selected.
    #[error("a customer must be selected")]
    MissingCustomer,

    /// A status or type string did not match any known variant.
    #[error("unknown {field} value: {value}")]
    UnknownVariant { field: &'static str, value: String },
}

/// A round trip to the backend failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GatewayError {
    /// The backend answered with a non-2xx status. `message` is the
    /// backend-provided `{"message": …}` body when one was parseable,
    /// otherwise a generic `HTTP <status>` text.
    #[error("{message}")]
    Backend { status: u16, message: String },

    /// The request never produced a response (connection refused, DNS, …).
    #[error("transport failure: {0}")]
    Transport(String),

    /// The response body could not be decoded as the expected JSON shape.
    #[error("malformed response: {0}")]
    Decode(String),
}

impl GatewayError {
    /// True when the backend reported the target entity as missing, which
    /// happens on edit/delete of a stale id.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Backend { status: 404, .. })
    }
}

/// Umbrella error for the application layer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FreightdeckError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Gateway(#[from] GatewayError),
}
