//! Error types for the item version domain.
//!
//! Lookup failures that a client can observe (missing name, unknown name,
//! missing version) are *outcomes*, modelled by [`crate::lookup::LookupResult`].
//! The errors here cover malformed domain data only.

/// Domain-level errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// A product identifier could not be parsed
    #[error("Invalid product identifier: {0}")]
    InvalidIdentifier(String),

    /// A product record has no usable title
    #[error("Product {0} has an empty title")]
    EmptyTitle(u64),

    /// An error code string is not one of the published codes
    #[error("Unknown error code: {0}")]
    UnknownErrorCode(String),
}
