//! Item Version Check Domain Types
//!
//! This crate provides the core domain model for the item version check service:
//! the catalog product a name resolves to, and the closed set of outcomes a
//! version lookup can produce.
//!
//! ## Architecture
//!
//! - **identifiers**: Strongly-typed product identifier
//! - **product**: Read-only view of a catalog product
//! - **lookup**: Lookup request, outcome and error codes
//! - **errors**: Domain error types
//!
//! ## Usage
//!
//! ```rust
//! use item_version_domain::{
//!     identifiers::ProductId,
//!     lookup::{ErrorCode, LookupResult},
//! };
//!
//! let id = ProductId::new(42);
//! assert_eq!(id.value(), 42);
//!
//! let result = LookupResult::failure(ErrorCode::NameMissing);
//! assert_eq!(result.error_code(), Some(ErrorCode::NameMissing));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod errors;
pub mod identifiers;
pub mod lookup;
pub mod product;

// Re-export commonly used types
pub use errors::DomainError;
pub use identifiers::ProductId;
pub use lookup::{ErrorCode, LookupRequest, LookupResult};
pub use product::Product;
