//! Testing utilities for the item version check service
//!
//! This crate provides:
//! - Builders for catalog products
//! - Fixtures matching the documented request scenarios
//! - Mock catalogs that record calls and can simulate outages
//!
//! # Examples
//!
//! ```
//! use item_version_testing::{builders::*, fixtures::*};
//!
//! let product = ProductBuilder::new().with_title("My Widget").with_version("2.3.1").build();
//! assert_eq!(product.published_version(), Some("2.3.1"));
//!
//! let catalog = scenario_catalog();
//! assert_eq!(catalog.len(), 2);
//! ```

pub mod builders;
pub mod fixtures;
pub mod mocks;

// Re-export commonly used types
pub use builders::*;
pub use fixtures::*;
pub use mocks::*;

// Re-export testing dependencies for convenience
pub use proptest;
