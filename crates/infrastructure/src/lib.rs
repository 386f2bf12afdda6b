//! Infrastructure layer for the item version check service
//!
//! This crate provides catalog implementations behind the application's
//! [`ProductCatalog`](item_version_application::ProductCatalog) port:
//!
//! - An in-memory catalog with a configurable title match policy
//! - A loader that seeds the in-memory catalog from a JSON or TOML file
//!
//! ## Usage
//!
//! ```rust,no_run
//! use item_version_common::MatchPolicy;
//! use item_version_infrastructure::catalog::{load_seed_file, InMemoryProductCatalog};
//!
//! let products = load_seed_file("catalog/products.json".as_ref())?;
//! let catalog = InMemoryProductCatalog::with_products(MatchPolicy::Exact, products);
//! # Ok::<(), item_version_infrastructure::catalog::SeedError>(())
//! ```

pub mod catalog;

pub use catalog::{load_seed_file, InMemoryProductCatalog, SeedError};
