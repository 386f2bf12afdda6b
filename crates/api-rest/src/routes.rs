//! HTTP route handlers.

pub mod health;
pub mod version_check;

pub use version_check::register_endpoint;
