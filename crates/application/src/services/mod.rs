//! Application Services
//!
//! The version check pipeline and the catalog port it depends on.

mod catalog;
mod resolver;
mod version_check;

pub use catalog::*;
pub use resolver::*;
pub use version_check::*;

/// Service context for request handling
#[derive(Debug, Clone)]
pub struct ServiceContext {
    /// Request correlation ID for tracing
    pub correlation_id: String,
}

impl ServiceContext {
    pub fn new(correlation_id: impl Into<String>) -> Self {
        Self {
            correlation_id: correlation_id.into(),
        }
    }
}

impl Default for ServiceContext {
    fn default() -> Self {
        Self::new("internal")
    }
}
