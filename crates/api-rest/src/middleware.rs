//! HTTP middleware components.
//!
//! - Request ID generation and propagation
//! - Request logging
//! - Panic to JSON conversion

pub mod logging;
pub mod panic;
pub mod request_id;

pub use logging::logging_middleware;
pub use panic::handle_panic;
pub use request_id::{request_id_middleware, RequestId};
