//! Product catalog implementations.

mod in_memory;
mod seed;

pub use in_memory::*;
pub use seed::*;
