//! Input validation for lookup requests.

mod item_name;

pub use item_name::*;
