//! Boundary helpers: reading numbers and checking solver preconditions

mod errors;
mod input;
mod validation;

pub use errors::UtilsError;
pub use input::{parse_numbers, parse_target};
pub use validation::{validate_numbers, value_bound};
