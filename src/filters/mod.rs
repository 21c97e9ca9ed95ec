//! Built-in filter implementations

pub mod mock;
pub mod priority;
pub mod regex;
pub mod validator;

pub use self::mock::MockFilter;
pub use self::priority::PriorityFilter;
pub use self::regex::RegexFilter;
pub use self::validator::{DigitsValidator, ValidatorFilter};

// Re-export the traits for convenience
pub use crate::core::{Filter, Validator};
