//! Filter delegating acceptance to an injected validator
//!
//! The validator filter carries an arbitrary [`Validator`] instance, so it is
//! constructed directly rather than resolved by name; options cannot describe
//! a capability object.

use crate::core::{Filter, FilterRef, LogEvent, Validator};

pub struct ValidatorFilter {
    validator: Box<dyn Validator>,
}

impl ValidatorFilter {
    pub fn new(validator: impl Validator + 'static) -> Self {
        Self {
            validator: Box::new(validator),
        }
    }
}

impl Filter for ValidatorFilter {
    fn accept(&self, event: &LogEvent) -> bool {
        self.validator.is_valid(&event.message)
    }
}

impl From<ValidatorFilter> for FilterRef {
    fn from(filter: ValidatorFilter) -> Self {
        FilterRef::from_filter(filter)
    }
}

/// Reference validator: accepts non-empty, all-digit strings
#[derive(Debug, Clone, Copy, Default)]
pub struct DigitsValidator;

impl Validator for DigitsValidator {
    fn is_valid(&self, value: &str) -> bool {
        !value.is_empty() && value.chars().all(|c| c.is_ascii_digit())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{EventBuilder, Severity};
    use serde_json::json;

    fn event(message: &str) -> LogEvent {
        EventBuilder::new()
            .build(Severity::Info, json!(message), json!({}))
            .unwrap()
    }

    #[test]
    fn test_digits_validator() {
        let validator = DigitsValidator;
        assert!(validator.is_valid("123"));
        assert!(!validator.is_valid("12a"));
        assert!(!validator.is_valid(""));
    }

    #[test]
    fn test_delegation() {
        let filter = ValidatorFilter::new(DigitsValidator);
        assert!(filter.accept(&event("123")));
        assert!(!filter.accept(&event("tottakai")));
    }

    #[test]
    fn test_custom_validator() {
        struct MaxLen(usize);
        impl Validator for MaxLen {
            fn is_valid(&self, value: &str) -> bool {
                value.len() <= self.0
            }
        }

        let filter = ValidatorFilter::new(MaxLen(5));
        assert!(filter.accept(&event("short")));
        assert!(!filter.accept(&event("far too long")));
    }
}
