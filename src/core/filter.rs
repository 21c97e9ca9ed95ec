//! Filter trait for per-writer event acceptance

use super::event::LogEvent;

/// Acceptance predicate attached to a writer's filter chain
///
/// Filters hold their own configuration (a threshold, a pattern) but are
/// stateless with respect to the event itself.
pub trait Filter: Send + Sync {
    fn accept(&self, event: &LogEvent) -> bool;
}

/// Arbitrary message validation capability, consumed by the validator filter
pub trait Validator: Send + Sync {
    fn is_valid(&self, value: &str) -> bool;
}
