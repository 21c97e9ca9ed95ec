//! Writer trait for log output destinations

use super::error::Result;
use super::event::LogEvent;
use super::registry::FilterRef;
use serde_json::Value;

/// Output sink capability
///
/// A writer performs the actual side effect for an accepted event and owns a
/// private filter chain consulted before every delivery. Writers are owned by
/// exactly one queue slot at a time.
pub trait Writer: Send + Sync {
    /// Perform the output side effect for one event
    fn write(&mut self, event: &LogEvent) -> Result<()>;

    /// Evaluate this writer's filter chain over the event
    fn accepts(&self, event: &LogEvent) -> bool;

    /// Attach a filter, resolving names through the filter plugin registry
    fn add_filter(&mut self, filter: FilterRef, options: &Value) -> Result<()>;

    fn name(&self) -> &str;
}
