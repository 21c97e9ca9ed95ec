//! Ordered filter chain attached to one writer

use super::error::Result;
use super::event::LogEvent;
use super::filter::Filter;
use super::registry::{filter_plugins, FilterRef};
use serde_json::Value;

/// Conjunction of filters, evaluated in attachment order
///
/// An empty chain accepts every event. Evaluation short-circuits on the first
/// rejection; order affects only the work done, never the boolean result.
#[derive(Default)]
pub struct FilterChain {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterChain {
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Attach a filter, resolving names through the process-wide filter
    /// registry
    pub fn add(&mut self, filter: impl Into<FilterRef>, options: &Value) -> Result<()> {
        let filter = filter_plugins().read().resolve(filter.into(), options)?;
        self.filters.push(filter);
        Ok(())
    }

    /// Attach an already-built filter without resolution
    pub fn attach(&mut self, filter: Box<dyn Filter>) {
        self.filters.push(filter);
    }

    pub fn accept(&self, event: &LogEvent) -> bool {
        self.filters.iter().all(|filter| filter.accept(event))
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}
