//! Filter that records every event it evaluates and accepts all of them

use crate::core::{Filter, FilterRef, LogEvent};
use parking_lot::RwLock;
use std::sync::Arc;

#[derive(Clone, Default)]
pub struct MockFilter {
    events: Arc<RwLock<Vec<LogEvent>>>,
}

impl MockFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the events offered to this filter so far
    pub fn events(&self) -> Vec<LogEvent> {
        self.events.read().clone()
    }

    pub fn event_count(&self) -> usize {
        self.events.read().len()
    }
}

impl Filter for MockFilter {
    fn accept(&self, event: &LogEvent) -> bool {
        self.events.write().push(event.clone());
        true
    }
}

impl From<MockFilter> for FilterRef {
    fn from(filter: MockFilter) -> Self {
        FilterRef::from_filter(filter)
    }
}
