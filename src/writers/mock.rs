//! Writer that records every event it receives
//!
//! The recorded events live behind a shared handle, so a test can keep a
//! clone of the writer and inspect what the logger delivered.

use crate::core::{FilterChain, FilterRef, LogEvent, Result, Writer, WriterRef};
use parking_lot::RwLock;
use serde_json::Value;
use std::sync::Arc;

#[derive(Clone, Default)]
pub struct MockWriter {
    events: Arc<RwLock<Vec<LogEvent>>>,
    chain: Arc<RwLock<FilterChain>>,
}

impl MockWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the events delivered so far
    pub fn events(&self) -> Vec<LogEvent> {
        self.events.read().clone()
    }

    pub fn event_count(&self) -> usize {
        self.events.read().len()
    }
}

impl Writer for MockWriter {
    fn write(&mut self, event: &LogEvent) -> Result<()> {
        self.events.write().push(event.clone());
        Ok(())
    }

    fn accepts(&self, event: &LogEvent) -> bool {
        self.chain.read().accept(event)
    }

    fn add_filter(&mut self, filter: FilterRef, options: &Value) -> Result<()> {
        self.chain.write().add(filter, options)
    }

    fn name(&self) -> &str {
        "mock"
    }
}

impl From<MockWriter> for WriterRef {
    fn from(writer: MockWriter) -> Self {
        WriterRef::from_writer(writer)
    }
}
