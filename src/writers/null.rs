//! Writer that discards every event

use crate::core::{FilterChain, FilterRef, LogEvent, Result, Writer, WriterRef};
use serde_json::Value;

#[derive(Default)]
pub struct NullWriter {
    chain: FilterChain,
}

impl NullWriter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Writer for NullWriter {
    fn write(&mut self, _event: &LogEvent) -> Result<()> {
        Ok(())
    }

    fn accepts(&self, event: &LogEvent) -> bool {
        self.chain.accept(event)
    }

    fn add_filter(&mut self, filter: FilterRef, options: &Value) -> Result<()> {
        self.chain.add(filter, options)
    }

    fn name(&self) -> &str {
        "null"
    }
}

impl From<NullWriter> for WriterRef {
    fn from(writer: NullWriter) -> Self {
        WriterRef::from_writer(writer)
    }
}
