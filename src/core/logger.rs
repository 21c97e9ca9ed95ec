//! Main logger implementation
//!
//! The logger orchestrates one dispatch pass per log call: the event builder
//! validates the inputs, the writer queue is traversed in descending priority
//! order, each writer's filter chain is consulted, and accepting writers
//! perform their output inline on the caller's thread. Delivery is
//! synchronous; the internal locks exist so `log` can take `&self` and the
//! error bridge can hold the logger in a `'static` panic hook, not to make
//! concurrent dispatch a supported pattern.

use super::{
    error::{DispatchError, Result},
    event_builder::EventBuilder,
    queue::{WriterQueue, DEFAULT_PRIORITY},
    registry::{WriterRef, WriterRegistry},
    severity::Severity,
    writer::Writer,
};
use crate::core::error_bridge;
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use serde_json::{Map, Value};
use std::sync::Arc;

pub struct Logger {
    writers: RwLock<WriterQueue>,
    writer_plugins: RwLock<WriterRegistry>,
    builder: EventBuilder,
}

impl Logger {
    pub fn new() -> Self {
        Self::with_event_builder(EventBuilder::new())
    }

    /// Construct a logger around a specific event builder, e.g. one with a
    /// fixed clock
    pub fn with_event_builder(builder: EventBuilder) -> Self {
        Self {
            writers: RwLock::new(WriterQueue::new()),
            writer_plugins: RwLock::new(WriterRegistry::with_defaults()),
            builder,
        }
    }

    /// Resolve a writer from this logger's plugin registry
    pub fn writer_plugin(&self, name: &str, options: &Value) -> Result<Box<dyn Writer>> {
        self.writer_plugins.read().get(name, options)
    }

    pub fn writer_plugins(&self) -> RwLockReadGuard<'_, WriterRegistry> {
        self.writer_plugins.read()
    }

    /// Replace this logger's writer plugin registry wholesale
    pub fn set_writer_plugins(&self, registry: WriterRegistry) {
        *self.writer_plugins.write() = registry;
    }

    /// Register an additional writer factory on this logger
    pub fn register_writer_plugin(
        &self,
        name: &str,
        factory: impl Fn(&Value) -> Result<Box<dyn Writer>> + Send + Sync + 'static,
    ) {
        self.writer_plugins.write().register(name, factory);
    }

    /// Add a writer at the default priority
    pub fn add_writer(&self, writer: impl Into<WriterRef>) -> Result<()> {
        self.add_writer_with_priority(writer, DEFAULT_PRIORITY)
    }

    /// Add a writer at an explicit priority
    ///
    /// Names are resolved through the writer plugin registry before the
    /// queue insertion.
    pub fn add_writer_with_priority(
        &self,
        writer: impl Into<WriterRef>,
        priority: i32,
    ) -> Result<()> {
        let writer = self
            .writer_plugins
            .read()
            .resolve(writer.into(), &Value::Null)?;
        self.writers.write().add(writer, priority);
        Ok(())
    }

    /// Replace the writer queue wholesale
    ///
    /// Writers absent from the new queue are dropped without any implicit
    /// flush; that responsibility belongs to the writer itself.
    pub fn set_writers(&self, queue: WriterQueue) {
        *self.writers.write() = queue;
    }

    pub fn writers(&self) -> RwLockReadGuard<'_, WriterQueue> {
        self.writers.read()
    }

    /// Log a message with no extra attributes
    pub fn log(&self, level: Severity, message: impl Into<Value>) -> Result<()> {
        self.log_with(level, message, Value::Object(Map::new()))
    }

    /// Log a message with extra attributes
    ///
    /// Fails before building any event when no writer is registered. A
    /// writer's output failure propagates to the caller and aborts the
    /// remaining traversal for this call; rejection by one writer's filter
    /// chain never affects the others.
    pub fn log_with(
        &self,
        level: Severity,
        message: impl Into<Value>,
        extra: impl Into<Value>,
    ) -> Result<()> {
        self.dispatch(self.writers.write(), level, message.into(), extra.into())
    }

    /// Dispatch path for the error bridge: fails instead of blocking when the
    /// writer queue is already locked, e.g. by a dispatch pass on this very
    /// thread whose writer panicked.
    pub(crate) fn log_nonblocking(
        &self,
        level: Severity,
        message: impl Into<Value>,
        extra: impl Into<Value>,
    ) -> Result<()> {
        let writers = self
            .writers
            .try_write()
            .ok_or_else(|| DispatchError::runtime("writer queue is locked"))?;
        self.dispatch(writers, level, message.into(), extra.into())
    }

    fn dispatch(
        &self,
        mut writers: RwLockWriteGuard<'_, WriterQueue>,
        level: Severity,
        message: Value,
        extra: Value,
    ) -> Result<()> {
        if writers.is_empty() {
            return Err(DispatchError::runtime("no log writer specified"));
        }

        let event = self.builder.build(level, message, extra)?;
        for writer in writers.iter_mut() {
            if writer.accepts(&event) {
                writer.write(&event)?;
            }
        }
        Ok(())
    }

    #[inline]
    pub fn emerg(&self, message: impl Into<Value>) -> Result<()> {
        self.log(Severity::Emerg, message)
    }

    #[inline]
    pub fn alert(&self, message: impl Into<Value>) -> Result<()> {
        self.log(Severity::Alert, message)
    }

    #[inline]
    pub fn crit(&self, message: impl Into<Value>) -> Result<()> {
        self.log(Severity::Crit, message)
    }

    #[inline]
    pub fn err(&self, message: impl Into<Value>) -> Result<()> {
        self.log(Severity::Err, message)
    }

    #[inline]
    pub fn warn(&self, message: impl Into<Value>) -> Result<()> {
        self.log(Severity::Warn, message)
    }

    #[inline]
    pub fn notice(&self, message: impl Into<Value>) -> Result<()> {
        self.log(Severity::Notice, message)
    }

    #[inline]
    pub fn info(&self, message: impl Into<Value>) -> Result<()> {
        self.log(Severity::Info, message)
    }

    #[inline]
    pub fn debug(&self, message: impl Into<Value>) -> Result<()> {
        self.log(Severity::Debug, message)
    }

    /// Install the process-wide panic-hook bridge targeting `logger`
    ///
    /// Returns `false` without altering state when a bridge is already
    /// installed; at most one bridge handler is active per process.
    ///
    /// A panic raised by one of `logger`'s own writers mid-dispatch is not
    /// re-logged: the hook skips delivery when the writer queue is still
    /// locked by the panicking call, then hands the panic on as usual.
    pub fn register_error_handler(logger: Arc<Logger>) -> bool {
        error_bridge::register(logger)
    }

    /// Remove the bridge and restore the previously captured hook verbatim
    pub fn unregister_error_handler() -> bool {
        error_bridge::unregister()
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::writers::MockWriter;
    use serde_json::json;

    #[test]
    fn test_empty_queue_is_a_runtime_error() {
        let logger = Logger::new();
        let err = logger.log(Severity::Info, "test").unwrap_err();
        assert!(matches!(err, DispatchError::Runtime(_)));
        assert!(err.to_string().contains("no log writer specified"));
    }

    #[test]
    fn test_logging_delivers_to_writer() {
        let logger = Logger::new();
        let writer = MockWriter::new();
        logger.add_writer(WriterRef::from_writer(writer.clone())).unwrap();

        logger.log(Severity::Info, "tottakai").unwrap();

        assert_eq!(writer.event_count(), 1);
        assert!(writer.events()[0].message.contains("tottakai"));
    }

    #[test]
    fn test_add_writer_by_name() {
        let logger = Logger::new();
        logger.add_writer("mock").unwrap();
        assert_eq!(logger.writers().names(), vec!["mock"]);
    }

    #[test]
    fn test_severity_helpers() {
        let logger = Logger::new();
        let writer = MockWriter::new();
        logger.add_writer(WriterRef::from_writer(writer.clone())).unwrap();

        logger.err("failed").unwrap();
        logger.debug("details").unwrap();

        let events = writer.events();
        assert_eq!(events[0].level, Severity::Err);
        assert_eq!(events[1].level, Severity::Debug);
    }

    #[test]
    fn test_invalid_message_does_not_reach_writers() {
        let logger = Logger::new();
        let writer = MockWriter::new();
        logger.add_writer(WriterRef::from_writer(writer.clone())).unwrap();

        let err = logger.log(Severity::Err, json!({})).unwrap_err();
        assert!(matches!(err, DispatchError::InvalidArgument(_)));
        assert_eq!(writer.event_count(), 0);
    }
}
