//! # Log Dispatch System
//!
//! A structured-logging dispatch core: log events are validated once, then
//! routed to registered writers in deterministic priority order after passing
//! each writer's own chain of acceptance filters.
//!
//! ## Features
//!
//! - **Prioritized Writers**: Descending-priority dispatch with stable,
//!   first-inserted-first-served tie-breaking
//! - **Filter Chains**: Per-writer conjunctive acceptance filters (severity
//!   threshold, regex, injected validators)
//! - **Plugin Registries**: Writers and filters resolvable by short name,
//!   extensible with caller factories
//! - **Panic Bridge**: Optional process-wide hook converting panics into log
//!   events on a designated logger
//!
//! Delivery is synchronous and in-process; there is no sampling, batching,
//! or asynchronous delivery, and writer I/O failures propagate to the caller.
//!
//! ## Example
//!
//! ```
//! use log_dispatch_system::prelude::*;
//!
//! let logger = Logger::new();
//! let writer = MockWriter::new();
//! logger.add_writer(writer.clone()).unwrap();
//!
//! logger.info("service started").unwrap();
//! assert_eq!(writer.event_count(), 1);
//! ```

pub mod core;
pub mod filters;
pub mod macros;
pub mod writers;

pub mod prelude {
    pub use crate::core::{
        filter_plugins, DispatchError, EventBuilder, FieldValue, Filter, FilterChain, FilterRef,
        FilterRegistry, LogEvent, Logger, PluginRef, PluginRegistry, Result, Severity, Validator,
        Writer, WriterQueue, WriterRef, WriterRegistry, DEFAULT_PRIORITY,
    };
    pub use crate::filters::{DigitsValidator, MockFilter, PriorityFilter, RegexFilter, ValidatorFilter};
    pub use crate::writers::{MockWriter, NullWriter};
}

pub use crate::core::{
    filter_plugins, DispatchError, EventBuilder, FieldValue, Filter, FilterChain, FilterRef,
    FilterRegistry, LogEvent, Logger, PluginRef, PluginRegistry, Result, Severity, Validator,
    Writer, WriterQueue, WriterRef, WriterRegistry, DEFAULT_PRIORITY,
};
pub use crate::filters::{DigitsValidator, MockFilter, PriorityFilter, RegexFilter, ValidatorFilter};
pub use crate::writers::{MockWriter, NullWriter};
