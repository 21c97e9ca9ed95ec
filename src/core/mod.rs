//! Core dispatch types and traits

pub mod error;
pub mod error_bridge;
pub mod event;
pub mod event_builder;
pub mod filter;
pub mod filter_chain;
pub mod logger;
pub mod queue;
pub mod registry;
pub mod severity;
pub mod writer;

pub use error::{DispatchError, Result};
pub use event::{FieldValue, LogEvent};
pub use event_builder::EventBuilder;
pub use filter::{Filter, Validator};
pub use filter_chain::FilterChain;
pub use logger::Logger;
pub use queue::{WriterQueue, DEFAULT_PRIORITY};
pub use registry::{
    filter_plugins, FilterRef, FilterRegistry, PluginRef, PluginRegistry, WriterRef,
    WriterRegistry,
};
pub use severity::Severity;
pub use writer::Writer;
