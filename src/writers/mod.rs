//! Built-in writer implementations
//!
//! Production sinks (file, stream, syslog, network) are external
//! collaborators; the crate ships only the writers the dispatch contract
//! itself needs.

pub mod mock;
pub mod null;

pub use mock::MockWriter;
pub use null::NullWriter;

// Re-export the trait for convenience
pub use crate::core::Writer;
