//! Error types for the dispatch core

pub type Result<T> = std::result::Result<T, DispatchError>;

#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    /// Malformed caller input: unsupported message/extra shape, unsupported
    /// severity value, malformed plugin options or plugin reference
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Valid call shape, but an operational precondition failed
    #[error("runtime error: {0}")]
    Runtime(String),

    /// A named writer/filter has no matching registry entry
    #[error("unknown {kind} plugin '{name}'")]
    UnknownPlugin { kind: &'static str, name: String },

    /// Writer I/O failure, passed through undecorated
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic writer-side failure
    #[error("writer error: {0}")]
    Writer(String),
}

impl DispatchError {
    /// Create an invalid argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        DispatchError::InvalidArgument(message.into())
    }

    /// Create a runtime error
    pub fn runtime(message: impl Into<String>) -> Self {
        DispatchError::Runtime(message.into())
    }

    /// Create an unknown plugin error
    pub fn unknown_plugin(kind: &'static str, name: impl Into<String>) -> Self {
        DispatchError::UnknownPlugin {
            kind,
            name: name.into(),
        }
    }

    /// Create a writer error
    pub fn writer<S: Into<String>>(msg: S) -> Self {
        DispatchError::Writer(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = DispatchError::invalid_argument("extra must be a map");
        assert!(matches!(err, DispatchError::InvalidArgument(_)));

        let err = DispatchError::unknown_plugin("writer", "syslog");
        assert!(matches!(err, DispatchError::UnknownPlugin { .. }));
    }

    #[test]
    fn test_error_display() {
        let err = DispatchError::runtime("no log writer specified");
        assert_eq!(err.to_string(), "runtime error: no log writer specified");

        let err = DispatchError::unknown_plugin("filter", "suppress");
        assert_eq!(err.to_string(), "unknown filter plugin 'suppress'");

        let err = DispatchError::writer("stream closed");
        assert_eq!(err.to_string(), "writer error: stream closed");
    }

    #[test]
    fn test_io_error_passthrough() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe gone");
        let err = DispatchError::from(io_err);

        assert!(matches!(err, DispatchError::Io(_)));
        assert!(err.to_string().contains("pipe gone"));
    }
}
