//! Error type shared across the crate

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// IO failure tagged with the operation that hit it
    #[error("could not {operation}: {message}")]
    IoOperation {
        operation: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// IO failure with no extra context
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Rejected sink or formatter configuration
    #[error("{component} configuration rejected: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// Log file rollover that could not complete
    #[error("could not roll over '{path}': {message}")]
    FileRotationError { path: String, message: String },

    /// Writer thread hung up before the line was queued
    #[error("Failed to send log line to disk worker")]
    ChannelSendError,

    /// Anything that does not fit the variants above
    #[error("{0}")]
    Other(String),
}

impl LoggerError {
    /// Wraps an IO failure together with the operation being attempted.
    pub fn io_operation(
        operation: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            message: message.into(),
            source,
        }
    }

    /// Builds a configuration rejection for a named component.
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Builds a rollover failure for the given file path.
    pub fn file_rotation(path: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::FileRotationError {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Wraps a plain message.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LoggerError::Other(msg.into())
    }
}
