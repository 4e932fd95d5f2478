//! Sink implementations

pub mod console;

#[cfg(feature = "file")]
pub mod disk;

pub use console::ConsoleSink;

#[cfg(feature = "file")]
pub use disk::{DiskSink, DiskSinkConfig, DEFAULT_SHUTDOWN_TIMEOUT};
