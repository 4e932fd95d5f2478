//! # Single Line Logger
//!
//! A logging library that formats every record as standalone single lines,
//! each carrying the calling thread, the resolved call site and a tag.
//!
//! ## Features
//!
//! - **Self-Contained Lines**: Every line is attributable on its own, even
//!   when threads interleave
//! - **Transport-Safe Chunking**: Oversized records are cut at UTF-8
//!   character boundaries, never mid-character
//! - **Pluggable Sinks**: Console and rolling disk sinks included, custom
//!   sinks through one trait
//! - **Thread Safe**: Formatters are immutable and shared without locking

pub mod core;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        FormatStrategy, FormatterConfig, LogSink, Logger, LoggerError, Priority, Result,
        SingleLineFormatter,
    };
    pub use crate::sinks::ConsoleSink;
    #[cfg(feature = "file")]
    pub use crate::sinks::{DiskSink, DiskSinkConfig};
}

pub use crate::core::{
    byte_chunks, BacktraceCapture, CallFrame, CallStackCapture, FormatStrategy, FormatterConfig,
    LogSink, Logger, LoggerError, Priority, Result, SingleLineFormatter, Tagged, CHUNK_SIZE,
    LINE_SEPARATOR,
};
pub use crate::sinks::ConsoleSink;
#[cfg(feature = "file")]
pub use crate::sinks::{DiskSink, DiskSinkConfig, DEFAULT_SHUTDOWN_TIMEOUT};
