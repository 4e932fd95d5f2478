//! Core formatting types and traits

pub mod call_stack;
pub mod chunk;
pub mod error;
pub mod format;
pub mod logger;
pub mod priority;
pub mod sink;
pub mod strategy;

pub use call_stack::{BacktraceCapture, CallFrame, CallStackCapture};
pub use chunk::{byte_chunks, split_lines, ByteChunks, CHUNK_SIZE, LINE_SEPARATOR};
pub use error::{LoggerError, Result};
pub use format::{FormatterConfig, SingleLineFormatter};
pub use logger::{Logger, Tagged};
pub use priority::Priority;
pub use sink::LogSink;
pub use strategy::FormatStrategy;
