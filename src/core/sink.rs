//! Output sink abstraction
//!
//! A sink receives fully formatted single lines and carries them to their
//! destination. Formatting, chunking and line splitting all happen before
//! this boundary, so implementations only deal with transport.

/// Destination for formatted log lines.
///
/// Implementations are shared across threads, so `log` takes `&self` and must
/// be safe to call concurrently. A failure to deliver a line is the sink's
/// own concern; it must not panic and has no error channel back to the
/// formatter.
///
/// Each call carries one line that is free of line separators and at most
/// one chunk long.
pub trait LogSink: Send + Sync {
    /// Delivers one formatted line.
    fn log(&self, priority: i32, tag: &str, line: &str);
}
