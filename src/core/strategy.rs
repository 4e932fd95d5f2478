//! Formatting strategy abstraction
//!
//! A strategy owns the whole journey from raw record to sink lines: tag
//! resolution, header assembly, chunking and delegation. The logging facade
//! only ever talks to this trait, so strategies are swappable without
//! touching call sites.

/// Strategy that turns one raw log record into zero or more sink lines.
pub trait FormatStrategy: Send + Sync {
    /// Formats and forwards one record.
    ///
    /// `tag` is a one-shot tag for this record only; `None` falls back to the
    /// strategy's configured tag.
    fn log(&self, priority: i32, tag: Option<&str>, message: &str);
}
