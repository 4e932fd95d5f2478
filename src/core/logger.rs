//! Logging facade
//!
//! Thin entry point over a [`FormatStrategy`]. The facade maps named
//! severities to raw priorities, threads one-shot tags through, and leaves
//! all formatting decisions to the strategy.

use super::{format::SingleLineFormatter, priority::Priority, strategy::FormatStrategy};

pub(crate) const LOGGER_TYPE: &str = concat!(module_path!(), "::Logger");
pub(crate) const TAGGED_TYPE: &str = concat!(module_path!(), "::Tagged");

/// Facade over a format strategy.
///
/// # Examples
///
/// ```
/// use single_line_logger::core::logger::Logger;
///
/// let logger = Logger::new();
/// logger.i("service started");
/// logger.t("NETWORK").d("handshake complete");
/// ```
pub struct Logger {
    strategy: Box<dyn FormatStrategy>,
}

impl Logger {
    /// Creates a logger backed by a [`SingleLineFormatter`] with stock
    /// defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::with_strategy(Box::new(SingleLineFormatter::default()))
    }

    /// Creates a logger backed by the given strategy.
    #[must_use]
    pub fn with_strategy(strategy: Box<dyn FormatStrategy>) -> Self {
        Self { strategy }
    }

    /// Logs one record with a raw priority.
    ///
    /// The priority is passed through to the strategy untouched, so values
    /// outside the named [`Priority`] range are allowed.
    pub fn log(&self, priority: i32, tag: Option<&str>, message: &str) {
        self.strategy.log(priority, tag, message);
    }

    /// Borrows a view of this logger that tags its next records.
    ///
    /// The tag applies to every record sent through the returned view and to
    /// nothing else.
    pub fn t<'a>(&'a self, tag: &'a str) -> Tagged<'a> {
        Tagged { logger: self, tag }
    }

    /// Logs at verbose priority.
    pub fn v(&self, message: impl AsRef<str>) {
        self.log(Priority::Verbose.value(), None, message.as_ref());
    }

    /// Logs at debug priority.
    pub fn d(&self, message: impl AsRef<str>) {
        self.log(Priority::Debug.value(), None, message.as_ref());
    }

    /// Logs at info priority.
    pub fn i(&self, message: impl AsRef<str>) {
        self.log(Priority::Info.value(), None, message.as_ref());
    }

    /// Logs at warn priority.
    pub fn w(&self, message: impl AsRef<str>) {
        self.log(Priority::Warn.value(), None, message.as_ref());
    }

    /// Logs at error priority.
    pub fn e(&self, message: impl AsRef<str>) {
        self.log(Priority::Error.value(), None, message.as_ref());
    }

    /// Logs at assert priority.
    pub fn wtf(&self, message: impl AsRef<str>) {
        self.log(Priority::Assert.value(), None, message.as_ref());
    }

    /// Pretty-prints a JSON document at debug priority.
    ///
    /// Blank input logs `Empty/Null json content` at debug priority; input
    /// that does not parse as JSON logs `Invalid Json` at error priority.
    pub fn json(&self, json: &str) {
        let trimmed = json.trim();
        if trimmed.is_empty() {
            self.d("Empty/Null json content");
            return;
        }

        if trimmed.starts_with('{') || trimmed.starts_with('[') {
            match serde_json::from_str::<serde_json::Value>(trimmed) {
                Ok(value) => match serde_json::to_string_pretty(&value) {
                    Ok(pretty) => self.d(pretty),
                    Err(_) => self.e("Invalid Json"),
                },
                Err(_) => self.e("Invalid Json"),
            }
            return;
        }

        self.e("Invalid Json");
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

/// Borrowed logger view carrying a one-shot tag.
pub struct Tagged<'a> {
    logger: &'a Logger,
    tag: &'a str,
}

impl Tagged<'_> {
    /// Logs at verbose priority with this view's tag.
    pub fn v(&self, message: impl AsRef<str>) {
        self.logger
            .log(Priority::Verbose.value(), Some(self.tag), message.as_ref());
    }

    /// Logs at debug priority with this view's tag.
    pub fn d(&self, message: impl AsRef<str>) {
        self.logger
            .log(Priority::Debug.value(), Some(self.tag), message.as_ref());
    }

    /// Logs at info priority with this view's tag.
    pub fn i(&self, message: impl AsRef<str>) {
        self.logger
            .log(Priority::Info.value(), Some(self.tag), message.as_ref());
    }

    /// Logs at warn priority with this view's tag.
    pub fn w(&self, message: impl AsRef<str>) {
        self.logger
            .log(Priority::Warn.value(), Some(self.tag), message.as_ref());
    }

    /// Logs at error priority with this view's tag.
    pub fn e(&self, message: impl AsRef<str>) {
        self.logger
            .log(Priority::Error.value(), Some(self.tag), message.as_ref());
    }

    /// Logs at assert priority with this view's tag.
    pub fn wtf(&self, message: impl AsRef<str>) {
        self.logger
            .log(Priority::Assert.value(), Some(self.tag), message.as_ref());
    }
}
