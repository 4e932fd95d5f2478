//! Single-line format strategy
//!
//! Turns one raw record into sink lines: resolve the effective tag, build a
//! header naming the calling thread and call site, append the message, cut
//! the whole text into transport-safe chunks and hand every non-empty line
//! to the configured sink.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use crate::core::call_stack::{
    find_call_site, simple_type_name, BacktraceCapture, CallFrame, CallStackCapture,
};
use crate::core::chunk::{byte_chunks, split_lines, CHUNK_SIZE};
use crate::core::logger::{LOGGER_TYPE, TAGGED_TYPE};
use crate::core::sink::LogSink;
use crate::core::strategy::FormatStrategy;
use crate::sinks::console::ConsoleSink;

pub(crate) const FORMATTER_TYPE: &str = concat!(module_path!(), "::SingleLineFormatter");

/// Configuration for [`SingleLineFormatter`].
///
/// All fields are established at construction and never change afterwards,
/// so a formatter can be shared across threads without locking.
///
/// # Examples
///
/// ```
/// use single_line_logger::core::format::FormatterConfig;
///
/// let config = FormatterConfig::new()
///     .with_tag("NETWORK")
///     .with_thread_info(false);
/// assert_eq!(config.tag, "NETWORK");
/// ```
#[derive(Clone)]
pub struct FormatterConfig {
    /// Tag attached to every record unless a one-shot tag overrides it.
    pub tag: String,
    /// Whether the header names the calling thread.
    pub show_thread_info: bool,
    /// Destination for formatted lines.
    pub sink: Arc<dyn LogSink>,
    /// Capability used to resolve the call site.
    pub capture: Arc<dyn CallStackCapture>,
}

impl FormatterConfig {
    /// Creates a configuration with the stock defaults: tag `PRETTY_LOGGER`,
    /// thread info enabled, console sink, backtrace-based call-site capture.
    pub fn new() -> Self {
        Self {
            tag: "PRETTY_LOGGER".to_string(),
            show_thread_info: true,
            sink: Arc::new(ConsoleSink::new()),
            capture: Arc::new(BacktraceCapture),
        }
    }

    /// Sets the configured tag.
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    /// Enables or disables the thread name in the header.
    #[must_use]
    pub fn with_thread_info(mut self, show: bool) -> Self {
        self.show_thread_info = show;
        self
    }

    /// Replaces the output sink.
    #[must_use]
    pub fn with_sink(mut self, sink: Arc<dyn LogSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Replaces the call-stack capture capability.
    #[must_use]
    pub fn with_capture(mut self, capture: Arc<dyn CallStackCapture>) -> Self {
        self.capture = capture;
        self
    }
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for FormatterConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormatterConfig")
            .field("tag", &self.tag)
            .field("show_thread_info", &self.show_thread_info)
            .finish_non_exhaustive()
    }
}

/// Format strategy that emits each record as standalone single lines.
///
/// Every line carries the full context of its record, so interleaved output
/// from concurrent threads stays attributable.
///
/// # Examples
///
/// ```
/// use single_line_logger::core::format::{FormatterConfig, SingleLineFormatter};
/// use single_line_logger::core::strategy::FormatStrategy;
///
/// let formatter = SingleLineFormatter::new(FormatterConfig::new().with_tag("APP"));
/// formatter.log(4, None, "service started");
/// ```
pub struct SingleLineFormatter {
    config: FormatterConfig,
}

impl SingleLineFormatter {
    /// Creates a formatter from an immutable configuration.
    pub fn new(config: FormatterConfig) -> Self {
        Self { config }
    }

    /// Resolves the tag for one record.
    ///
    /// A non-empty one-shot tag that differs from the configured tag yields
    /// `"{configured}-{once}"`; anything else yields the configured tag.
    fn effective_tag(&self, once_only_tag: Option<&str>) -> Cow<'_, str> {
        match once_only_tag {
            Some(once) if !once.is_empty() && once != self.config.tag => {
                Cow::Owned(format!("{}-{}", self.config.tag, once))
            }
            _ => Cow::Borrowed(self.config.tag.as_str()),
        }
    }

    /// Builds the record header: optional thread name, then the call site.
    fn head_content(&self) -> String {
        let mut builder = String::new();
        if self.config.show_thread_info {
            builder.push_str(" Thread : \"");
            builder.push_str(&current_thread_name());
            builder.push('"');
        }

        let frames = self.config.capture.capture();
        let unknown = CallFrame::unknown();
        let site = find_call_site(&frames, &[FORMATTER_TYPE, LOGGER_TYPE, TAGGED_TYPE])
            .unwrap_or(&unknown);

        builder.push_str(&format!(
            " {}.{} ({}:{})  ",
            simple_type_name(&site.type_name),
            site.method_name,
            site.file_name,
            site.line
        ));
        builder
    }
}

impl Default for SingleLineFormatter {
    fn default() -> Self {
        Self::new(FormatterConfig::new())
    }
}

impl FormatStrategy for SingleLineFormatter {
    fn log(&self, priority: i32, tag: Option<&str>, message: &str) {
        let tag = self.effective_tag(tag);

        let mut text = self.head_content();
        text.push_str(message);

        for chunk in byte_chunks(&text, CHUNK_SIZE) {
            for line in split_lines(chunk) {
                self.config.sink.log(priority, &tag, line);
            }
        }
    }
}

/// Name of the calling thread, cached per thread.
///
/// Unnamed threads fall back to the debug rendering of their thread id.
fn current_thread_name() -> String {
    thread_local! {
        static THREAD_NAME: String = {
            let thread = std::thread::current();
            match thread.name() {
                Some(name) => name.to_string(),
                None => format!("{:?}", thread.id()),
            }
        };
    }
    THREAD_NAME.with(|name| name.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    #[derive(Default)]
    struct RecordingSink {
        lines: Mutex<Vec<(i32, String, String)>>,
    }

    impl RecordingSink {
        fn lines(&self) -> Vec<(i32, String, String)> {
            self.lines.lock().clone()
        }
    }

    impl LogSink for RecordingSink {
        fn log(&self, priority: i32, tag: &str, line: &str) {
            self.lines
                .lock()
                .push((priority, tag.to_string(), line.to_string()));
        }
    }

    struct ScriptedCapture {
        frames: Vec<CallFrame>,
    }

    impl CallStackCapture for ScriptedCapture {
        fn capture(&self) -> Vec<CallFrame> {
            self.frames.clone()
        }
    }

    fn scripted_frames() -> Vec<CallFrame> {
        vec![
            CallFrame::new("backtrace::Backtrace", "new", "mod.rs", 1),
            CallFrame::new("backtrace::Backtrace", "trace", "mod.rs", 2),
            CallFrame::new(FORMATTER_TYPE, "head_content", "format.rs", 3),
            CallFrame::new(FORMATTER_TYPE, "log", "format.rs", 4),
            CallFrame::new("app::demo::Handler", "handle", "handler.rs", 42),
            CallFrame::new("app::demo", "main", "main.rs", 7),
        ]
    }

    // Header produced by `scripted_frames` with thread info disabled.
    const SCRIPTED_HEADER: &str = " Handler.handle (handler.rs:42)  ";

    fn formatter(sink: Arc<RecordingSink>) -> SingleLineFormatter {
        SingleLineFormatter::new(
            FormatterConfig::new()
                .with_tag("APP")
                .with_thread_info(false)
                .with_sink(sink)
                .with_capture(Arc::new(ScriptedCapture {
                    frames: scripted_frames(),
                })),
        )
    }

    #[test]
    fn test_single_line_output() {
        let sink = Arc::new(RecordingSink::default());
        let formatter = formatter(sink.clone());

        formatter.log(3, None, "hello");

        let lines = sink.lines();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].0, 3);
        assert_eq!(lines[0].1, "APP");
        assert_eq!(lines[0].2, format!("{}hello", SCRIPTED_HEADER));
    }

    #[test]
    fn test_priority_passes_through_opaque() {
        let sink = Arc::new(RecordingSink::default());
        let formatter = formatter(sink.clone());

        formatter.log(99, None, "odd priority");

        assert_eq!(sink.lines()[0].0, 99);
    }

    #[test]
    fn test_once_only_tag_resolution() {
        let sink = Arc::new(RecordingSink::default());
        let formatter = formatter(sink.clone());

        formatter.log(4, None, "a");
        formatter.log(4, Some("REQ"), "b");
        formatter.log(4, Some("APP"), "c");
        formatter.log(4, Some(""), "d");

        let tags: Vec<String> = sink.lines().into_iter().map(|(_, tag, _)| tag).collect();
        assert_eq!(tags, vec!["APP", "APP-REQ", "APP", "APP"]);
    }

    #[test]
    fn test_thread_name_in_header() {
        let sink = Arc::new(RecordingSink::default());
        let formatter = Arc::new(SingleLineFormatter::new(
            FormatterConfig::new()
                .with_tag("APP")
                .with_thread_info(true)
                .with_sink(sink.clone())
                .with_capture(Arc::new(ScriptedCapture {
                    frames: scripted_frames(),
                })),
        ));

        let worker = formatter.clone();
        std::thread::Builder::new()
            .name("worker-1".to_string())
            .spawn(move || worker.log(4, None, "from worker"))
            .unwrap()
            .join()
            .unwrap();

        let lines = sink.lines();
        assert_eq!(
            lines[0].2,
            format!(" Thread : \"worker-1\"{}from worker", SCRIPTED_HEADER)
        );
    }

    #[test]
    fn test_unnamed_thread_header_uses_thread_id() {
        let sink = Arc::new(RecordingSink::default());
        let formatter = Arc::new(SingleLineFormatter::new(
            FormatterConfig::new()
                .with_tag("APP")
                .with_thread_info(true)
                .with_sink(sink.clone())
                .with_capture(Arc::new(ScriptedCapture {
                    frames: scripted_frames(),
                })),
        ));

        let worker = formatter.clone();
        std::thread::spawn(move || worker.log(4, None, "from unnamed"))
            .join()
            .unwrap();

        let lines = sink.lines();
        assert!(lines[0].2.starts_with(" Thread : \"ThreadId("));
        assert!(lines[0]
            .2
            .ends_with(&format!("{}from unnamed", SCRIPTED_HEADER)));
    }

    #[test]
    fn test_exhausted_stack_uses_placeholder() {
        let sink = Arc::new(RecordingSink::default());
        let formatter = SingleLineFormatter::new(
            FormatterConfig::new()
                .with_tag("APP")
                .with_thread_info(false)
                .with_sink(sink.clone())
                .with_capture(Arc::new(ScriptedCapture {
                    frames: vec![CallFrame::new("backtrace::Backtrace", "new", "mod.rs", 1)],
                })),
        );

        formatter.log(6, None, "lost");

        assert_eq!(sink.lines()[0].2, " unknown.unknown (unknown:0)  lost");
    }

    #[test]
    fn test_empty_message_still_emits_header() {
        let sink = Arc::new(RecordingSink::default());
        let formatter = formatter(sink.clone());

        formatter.log(3, None, "");

        let lines = sink.lines();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].2, SCRIPTED_HEADER);
    }

    #[test]
    fn test_long_message_is_chunked() {
        let sink = Arc::new(RecordingSink::default());
        let formatter = formatter(sink.clone());

        let message = "x".repeat(9000);
        formatter.log(3, None, &message);

        let lines = sink.lines();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].2.len(), CHUNK_SIZE);
        assert_eq!(lines[1].2.len(), CHUNK_SIZE);

        let joined: String = lines.iter().map(|(_, _, line)| line.as_str()).collect();
        assert_eq!(joined, format!("{}{}", SCRIPTED_HEADER, message));
    }

    #[test]
    fn test_chunking_respects_multibyte_characters() {
        let sink = Arc::new(RecordingSink::default());
        let formatter = formatter(sink.clone());

        let message = "é".repeat(3000);
        formatter.log(3, None, &message);

        let lines = sink.lines();
        assert!(lines.len() >= 2);
        for (_, _, line) in &lines {
            assert!(line.len() <= CHUNK_SIZE);
        }

        let joined: String = lines.iter().map(|(_, _, line)| line.as_str()).collect();
        assert_eq!(joined, format!("{}{}", SCRIPTED_HEADER, message));
    }

    #[cfg(not(windows))]
    #[test]
    fn test_multiline_message_becomes_one_line_per_segment() {
        let sink = Arc::new(RecordingSink::default());
        let formatter = formatter(sink.clone());

        formatter.log(5, None, "one\ntwo\n\nthree\n");

        let lines = sink.lines();
        let texts: Vec<&str> = lines.iter().map(|(_, _, line)| line.as_str()).collect();
        let first = format!("{}one", SCRIPTED_HEADER);
        assert_eq!(texts, vec![first.as_str(), "two", "three"]);
    }

    #[test]
    fn test_default_config_values() {
        let config = FormatterConfig::new();
        assert_eq!(config.tag, "PRETTY_LOGGER");
        assert!(config.show_thread_info);
    }

    #[test]
    fn test_config_debug_omits_trait_objects() {
        let rendered = format!("{:?}", FormatterConfig::new());
        assert!(rendered.contains("PRETTY_LOGGER"));
        assert!(rendered.contains("show_thread_info"));
    }
}
