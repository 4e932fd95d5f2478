//! Property-based tests for single_line_logger using proptest

use parking_lot::Mutex;
use proptest::prelude::*;
use single_line_logger::core::call_stack::simple_type_name;
use single_line_logger::core::split_lines;
use single_line_logger::prelude::*;
use single_line_logger::{byte_chunks, CallFrame, CallStackCapture, CHUNK_SIZE, LINE_SEPARATOR};
use std::sync::Arc;

// ============================================================================
// Priority Tests
// ============================================================================

proptest! {
    /// Test that Priority string conversions roundtrip correctly
    #[test]
    fn test_priority_str_roundtrip(priority in prop_oneof![
        Just(Priority::Verbose),
        Just(Priority::Debug),
        Just(Priority::Info),
        Just(Priority::Warn),
        Just(Priority::Error),
        Just(Priority::Assert),
    ]) {
        let as_str = priority.to_str();
        let parsed: Priority = as_str.parse().unwrap();
        assert_eq!(priority, parsed);
    }

    /// Test that Priority ordering matches the raw transport values
    #[test]
    fn test_priority_ordering(
        priority1 in prop_oneof![
            Just(Priority::Verbose),
            Just(Priority::Debug),
            Just(Priority::Info),
            Just(Priority::Warn),
            Just(Priority::Error),
            Just(Priority::Assert),
        ],
        priority2 in prop_oneof![
            Just(Priority::Verbose),
            Just(Priority::Debug),
            Just(Priority::Info),
            Just(Priority::Warn),
            Just(Priority::Error),
            Just(Priority::Assert),
        ]
    ) {
        let val1 = priority1.value();
        let val2 = priority2.value();

        assert_eq!(priority1 <= priority2, val1 <= val2);
        assert_eq!(priority1 < priority2, val1 < val2);
        assert_eq!(priority1 >= priority2, val1 >= val2);
        assert_eq!(priority1 > priority2, val1 > val2);
    }

    /// Test that every named value roundtrips through from_value
    #[test]
    fn test_priority_value_roundtrip(value in 2i32..=7) {
        let priority = Priority::from_value(value).unwrap();
        assert_eq!(priority.value(), value);
    }

    /// Test that values outside the named range yield None
    #[test]
    fn test_priority_unknown_values(value in prop_oneof![-1000i32..2, 8i32..1000]) {
        assert!(Priority::from_value(value).is_none());
    }

    /// Test that FromStr handles garbage input gracefully
    #[test]
    fn test_priority_invalid_parse(raw in "[0-9!@#]{1,8}") {
        assert!(raw.parse::<Priority>().is_err());
    }
}

// ============================================================================
// Chunking Tests
// ============================================================================

proptest! {
    /// Test that concatenating all chunks reproduces the input byte for byte
    #[test]
    fn test_chunks_roundtrip(text in ".*", max in 4usize..64) {
        let chunks: Vec<&str> = byte_chunks(&text, max).collect();
        assert_eq!(chunks.concat(), text);
    }

    /// Test that no chunk exceeds the byte cap and small input stays whole
    #[test]
    fn test_chunks_respect_max_bytes(text in ".*", max in 4usize..64) {
        let chunks: Vec<&str> = byte_chunks(&text, max).collect();

        assert!(chunks.iter().all(|chunk| chunk.len() <= max));
        if text.len() <= max {
            assert_eq!(chunks.len(), 1);
        }
    }

    /// Test that every chunk boundary lands on a character boundary
    #[test]
    fn test_chunk_boundaries_are_char_boundaries(text in ".*", max in 4usize..64) {
        let mut offset = 0;
        for chunk in byte_chunks(&text, max) {
            assert!(text.is_char_boundary(offset));
            offset += chunk.len();
        }
        assert_eq!(offset, text.len());
    }

    /// Test that ASCII input produces exactly ceil(len / max) chunks
    #[test]
    fn test_ascii_chunk_count_is_ceil(text in "[ -~]{0,400}", max in 4usize..32) {
        let count = byte_chunks(&text, max).count();
        let expected = std::cmp::max(1, text.len().div_ceil(max));
        assert_eq!(count, expected);
    }

    /// Test that line splitting drops empty lines and keeps the rest in order
    #[test]
    fn test_split_lines_yields_clean_lines(segments in prop::collection::vec("[a-z]{0,6}", 0..8)) {
        let text = segments.join(LINE_SEPARATOR);
        let lines: Vec<&str> = split_lines(&text).collect();
        let expected: Vec<&str> = segments
            .iter()
            .map(String::as_str)
            .filter(|segment| !segment.is_empty())
            .collect();

        assert_eq!(lines, expected);
        assert!(lines.iter().all(|line| !line.contains(LINE_SEPARATOR)));
    }
}

// ============================================================================
// Call-Site Naming Tests
// ============================================================================

proptest! {
    /// Test that simplified type names keep only the last path segment
    #[test]
    fn test_simple_type_name_has_no_separators(path in "[a-z]{1,5}(::[a-z]{1,5}){0,3}") {
        let simple = simple_type_name(&path);
        assert!(!simple.is_empty());
        assert!(!simple.contains("::"));
        assert!(path.ends_with(simple));
    }
}

// ============================================================================
// Formatter Pipeline Tests
// ============================================================================

#[derive(Default)]
struct CollectingSink {
    lines: Mutex<Vec<(i32, String, String)>>,
}

impl LogSink for CollectingSink {
    fn log(&self, priority: i32, tag: &str, line: &str) {
        self.lines
            .lock()
            .push((priority, tag.to_string(), line.to_string()));
    }
}

struct FixedCapture;

impl CallStackCapture for FixedCapture {
    fn capture(&self) -> Vec<CallFrame> {
        vec![
            CallFrame::new("backtrace::Backtrace", "new", "mod.rs", 1),
            CallFrame::new("backtrace::Backtrace", "trace", "mod.rs", 2),
            CallFrame::new("backtrace::Backtrace", "resolve", "mod.rs", 3),
            CallFrame::new("app::Caller", "call", "caller.rs", 5),
        ]
    }
}

/// Header produced by [`FixedCapture`] with thread info disabled.
const FIXED_HEADER: &str = " Caller.call (caller.rs:5)  ";

fn capture_lines(
    tag: &str,
    once: Option<&str>,
    priority: i32,
    message: &str,
) -> Vec<(i32, String, String)> {
    let sink = Arc::new(CollectingSink::default());
    let formatter = SingleLineFormatter::new(
        FormatterConfig::new()
            .with_tag(tag)
            .with_thread_info(false)
            .with_sink(sink.clone())
            .with_capture(Arc::new(FixedCapture)),
    );

    formatter.log(priority, once, message);

    let lines = sink.lines.lock();
    lines.clone()
}

proptest! {
    /// Test that emitted lines are never empty, oversized or multi-line
    #[test]
    fn test_formatter_emits_clean_lines(message in ".*") {
        for (_, _, line) in capture_lines("APP", None, 3, &message) {
            assert!(!line.is_empty());
            assert!(!line.contains(LINE_SEPARATOR));
            assert!(line.len() <= CHUNK_SIZE);
        }
    }

    /// Test that single-line messages survive the pipeline byte for byte
    #[test]
    fn test_formatter_preserves_message_bytes(message in "[^\n]*") {
        let lines = capture_lines("APP", None, 3, &message);
        let joined: String = lines.iter().map(|(_, _, line)| line.as_str()).collect();

        assert_eq!(joined, format!("{}{}", FIXED_HEADER, message));
    }

    /// Test the one-shot tag resolution rule over arbitrary tag pairs
    #[test]
    fn test_tag_resolution_rule(
        tag in "[A-Z]{1,6}",
        once in proptest::option::of("[A-Z]{1,6}")
    ) {
        let lines = capture_lines(&tag, once.as_deref(), 4, "m");
        let expected = match once.as_deref() {
            Some(once_tag) if !once_tag.is_empty() && once_tag != tag => {
                format!("{}-{}", tag, once_tag)
            }
            _ => tag.clone(),
        };

        assert!(lines.iter().all(|(_, line_tag, _)| *line_tag == expected));
    }

    /// Test that any raw priority value reaches the sink untouched
    #[test]
    fn test_priority_passes_through(priority in any::<i32>()) {
        let lines = capture_lines("APP", None, priority, "m");
        assert!(!lines.is_empty());
        assert!(lines.iter().all(|(p, _, _)| *p == priority));
    }
}
