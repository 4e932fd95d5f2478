//! Call-stack capture and call-site selection
//!
//! Capturing the current stack is a capability behind the [`CallStackCapture`]
//! trait so formatters can be tested with synthetic stacks. The default
//! implementation resolves frames through the `backtrace` crate.

use backtrace::Backtrace;

/// Frames below this index belong to the capture machinery itself and are
/// never considered as call-site candidates.
pub const MIN_STACK_OFFSET: usize = 3;

/// One resolved stack frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallFrame {
    /// Fully qualified path of the declaring type or module.
    pub type_name: String,
    /// Name of the function or method.
    pub method_name: String,
    /// Source file name without its directory.
    pub file_name: String,
    /// 1-based source line, or 0 when unresolved.
    pub line: u32,
}

impl CallFrame {
    /// Creates a frame from its parts.
    pub fn new(
        type_name: impl Into<String>,
        method_name: impl Into<String>,
        file_name: impl Into<String>,
        line: u32,
    ) -> Self {
        Self {
            type_name: type_name.into(),
            method_name: method_name.into(),
            file_name: file_name.into(),
            line,
        }
    }

    /// Frame substituted when no call site can be resolved.
    pub fn unknown() -> Self {
        Self::new("unknown", "unknown", "unknown", 0)
    }
}

/// Capability to capture the current call stack.
///
/// Implementations must be cheap enough to call once per log record and are
/// shared across threads by the formatter.
pub trait CallStackCapture: Send + Sync {
    /// Returns the current stack, innermost frame first.
    fn capture(&self) -> Vec<CallFrame>;
}

/// Default capture backed by the `backtrace` crate.
///
/// Symbol names are demangled and split into a declaring path and a method
/// name. Frames whose symbols cannot be resolved are omitted.
#[derive(Debug, Default, Clone, Copy)]
pub struct BacktraceCapture;

impl CallStackCapture for BacktraceCapture {
    fn capture(&self) -> Vec<CallFrame> {
        let backtrace = Backtrace::new();
        let mut frames = Vec::new();

        for frame in backtrace.frames() {
            for symbol in frame.symbols() {
                let full_name = match symbol.name() {
                    // Alternate form drops the trailing disambiguator hash.
                    Some(name) => format!("{:#}", name),
                    None => continue,
                };
                let (type_name, method_name) = split_symbol(&full_name);
                let file_name = symbol
                    .filename()
                    .and_then(|path| path.file_name())
                    .and_then(|name| name.to_str())
                    .unwrap_or("unknown")
                    .to_string();
                let line = symbol.lineno().unwrap_or(0);

                frames.push(CallFrame {
                    type_name,
                    method_name,
                    file_name,
                    line,
                });
            }
        }

        frames
    }
}

/// Splits a demangled symbol into `(declaring path, method name)`.
///
/// Trait implementations demangle as `<Type as Trait>::method`; the concrete
/// type is taken as the declaring path in that case.
fn split_symbol(full_name: &str) -> (String, String) {
    if let Some(inner) = full_name.strip_prefix('<') {
        if let Some((type_name, tail)) = inner.split_once(" as ") {
            let method = match tail.rsplit_once(">::") {
                Some((_, method)) => method,
                None => "unknown",
            };
            return (type_name.to_string(), method.to_string());
        }
    }

    match full_name.rsplit_once("::") {
        Some((type_name, method)) => (type_name.to_string(), method.to_string()),
        None => (full_name.to_string(), "unknown".to_string()),
    }
}

/// Returns the last path segment of a type name.
///
/// Handles both `::`-separated Rust paths and dot-separated names, so
/// `app::net::Client` and `com.example.Client` both yield `Client`.
pub fn simple_type_name(type_name: &str) -> &str {
    let last = type_name.rsplit("::").next().unwrap_or(type_name);
    last.rsplit('.').next().unwrap_or(last)
}

/// Selects the first frame that belongs to calling code.
///
/// Skips the first [`MIN_STACK_OFFSET`] frames, then walks outward past any
/// frame declared by one of `skip_types`, by this module, or by the
/// `backtrace` crate. Returns `None` when every frame is internal.
pub fn find_call_site<'a>(
    frames: &'a [CallFrame],
    skip_types: &[&str],
) -> Option<&'a CallFrame> {
    frames
        .iter()
        .skip(MIN_STACK_OFFSET)
        .find(|frame| !is_internal(&frame.type_name, skip_types))
}

fn is_internal(type_name: &str, skip_types: &[&str]) -> bool {
    skip_types.iter().any(|skip| type_name == *skip)
        || type_name.starts_with("backtrace")
        || type_name.starts_with(module_path!())
}
