//! Console sink implementation

use crate::core::priority::Priority;
use crate::core::sink::LogSink;

#[cfg(feature = "console")]
use colored::Colorize;

/// Sink that prints lines to the process console.
///
/// Output is `L/tag: line`, where `L` is the priority letter. Error and
/// assert records go to stderr, everything else to stdout. Colored priority
/// letters require the `console` feature; without it the sink still works,
/// plain.
pub struct ConsoleSink {
    use_colors: bool,
}

impl ConsoleSink {
    pub fn new() -> Self {
        Self { use_colors: true }
    }

    pub fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }

    fn colors_enabled(&self) -> bool {
        cfg!(feature = "console") && self.use_colors
    }

    fn render(&self, priority: i32, tag: &str, line: &str) -> String {
        let named = Priority::from_value(priority);
        let letter = named.map_or("?", Priority::letter);

        #[cfg(feature = "console")]
        if self.colors_enabled() {
            if let Some(priority) = named {
                return format!("{}/{}: {}", letter.color(priority.color_code()), tag, line);
            }
        }

        format!("{}/{}: {}", letter, tag, line)
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl LogSink for ConsoleSink {
    fn log(&self, priority: i32, tag: &str, line: &str) {
        let rendered = self.render(priority, tag, line);

        // Route error and assert records to stderr, others to stdout
        match Priority::from_value(priority) {
            Some(Priority::Error | Priority::Assert) => eprintln!("{}", rendered),
            _ => println!("{}", rendered),
        }
    }
}
