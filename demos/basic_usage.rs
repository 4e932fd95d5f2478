//! Basic logger usage example
//!
//! Demonstrates single-line formatting with the console sink, one-shot tags
//! and the JSON helper.
//!
//! Run with: cargo run --example basic_usage

use single_line_logger::prelude::*;
use single_line_logger::{info, warn};
use std::sync::Arc;

fn main() -> Result<()> {
    println!("=== Single Line Logger - Basic Usage Example ===\n");

    // Default logger: console sink, PRETTY_LOGGER tag, thread info enabled
    let logger = Logger::new();

    println!("1. Logging at different priorities:");
    logger.v("This is a verbose message");
    logger.d("This is a debug message");
    logger.i("This is an info message");
    logger.w("This is a warning message");
    logger.e("This is an error message");
    logger.wtf("This should never happen");

    println!("\n2. One-shot tags:");
    logger.t("NETWORK").i("Request dispatched");
    logger.i("Back to the configured tag");

    println!("\n3. Logging macros:");
    info!(logger, "Processing item {}/{}", 3, 5);
    warn!(logger, "Item {} took longer than expected", 3);

    println!("\n4. Multi-line messages become one sink line each:");
    logger.d("first line\nsecond line\nthird line");

    println!("\n5. Pretty-printed JSON:");
    logger.json(r#"{"user":"kim","roles":["admin","ops"],"active":true}"#);

    println!("\n6. Custom configuration:");
    let config = FormatterConfig::new()
        .with_tag("DEMO")
        .with_thread_info(false)
        .with_sink(Arc::new(ConsoleSink::with_colors(false)));
    let custom = Logger::with_strategy(Box::new(SingleLineFormatter::new(config)));
    custom.i("Plain output without thread info or colors");

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
