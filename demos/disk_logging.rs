//! Disk logging example
//!
//! Demonstrates routing formatted lines to rolling log files with gzip
//! compression of completed files.
//!
//! Run with: cargo run --example disk_logging

use single_line_logger::prelude::*;
use single_line_logger::DEFAULT_SHUTDOWN_TIMEOUT;
use std::sync::Arc;

fn main() -> Result<()> {
    println!("=== Single Line Logger - Disk Logging Example ===\n");

    // Small cap so the rollover is easy to observe
    let config = DiskSinkConfig::new("logs")
        .with_file_stem("demo")
        .with_max_file_bytes(2 * 1024)
        .with_compression(true);
    let disk = Arc::new(DiskSink::new(config)?);

    let formatter = SingleLineFormatter::new(
        FormatterConfig::new()
            .with_tag("DEMO")
            .with_sink(disk.clone()),
    );
    let logger = Logger::with_strategy(Box::new(formatter));

    println!("1. Writing application events:");
    logger.i("Application started");
    logger.d("Loading configuration...");
    logger.i("Configuration loaded successfully");

    for i in 1..=20 {
        logger.i(format!("Processing item {}/20", i));
        if i == 13 {
            logger.w("Item 13 took longer than expected");
        }
    }

    logger.e("Failed to load optional plugin");
    logger.i("All operations completed");

    // Drain the writer before pointing the user at the files
    if !disk.shutdown(DEFAULT_SHUTDOWN_TIMEOUT) {
        eprintln!("Writer did not stop in time");
    }

    println!("\n=== Example completed successfully! ===");
    println!("Check the 'logs' directory for demo_*.log and demo_*.log.gz files");

    Ok(())
}
