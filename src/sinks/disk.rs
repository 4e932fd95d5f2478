//! Disk sink with size-capped sequential log files
//!
//! Lines are handed to a background writer thread over a channel, so logging
//! threads never touch the filesystem. The writer appends to numbered files
//! `{stem}_{n}.log`, resumes the newest file that still has room, starts the
//! next index once a file reaches its size cap, and can gzip each completed
//! file. Archives keep their index across restarts, so numbering picks up
//! after them.

use crate::core::error::{LoggerError, Result};
use crate::core::priority::Priority;
use crate::core::sink::LogSink;
use chrono::Local;
use crossbeam_channel::{unbounded, Receiver, Sender};
use parking_lot::Mutex;
use std::fs::{self, File, OpenOptions};
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use std::thread;
use std::time::{Duration, Instant};

/// Default shutdown timeout for the writer thread (5 seconds)
///
/// Used when the sink is dropped without an explicit shutdown. For custom
/// timeout control, use the `shutdown()` method instead.
pub const DEFAULT_SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(5);

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Configuration for [`DiskSink`].
///
/// # Examples
///
/// ```
/// use single_line_logger::sinks::disk::DiskSinkConfig;
///
/// let config = DiskSinkConfig::new("/var/log/app")
///     .with_file_stem("service")
///     .with_max_file_bytes(1024 * 1024)
///     .with_compression(true);
/// assert_eq!(config.file_stem, "service");
/// ```
#[derive(Debug, Clone)]
pub struct DiskSinkConfig {
    /// Directory holding the numbered log files.
    pub directory: PathBuf,
    /// File name stem; files are named `{stem}_{n}.log`.
    pub file_stem: String,
    /// Size cap per file. The cap is checked before each write, so a file
    /// may overshoot it by one line.
    pub max_file_bytes: u64,
    /// Whether to gzip a file once the writer moves past it.
    pub compress_completed: bool,
}

impl DiskSinkConfig {
    /// Creates a configuration with the stock defaults: stem `logs`, 500 KiB
    /// per file, no compression.
    pub fn new<P: AsRef<Path>>(directory: P) -> Self {
        Self {
            directory: directory.as_ref().to_path_buf(),
            file_stem: "logs".to_string(),
            max_file_bytes: 500 * 1024,
            compress_completed: false,
        }
    }

    /// Set the file name stem
    #[must_use = "builder methods return a new value and do not modify the original"]
    pub fn with_file_stem(mut self, stem: impl Into<String>) -> Self {
        self.file_stem = stem.into();
        self
    }

    /// Set the size cap per file
    #[must_use = "builder methods return a new value and do not modify the original"]
    pub fn with_max_file_bytes(mut self, max_bytes: u64) -> Self {
        self.max_file_bytes = max_bytes;
        self
    }

    /// Enable compression of completed files
    #[must_use = "builder methods return a new value and do not modify the original"]
    pub fn with_compression(mut self, enabled: bool) -> Self {
        self.compress_completed = enabled;
        self
    }

    fn validate(&self) -> Result<()> {
        if self.file_stem.is_empty() {
            return Err(LoggerError::config("DiskSink", "file_stem must not be empty"));
        }
        if self.max_file_bytes == 0 {
            return Err(LoggerError::config(
                "DiskSink",
                "max_file_bytes must be positive",
            ));
        }
        Ok(())
    }
}

/// Sink that persists lines to disk through a background writer thread.
///
/// Shutdown takes `&self`, so the sink stays stoppable while shared as an
/// `Arc<dyn LogSink>`.
///
/// # Examples
///
/// ```no_run
/// use single_line_logger::sinks::disk::{DiskSink, DiskSinkConfig};
/// use std::time::Duration;
///
/// let sink = DiskSink::new(DiskSinkConfig::new("/var/log/app")).unwrap();
/// // ... log through a formatter holding the sink ...
/// sink.shutdown(Duration::from_secs(5));
/// ```
pub struct DiskSink {
    sender: Mutex<Option<Sender<String>>>,
    handle: Mutex<Option<thread::JoinHandle<()>>>,
}

impl DiskSink {
    /// Creates the sink and spawns its writer thread.
    ///
    /// # Errors
    ///
    /// Returns an error when the configuration is invalid, the log directory
    /// cannot be created, or the writer thread cannot be spawned.
    pub fn new(config: DiskSinkConfig) -> Result<Self> {
        config.validate()?;

        fs::create_dir_all(&config.directory).map_err(|e| {
            LoggerError::io_operation(
                "create log directory",
                format!("Failed to create directory '{}'", config.directory.display()),
                e,
            )
        })?;

        let (sender, receiver) = unbounded();
        let handle = thread::Builder::new()
            .name("disk-sink-writer".to_string())
            .spawn(move || write_loop(&receiver, config))
            .map_err(|e| {
                LoggerError::io_operation(
                    "spawn disk writer",
                    "Failed to spawn writer thread",
                    e,
                )
            })?;

        Ok(Self {
            sender: Mutex::new(Some(sender)),
            handle: Mutex::new(Some(handle)),
        })
    }

    /// Stops the writer thread after it drains all queued lines.
    ///
    /// Returns `true` when the worker exited within `timeout`. Repeated
    /// calls are harmless.
    pub fn shutdown(&self, timeout: Duration) -> bool {
        drop(self.sender.lock().take());
        let handle = self.handle.lock().take();

        if let Some(handle) = handle {
            let deadline = Instant::now() + timeout;
            while !handle.is_finished() {
                if Instant::now() >= deadline {
                    eprintln!(
                        "[LOGGER ERROR] Disk writer did not stop within {:?}",
                        timeout
                    );
                    return false;
                }
                thread::sleep(Duration::from_millis(10));
            }
            return handle.join().is_ok();
        }
        true
    }
}

impl LogSink for DiskSink {
    fn log(&self, priority: i32, tag: &str, line: &str) {
        let level = Priority::from_value(priority).map_or("?", Priority::letter);
        let rendered = format!(
            "{} {}/{}: {}",
            Local::now().format(TIMESTAMP_FORMAT),
            level,
            tag,
            line
        );

        if let Some(sender) = self.sender.lock().as_ref() {
            if sender.send(rendered).is_err() {
                eprintln!("[LOGGER ERROR] {}", LoggerError::ChannelSendError);
            }
        }
    }
}

impl Drop for DiskSink {
    fn drop(&mut self) {
        self.shutdown(DEFAULT_SHUTDOWN_TIMEOUT);
    }
}

fn write_loop(receiver: &Receiver<String>, config: DiskSinkConfig) {
    let mut writer = match LogWriter::open(config) {
        Ok(writer) => writer,
        Err(e) => {
            eprintln!("[LOGGER ERROR] Disk writer disabled: {}", e);
            // Keep draining so queued lines are dropped instead of leaking
            while receiver.recv().is_ok() {}
            return;
        }
    };

    while let Ok(line) = receiver.recv() {
        if let Err(e) = writer.write_line(&line) {
            eprintln!("[LOGGER ERROR] Failed to write log line: {}", e);
        }
        if receiver.is_empty() {
            if let Err(e) = writer.flush() {
                eprintln!("[LOGGER ERROR] Failed to flush log file: {}", e);
            }
        }
    }

    if let Err(e) = writer.flush() {
        eprintln!("[LOGGER ERROR] Failed to flush log file: {}", e);
    }
}

struct LogWriter {
    config: DiskSinkConfig,
    index: usize,
    path: PathBuf,
    writer: BufWriter<File>,
    current_size: u64,
}

impl LogWriter {
    fn open(config: DiskSinkConfig) -> Result<Self> {
        let (index, path) = select_log_file(&config);
        let file = open_append(&path)?;
        let current_size = file
            .metadata()
            .map_err(|e| {
                LoggerError::io_operation(
                    "open log file",
                    format!("Cannot access metadata of '{}'", path.display()),
                    e,
                )
            })?
            .len();

        Ok(Self {
            config,
            index,
            path,
            writer: BufWriter::new(file),
            current_size,
        })
    }

    fn write_line(&mut self, line: &str) -> Result<()> {
        if self.current_size >= self.config.max_file_bytes {
            if let Err(e) = self.roll() {
                eprintln!(
                    "[LOGGER ERROR] Log rollover failed: {}. Continuing with current file.",
                    e
                );
                // Reset size tracking to avoid retrying the rollover on
                // every following line
                self.current_size = 0;
            }
        }

        self.writer.write_all(line.as_bytes())?;
        self.writer.write_all(b"\n")?;
        self.current_size += line.len() as u64 + 1;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    /// Moves on to the next numbered file, compressing the completed one if
    /// configured.
    ///
    /// The next file is opened before any bookkeeping changes, so a failed
    /// roll leaves the writer still appending to the file it names.
    fn roll(&mut self) -> Result<()> {
        self.writer.flush().map_err(|e| {
            LoggerError::file_rotation(
                self.path.display().to_string(),
                format!("Failed to flush before rollover: {}", e),
            )
        })?;

        let next_index = self.index + 1;
        let next_path = log_file_path(&self.config, next_index);
        let file = open_append(&next_path)?;

        let completed = std::mem::replace(&mut self.path, next_path);
        self.index = next_index;
        // Replacing the writer drops the old one and releases its handle
        self.writer = BufWriter::new(file);
        self.current_size = 0;

        if self.config.compress_completed {
            if let Err(e) = compress_file(&completed) {
                eprintln!("[LOGGER ERROR] {}", e);
            }
        }

        Ok(())
    }
}

fn log_file_path(config: &DiskSinkConfig, index: usize) -> PathBuf {
    config
        .directory
        .join(format!("{}_{}.log", config.file_stem, index))
}

fn compressed_log_path(path: &Path) -> PathBuf {
    path.with_extension("log.gz")
}

/// Picks the file to append to: the newest existing file while it still has
/// room, otherwise the next unused index.
///
/// A compressed archive occupies its index, so numbering continues past
/// `.log.gz` remnants of earlier runs instead of renaming over them.
fn select_log_file(config: &DiskSinkConfig) -> (usize, PathBuf) {
    let mut index = 0;
    let mut candidate = log_file_path(config, index);
    let mut newest: Option<(usize, PathBuf)> = None;

    loop {
        if candidate.exists() {
            newest = Some((index, candidate));
        } else if compressed_log_path(&candidate).exists() {
            // Archives are complete; nothing before them is resumable
            newest = None;
        } else {
            break;
        }
        index += 1;
        candidate = log_file_path(config, index);
    }

    if let Some((newest_index, newest_path)) = newest {
        // An unreadable file counts as full so a fresh one is started
        let len = fs::metadata(&newest_path)
            .map(|m| m.len())
            .unwrap_or(config.max_file_bytes);
        if len < config.max_file_bytes {
            return (newest_index, newest_path);
        }
    }

    (index, candidate)
}

fn open_append(path: &Path) -> Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| {
            LoggerError::io_operation(
                "open log file",
                format!("Failed to open '{}'", path.display()),
                e,
            )
        })
}

/// Compresses a completed log file, streaming through a temporary file so
/// the original is only removed after the compressed copy is in place.
fn compress_file(path: &Path) -> Result<()> {
    let gz_path = compressed_log_path(path);
    let temp_path = path.with_extension("log.gz.tmp");

    let input = File::open(path).map_err(|e| {
        LoggerError::io_operation(
            "compress log file",
            format!("Failed to open '{}'", path.display()),
            e,
        )
    })?;
    let mut reader = BufReader::new(input);

    let output = File::create(&temp_path).map_err(|e| {
        LoggerError::io_operation(
            "compress log file",
            format!("Failed to create '{}'", temp_path.display()),
            e,
        )
    })?;
    let mut encoder =
        flate2::write::GzEncoder::new(BufWriter::new(output), flate2::Compression::default());

    let mut buffer = vec![0u8; 64 * 1024];
    loop {
        let bytes_read = reader.read(&mut buffer).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            LoggerError::io_operation(
                "compress log file",
                format!("Failed to read '{}'", path.display()),
                e,
            )
        })?;
        if bytes_read == 0 {
            break;
        }
        encoder.write_all(&buffer[..bytes_read]).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            LoggerError::io_operation(
                "compress log file",
                "Failed to write into the gzip stream".to_string(),
                e,
            )
        })?;
    }

    encoder.finish().map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        LoggerError::io_operation(
            "compress log file",
            "Failed to finish the gzip stream".to_string(),
            e,
        )
    })?;

    fs::rename(&temp_path, &gz_path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        LoggerError::file_rotation(
            path.display().to_string(),
            format!("Failed to move compressed file into place: {}", e),
        )
    })?;

    if let Err(e) = fs::remove_file(path) {
        eprintln!(
            "[LOGGER ERROR] Compressed '{}' but could not remove the original: {}",
            path.display(),
            e
        );
    }

    Ok(())
}
