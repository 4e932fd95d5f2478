//! Logging macros that forward to a logger with `format!`-style interpolation.
//!
//! Each macro takes the logger as its first argument, so they work with any
//! logger instance rather than a process-wide global.
//!
//! # Examples
//!
//! ```
//! use single_line_logger::prelude::*;
//! use single_line_logger::info;
//!
//! let logger = Logger::new();
//!
//! info!(logger, "Listener ready");
//!
//! let accepted = 3;
//! info!(logger, "Accepted {} connections", accepted);
//! ```

/// Log a message at an explicit priority with automatic formatting.
///
/// # Examples
///
/// ```
/// # use single_line_logger::prelude::*;
/// # let logger = Logger::new();
/// use single_line_logger::log;
/// log!(logger, Priority::Info, "Worker pool started");
/// log!(logger, Priority::Warn, "Queue depth: {}", 128);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $priority:expr, $($arg:tt)+) => {
        $logger.log($priority.value(), None, &format!($($arg)+))
    };
}

/// Log a verbose-priority message.
///
/// # Examples
///
/// ```
/// # use single_line_logger::prelude::*;
/// # let logger = Logger::new();
/// use single_line_logger::verbose;
/// verbose!(logger, "Handshake begun");
/// verbose!(logger, "Frame {} acknowledged", 17);
/// ```
#[macro_export]
macro_rules! verbose {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Priority::Verbose, $($arg)+)
    };
}

/// Log a debug-priority message.
///
/// # Examples
///
/// ```
/// # use single_line_logger::prelude::*;
/// # let logger = Logger::new();
/// use single_line_logger::debug;
/// debug!(logger, "Cache warmed");
/// debug!(logger, "Loaded {} entries", 32);
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Priority::Debug, $($arg)+)
    };
}

/// Log an info-priority message.
///
/// # Examples
///
/// ```
/// # use single_line_logger::prelude::*;
/// # let logger = Logger::new();
/// use single_line_logger::info;
/// info!(logger, "Session opened");
/// info!(logger, "Synced {} of {} shards", 4, 4);
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Priority::Info, $($arg)+)
    };
}

/// Log a warn-priority message.
///
/// # Examples
///
/// ```
/// # use single_line_logger::prelude::*;
/// # let logger = Logger::new();
/// use single_line_logger::warn;
/// warn!(logger, "Response was slow");
/// warn!(logger, "Latency {} ms above target", 250);
/// ```
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Priority::Warn, $($arg)+)
    };
}

/// Log an error-priority message.
///
/// # Examples
///
/// ```
/// # use single_line_logger::prelude::*;
/// # let logger = Logger::new();
/// use single_line_logger::error;
/// error!(logger, "Write failed");
/// error!(logger, "Socket closed early: {}", "reset by peer");
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Priority::Error, $($arg)+)
    };
}

/// Log an assert-priority message.
///
/// # Examples
///
/// ```
/// # use single_line_logger::prelude::*;
/// # let logger = Logger::new();
/// use single_line_logger::wtf;
/// wtf!(logger, "Invariant violated");
/// wtf!(logger, "Unrecoverable state: {}", "session lost");
/// ```
#[macro_export]
macro_rules! wtf {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Priority::Assert, $($arg)+)
    };
}
