//! Custom logging module.
//!
//! This module provides the `log` backend used by the command-line front end.
//! Entries are formatted with a UTC timestamp and written to a sink, stderr by
//! default, so they never mix with the JSON printed on stdout.

use crate::error::{AppError, AppResult};
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::io::{self, Write};
use std::sync::Mutex;

/// Format a log record into a string for display
///
pub fn format_log(record: &Record) -> String {
    let timestamp = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S%.3f");
    let level_str = match record.level() {
        Level::Error => "ERROR",
        Level::Warn => "WARN",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    };
    format!("{} {} {}", timestamp, level_str, record.args())
}

/// Logger that writes formatted entries to a sink
///
pub struct CustomLogger {
    level: LevelFilter,
    sink: Mutex<Box<dyn Write + Send>>,
}

impl CustomLogger {
    pub fn new(level: LevelFilter) -> Self {
        Self::with_sink(level, Box::new(io::stderr()))
    }

    pub fn with_sink(level: LevelFilter, sink: Box<dyn Write + Send>) -> Self {
        CustomLogger {
            level,
            sink: Mutex::new(sink),
        }
    }

    /// Install the logger as the global `log` backend.
    ///
    pub fn init(self) -> AppResult<()> {
        let level = self.level;
        log::set_boxed_logger(Box::new(self)).map_err(|e| AppError::Logger(e.to_string()))?;
        log::set_max_level(level);
        Ok(())
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            // A poisoned or failing sink drops the entry; logging must not panic
            if let Ok(mut sink) = self.sink.lock() {
                let _ = writeln!(sink, "{}", format_log(record));
            }
        }
    }

    fn flush(&self) {
        if let Ok(mut sink) = self.sink.lock() {
            let _ = sink.flush();
        }
    }
}
