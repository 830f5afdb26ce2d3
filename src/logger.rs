//! Custom logging module.
//!
//! This module provides a custom logger implementation that captures log entries
//! and forwards them to a shared buffer for display in the log panel.

use crate::error::AppError;
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Maximum number of entries kept for the log panel.
///
const MAX_LOG_ENTRIES: usize = 500;

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

/// Bounded, shareable list of formatted log lines. Oldest lines are dropped
/// first.
///
#[derive(Clone, Default)]
pub struct LogBuffer {
    entries: Arc<Mutex<VecDeque<String>>>,
}

impl LogBuffer {
    pub fn push(&self, entry: String) {
        if let Ok(mut entries) = self.entries.lock() {
            if entries.len() == MAX_LOG_ENTRIES {
                entries.pop_front();
            }
            entries.push_back(entry);
        }
    }

    pub fn entries(&self) -> Vec<String> {
        self.entries
            .lock()
            .map(|entries| entries.iter().cloned().collect())
            .unwrap_or_default()
    }
}

/// Custom logger that captures logs to state
///
pub struct CustomLogger {
    log_callback: Arc<Mutex<Option<Box<dyn Fn(String) + Send + Sync>>>>,
}

impl CustomLogger {
    pub fn new() -> Self {
        CustomLogger {
            log_callback: Arc::new(Mutex::new(None)),
        }
    }

    pub fn set_log_callback(&self, callback: Box<dyn Fn(String) + Send + Sync>) {
        if let Ok(mut guard) = self.log_callback.lock() {
            *guard = Some(callback);
        }
        // If the lock is poisoned the logger keeps running without capture
    }
}

impl Default for CustomLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl Log for CustomLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            if let Ok(callback) = self.log_callback.lock() {
                if let Some(ref cb) = *callback {
                    cb(format_log(record));
                }
            }
        }
    }

    fn flush(&self) {}
}

/// Install the custom logger as the global logger, writing into `buffer`.
///
pub fn init(buffer: &LogBuffer, level: LevelFilter) -> Result<(), AppError> {
    let logger = CustomLogger::new();
    let sink = buffer.clone();
    logger.set_log_callback(Box::new(move |entry| sink.push(entry)));
    log::set_boxed_logger(Box::new(logger)).map_err(|e| AppError::Logger(e.to_string()))?;
    log::set_max_level(level);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_log_includes_level_and_message() {
        let line = format_log(
            &Record::builder()
                .args(format_args!("Created todo 7"))
                .level(Level::Info)
                .build(),
        );
        assert!(line.ends_with("INFO Created todo 7"));
    }

    #[test]
    fn callback_receives_formatted_records() {
        let buffer = LogBuffer::default();
        let logger = CustomLogger::new();
        let sink = buffer.clone();
        logger.set_log_callback(Box::new(move |entry| sink.push(entry)));
        logger.log(
            &Record::builder()
                .args(format_args!("hello"))
                .level(Level::Warn)
                .build(),
        );
        let entries = buffer.entries();
        assert_eq!(1, entries.len());
        assert!(entries[0].ends_with("WARN hello"));
    }

    #[test]
    fn logger_without_callback_is_silent() {
        let logger = CustomLogger::new();
        logger.log(
            &Record::builder()
                .args(format_args!("dropped"))
                .level(Level::Error)
                .build(),
        );
    }

    #[test]
    fn buffer_drops_oldest_entries() {
        let buffer = LogBuffer::default();
        for i in 0..MAX_LOG_ENTRIES + 3 {
            buffer.push(i.to_string());
        }
        let entries = buffer.entries();
        assert_eq!(MAX_LOG_ENTRIES, entries.len());
        assert_eq!("3", entries[0]);
    }

    #[test]
    fn init_installs_global_logger_once() {
        let buffer = LogBuffer::default();
        init(&buffer, LevelFilter::Info).unwrap();
        log::info!("global logger ready");
        assert!(buffer
            .entries()
            .iter()
            .any(|entry| entry.ends_with("INFO global logger ready")));
        assert!(matches!(
            init(&LogBuffer::default(), LevelFilter::Info),
            Err(AppError::Logger(_))
        ));
    }
}
