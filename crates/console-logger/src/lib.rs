//! Console Logger
//!
//! `log` backend for the admin UI. Records go to the browser console
//! (stderr off-wasm) and the most recent ones are kept in a bounded ring
//! buffer so the UI can show them.

use std::collections::VecDeque;
use std::sync::{Mutex, OnceLock};

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Default number of records kept in memory
pub const DEFAULT_CAPACITY: usize = 200;

static LOGGER: OnceLock<ConsoleLogger> = OnceLock::new();

/// Console logger with an in-memory tail of recent records
pub struct ConsoleLogger {
    level: LevelFilter,
    capacity: usize,
    buffer: Mutex<VecDeque<String>>,
}

impl ConsoleLogger {
    pub fn new(level: LevelFilter) -> Self {
        Self::with_capacity(level, DEFAULT_CAPACITY)
    }

    pub fn with_capacity(level: LevelFilter, capacity: usize) -> Self {
        Self {
            level,
            capacity: capacity.max(1),
            buffer: Mutex::new(VecDeque::with_capacity(capacity.max(1))),
        }
    }

    /// Snapshot of buffered lines, oldest first
    pub fn recent(&self) -> Vec<String> {
        match self.buffer.lock() {
            Ok(buf) => buf.iter().cloned().collect(),
            Err(poisoned) => poisoned.into_inner().iter().cloned().collect(),
        }
    }

    fn remember(&self, line: String) {
        let mut buf = match self.buffer.lock() {
            Ok(buf) => buf,
            Err(poisoned) => poisoned.into_inner(),
        };
        if buf.len() == self.capacity {
            buf.pop_front();
        }
        buf.push_back(line);
    }
}

fn format_record(record: &Record) -> String {
    format!(
        "[{}] {:<5} {}",
        chrono::Local::now().format("%H:%M:%S%.3f"),
        record.level(),
        record.args()
    )
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::Error => web_sys::console::error_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        Level::Info => web_sys::console::info_1(&value),
        Level::Debug | Level::Trace => web_sys::console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, line: &str) {
    eprintln!("{}", line);
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_record(record);
        emit(record.level(), &line);
        self.remember(line);
    }

    fn flush(&self) {}
}

/// Install the global logger. Fails if a logger is already installed.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    let logger = LOGGER.get_or_init(|| ConsoleLogger::new(level));
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(())
}

/// Recent lines from the global logger (empty before `init`)
pub fn recent() -> Vec<String> {
    LOGGER.get().map(ConsoleLogger::recent).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn log_info(logger: &ConsoleLogger, n: usize) {
        logger.log(
            &Record::builder()
                .args(format_args!("message {}", n))
                .level(Level::Info)
                .target("test")
                .build(),
        );
    }

    #[test]
    fn test_ring_buffer_drops_oldest() {
        let logger = ConsoleLogger::with_capacity(LevelFilter::Info, 3);
        for n in 0..5 {
            log_info(&logger, n);
        }

        let lines = logger.recent();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].ends_with("message 2"));
        assert!(lines[2].ends_with("message 4"));
    }

    #[test]
    fn test_records_below_level_are_skipped() {
        let logger = ConsoleLogger::with_capacity(LevelFilter::Warn, 10);
        log_info(&logger, 1);
        logger.log(
            &Record::builder()
                .args(format_args!("spot lookup failed"))
                .level(Level::Warn)
                .target("test")
                .build(),
        );

        let lines = logger.recent();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("WARN"));
    }

    #[test]
    fn test_init_twice_fails() {
        assert!(init(LevelFilter::Debug).is_ok());
        assert!(init(LevelFilter::Debug).is_err());
    }
}
