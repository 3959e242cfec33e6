//! Console Logger
//!
//! `log` backend for the browser: every record goes to `console.*` at the
//! matching level, and the most recent lines are kept in a circular buffer
//! so the UI can show or copy them after the fact.

use std::collections::VecDeque;
use std::sync::{Mutex, OnceLock};

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use wasm_bindgen::JsValue;

/// Default number of lines kept in memory
pub const DEFAULT_CAPACITY: usize = 500;

static LOGGER: OnceLock<ConsoleLogger> = OnceLock::new();

/// Fixed-size line buffer; oldest lines are dropped first
#[derive(Debug)]
pub struct LogBuffer {
    lines: VecDeque<String>,
    capacity: usize,
}

impl LogBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            lines: VecDeque::with_capacity(capacity),
            capacity: capacity.max(1),
        }
    }

    pub fn push(&mut self, line: String) {
        if self.lines.len() == self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(line);
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

pub struct ConsoleLogger {
    level: LevelFilter,
    buffer: Mutex<LogBuffer>,
}

impl ConsoleLogger {
    fn new(level: LevelFilter, capacity: usize) -> Self {
        Self {
            level,
            buffer: Mutex::new(LogBuffer::new(capacity)),
        }
    }
}

/// Format a record the same way for the console and the buffer
pub fn format_line(timestamp: &str, level: Level, target: &str, message: &str) -> String {
    format!("{} {:<5} {}: {}", timestamp, level, target, message)
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let timestamp: String = js_sys::Date::new_0().to_iso_string().into();
        let line = format_line(
            &timestamp,
            record.level(),
            record.target(),
            &record.args().to_string(),
        );

        let js_line = JsValue::from_str(&line);
        match record.level() {
            Level::Error => web_sys::console::error_1(&js_line),
            Level::Warn => web_sys::console::warn_1(&js_line),
            Level::Info => web_sys::console::info_1(&js_line),
            Level::Debug => web_sys::console::log_1(&js_line),
            Level::Trace => web_sys::console::debug_1(&js_line),
        }

        if let Ok(mut buffer) = self.buffer.lock() {
            buffer.push(line);
        }
    }

    fn flush(&self) {}
}

/// Install the logger once. Later calls return an error from `log`.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    init_with_capacity(level, DEFAULT_CAPACITY)
}

pub fn init_with_capacity(level: LevelFilter, capacity: usize) -> Result<(), SetLoggerError> {
    let logger = LOGGER.get_or_init(|| ConsoleLogger::new(level, capacity));
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(())
}

/// Snapshot of the buffered lines, oldest first
pub fn recent_lines() -> Vec<String> {
    LOGGER
        .get()
        .and_then(|logger| logger.buffer.lock().ok().map(|b| b.lines()))
        .unwrap_or_default()
}
