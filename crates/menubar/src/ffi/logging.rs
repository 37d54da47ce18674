//! `log` backend that forwards records to the host's [`LogCallback`]
//!
//! Installed once per process. Until a callback is attached, records are
//! dropped.

use std::sync::{Arc, OnceLock, RwLock};

use log::{Level, Log, Metadata, Record, SetLoggerError};

use super::types::{FfiLogLevel, LogCallback};

static HOST_LOGGER: OnceLock<HostLogger> = OnceLock::new();

struct HostLogger {
    callback: RwLock<Option<Arc<dyn LogCallback>>>,
    max_level: RwLock<Level>,
}

impl HostLogger {
    fn new(max_level: Level) -> Self {
        Self {
            callback: RwLock::new(None),
            max_level: RwLock::new(max_level),
        }
    }

    fn attach(&self, callback: Option<Arc<dyn LogCallback>>) {
        if let Ok(mut guard) = self.callback.write() {
            *guard = callback;
        }
    }

    fn level(&self) -> Level {
        self.max_level.read().map(|l| *l).unwrap_or(Level::Info)
    }
}

impl Log for HostLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let Ok(guard) = self.callback.read() else {
            return;
        };
        if let Some(callback) = guard.as_ref() {
            callback.on_log(
                FfiLogLevel::from(record.level()),
                record.target().to_string(),
                record.args().to_string(),
            );
        }
    }

    fn flush(&self) {}
}

/// Install the host logger as the global `log` backend.
///
/// Fails if another logger (e.g. `env_logger` in a test binary) is
/// already installed.
pub fn init_ffi_logger(max_level: Level) -> Result<(), SetLoggerError> {
    let logger = HOST_LOGGER.get_or_init(|| HostLogger::new(max_level));
    log::set_logger(logger)?;
    log::set_max_level(max_level.to_level_filter());
    Ok(())
}

/// Route records to `callback`, or drop them with `None`
pub fn set_log_callback(callback: Option<Arc<dyn LogCallback>>) {
    if let Some(logger) = HOST_LOGGER.get() {
        logger.attach(callback);
    }
}

pub fn set_log_level(level: Level) {
    if let Some(logger) = HOST_LOGGER.get() {
        if let Ok(mut guard) = logger.max_level.write() {
            *guard = level;
        }
        log::set_max_level(level.to_level_filter());
    }
}

/// Install the logger (first call only) and attach `callback`
#[uniffi::export]
pub fn initialize_logging(callback: Box<dyn LogCallback>, max_level: FfiLogLevel) {
    let level = Level::from(max_level);
    if init_ffi_logger(level).is_err() {
        // Already installed: just retarget and relevel
        set_log_level(level);
    }
    set_log_callback(Some(Arc::from(callback)));
}

/// Change the level filter of the host logger
#[uniffi::export]
pub fn update_log_level(max_level: FfiLogLevel) {
    set_log_level(Level::from(max_level));
}
