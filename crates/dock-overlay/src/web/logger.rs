//! `log` backend writing to the browser console

use log::{Level, LevelFilter, Log, Metadata, Record};
use web_sys::console;

/// Forwards log records to `console.*` by level
pub struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl ConsoleLogger {
    /// Install as the global logger
    ///
    /// Returns false if another logger was installed first.
    pub fn init(level: LevelFilter) -> bool {
        match log::set_logger(&LOGGER) {
            Ok(()) => {
                log::set_max_level(level);
                true
            }
            Err(_) => false,
        }
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format!("{}", record.args());
        match record.level() {
            Level::Error => console::error_1(&line.into()),
            Level::Warn => console::warn_1(&line.into()),
            Level::Info => console::info_1(&line.into()),
            Level::Debug | Level::Trace => console::debug_1(&line.into()),
        }
    }

    fn flush(&self) {}
}
