//! Browser console logger.
//!
//! Forwards `log` records from imgpress-core to `console.*` so pipeline
//! stage messages show up in the browser's developer tools.

use imgpress_core::EnvFlags;
use log::{Level, LevelFilter, Log, Metadata, Record};
use wasm_bindgen::JsValue;
use web_sys::console;

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let message = JsValue::from_str(&format!("[{}] {}", record.target(), record.args()));
        match record.level() {
            Level::Error => console::error_1(&message),
            Level::Warn => console::warn_1(&message),
            Level::Info => console::info_1(&message),
            Level::Debug | Level::Trace => console::debug_1(&message),
        }
    }

    fn flush(&self) {}
}

/// Most verbose level shown for the given environment.
pub(crate) fn level_for(flags: &EnvFlags) -> LevelFilter {
    if flags.is_development() {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    }
}

/// Install the console logger. Later calls are ignored.
pub(crate) fn init(flags: &EnvFlags) {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level_for(flags));
    }
}
