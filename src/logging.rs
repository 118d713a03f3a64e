#![cfg(feature = "std")]
//! Line logger for the `log` facade. Records go to stderr so board pictures
//! and the `sim` JSON line keep stdout to themselves.

use std::env;
use std::io::{self, Write};

use log::{LevelFilter, Log, Metadata, Record};

/// Environment variable holding the log level filter.
pub const LOG_ENV: &str = "DUEL_LOG";

struct DuelLogger {
    level: LevelFilter,
}

impl Log for DuelLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let mut err = io::stderr().lock();
        let _ = writeln!(err, "[{:<5} {}] {}", record.level(), record.target(), record.args());
    }

    fn flush(&self) {
        let _ = io::stderr().flush();
    }
}

/// Level for a `DUEL_LOG` value: any `log` level name, case-insensitive, or
/// `off`. Unset or unrecognised values give `info`.
pub fn level_from(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(LevelFilter::Info)
}

/// Install the logger with the level from `DUEL_LOG`. Only the first call
/// takes effect.
pub fn init_logging() {
    let level = level_from(env::var(LOG_ENV).ok().as_deref());
    if log::set_boxed_logger(Box::new(DuelLogger { level })).is_ok() {
        log::set_max_level(level);
    }
}
