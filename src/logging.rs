#![cfg(feature = "std")]

use log::{self, LevelFilter, Metadata, Record};
use std::env;

/// Env var holding the log level filter (`error` .. `trace`, or `off`).
pub const LOG_ENV: &str = "TICTACTOE_LOG";

struct GameLogger;

impl log::Log for GameLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        // stdout belongs to the board and prompts.
        if self.enabled(record.metadata()) {
            eprintln!(
                "{} [{}] {}",
                record.level(),
                component(record.target()),
                record.args()
            );
        }
    }

    fn flush(&self) {}
}

static LOGGER: GameLogger = GameLogger;

/// Last path segment of a log target: `tictactoe::board` becomes `board`,
/// the binary's own records show as `tictactoe`.
fn component(target: &str) -> &str {
    target.rsplit("::").next().unwrap_or(target)
}

/// Install the stderr logger. The level comes from `TICTACTOE_LOG` and
/// defaults to `warn`, so board-scale and symbol fallbacks are always visible.
pub fn init_logging() -> LevelFilter {
    let level = env::var(LOG_ENV)
        .ok()
        .and_then(|lvl| lvl.parse().ok())
        .unwrap_or(LevelFilter::Warn);
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
    log::debug!("logging at {} (set {} to change)", level, LOG_ENV);
    level
}
