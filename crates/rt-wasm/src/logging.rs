//! Console logging setup on top of `console_log`.

use log::LevelFilter;
use rt_core::{BridgeError, Result};

/// Parse a level name (`off`, `error`, … `trace`), case-insensitive.
pub fn parse_level(level: &str) -> Result<LevelFilter> {
    level
        .trim()
        .parse()
        .map_err(|_| BridgeError::InvalidConfig(format!("unknown log level `{level}`")))
}

/// Install the console logger at `level`. If a logger is already in place
/// (ours from an earlier launch, or the page's own) only the level changes.
pub fn init(level: LevelFilter) {
    if let Some(level) = level.to_level() {
        if let Err(err) = ::console_log::init_with_level(level) {
            log::debug!("keeping existing logger: {err}");
        }
    }
    log::set_max_level(level);
}

/// Install at `Info` unless a logger is already present.
pub fn init_default() {
    if ::console_log::init_with_level(log::Level::Info).is_err() {
        log::debug!("logger already installed");
    }
}
