//! Logging setup and error reporting through the `log` facade
//!
//! Configure levels with `RUST_LOG`, e.g. `RUST_LOG=formattable_error=trace`
//! to see every constructed error.

use super::types::FormattableError;
use log::{error, info, warn};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize `env_logger` once for the whole process
pub fn init() {
    INIT_LOGGER.call_once(|| {
        let initialized = env_logger::Builder::from_default_env()
            .format_timestamp_micros()
            .try_init();

        match initialized {
            Ok(()) => info!("Structured logging initialized"),
            Err(e) => warn!("Logger already installed: {e}"),
        }
    });
}

/// Initialize logging for test environments
///
/// Safe to call from every test
pub fn init_test() {
    let _ = env_logger::Builder::from_default_env()
        .is_test(true)
        .try_init();
}

/// Log an error with its kind, location and full cause chain
pub fn log_error(err: &FormattableError) {
    error!("{} at {}: {err:#}", err.kind(), err.location());
}

/// Log a recovered error as a warning
pub fn log_warning(err: &FormattableError) {
    warn!("{} at {}: {err:#}", err.kind(), err.location());
}
