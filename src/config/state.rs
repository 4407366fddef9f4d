// Application state module
// Shared, read-only runtime state built once at startup

use std::sync::atomic::AtomicBool;

use super::types::Config;

/// Application state shared across connections.
///
/// The server holds no mutable state between requests; this is the config
/// plus a lock-free copy of the flags the hot path checks per request.
pub struct AppState {
    pub config: Config,
    pub cached_access_log: AtomicBool,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            cached_access_log: AtomicBool::new(config.logging.access_log),
            config: config.clone(),
        }
    }
}
