// Application state module
// Immutable runtime state shared across connection tasks

use std::sync::atomic::AtomicUsize;

use super::types::Config;

/// Application state
///
/// The configuration never changes after startup, so everything here is
/// read-only apart from the connection counter.
pub struct AppState {
    pub config: Config,
    /// Currently open connections, for the max_connections limit
    pub active_connections: AtomicUsize,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            active_connections: AtomicUsize::new(0),
        }
    }
}
