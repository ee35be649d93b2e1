//! Application state for the Leave Engine API.

use std::sync::Arc;

use crate::config::ConfigLoader;

/// Shared application state.
///
/// Holds the loaded leave configuration: institution metadata, leave types
/// with their approval rules, and the holiday calendars used when a request
/// carries no holidays of its own.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
}

impl AppState {
    /// Creates a new application state from a loaded configuration.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns the leave configuration.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_configuration() {
        let config = ConfigLoader::load("./config/university").expect("Failed to load config");
        let state = AppState::new(config);
        let cloned = state.clone();

        assert!(std::ptr::eq(state.config(), cloned.config()));
        assert_eq!(cloned.config().institution().code, "UNIV");
    }
}
