//! Application state for the novated lease API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::{ConfigLoader, PolicyConfig};

/// Shared application state.
///
/// Holds the policy table every calculation reads. The API keeps no other
/// state; saved quotes live with the caller.
#[derive(Clone)]
pub struct AppState {
    /// The loaded policy configuration.
    config: Arc<ConfigLoader>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns the policy table.
    pub fn policy(&self) -> &PolicyConfig {
        self.config.policy()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ConfigLoader::builtin())
    }
}
