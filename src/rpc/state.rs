//! Server state management for the map server

use crate::config::MapConfig;
use crate::editor::MapSession;

/// In-memory state: the editing session plus the configuration it came from
pub struct ServerState {
    pub session: MapSession,
    pub config: MapConfig,
    pub shutdown_requested: bool,
}

impl ServerState {
    pub fn new(config: MapConfig) -> Self {
        Self {
            session: MapSession::from_config(&config),
            config,
            shutdown_requested: false,
        }
    }
}

impl Default for ServerState {
    fn default() -> Self {
        Self::new(MapConfig::default())
    }
}
