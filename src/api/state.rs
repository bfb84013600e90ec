//! Application state shared across handlers.

use std::sync::Arc;

use crate::ws::ChatHub;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// WebSocket hub holding the live connection set.
    pub hub: Arc<ChatHub>,
}

impl AppState {
    /// Create new application state.
    pub fn new(hub: ChatHub) -> Self {
        Self { hub: Arc::new(hub) }
    }
}
