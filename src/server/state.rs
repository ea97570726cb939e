//! Application state for handlers

use crate::game::GameService;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Game service, shared by every request
    pub service: Arc<GameService>,
}

impl AppState {
    #[must_use]
    pub const fn new(service: Arc<GameService>) -> Self {
        Self { service }
    }
}
