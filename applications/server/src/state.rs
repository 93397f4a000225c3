/// Shared application state
use roster_core::{SessionManager, UserRepository};
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub sessions: Arc<SessionManager>,
}

impl AppState {
    pub fn new(users: Arc<dyn UserRepository>, sessions: Arc<SessionManager>) -> Self {
        Self { users, sessions }
    }
}
