//! Application state - Dependency injection container.

use std::sync::Arc;

use crate::services::{UserService, UserStore};

/// Application state containing the user service.
#[derive(Clone)]
pub struct AppState {
    /// User store facade
    pub user_service: Arc<dyn UserService>,
}

impl AppState {
    /// Create application state with an injected service
    pub fn new(user_service: Arc<dyn UserService>) -> Self {
        Self { user_service }
    }

    /// Create application state backed by a fresh in-memory store.
    ///
    /// This is the only wiring the server uses; `new()` exists for
    /// injecting a different [`UserService`] implementation.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(UserStore::new()))
    }
}
