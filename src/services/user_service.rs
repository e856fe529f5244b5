//! User service - The in-memory user store facade.
//!
//! The whole data model is one process-wide `User` slot. All access goes
//! through [`UserService`] so handlers stay decoupled from the storage
//! representation.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::{User, UserDto};
use crate::errors::{AppError, AppResult, OptionExt};

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Build a user from the transport shape and store it, overwriting
    /// any existing record. Returns the stored value.
    async fn create_user(&self, dto: UserDto) -> AppResult<User>;

    /// Get the current record (`NotFound` when absent)
    async fn get_user_info(&self) -> AppResult<User>;

    /// Replace the existing record wholesale (`NotFound` when absent).
    ///
    /// Same mapping as create; the only difference is that update refuses
    /// to materialize a record that was never created.
    async fn update_user_info(&self, dto: UserDto) -> AppResult<User>;

    /// Clear the record (`NotFound` when already absent)
    async fn delete_user(&self) -> AppResult<()>;
}

/// Concrete [`UserService`] holding the singleton record.
///
/// All access to the record goes through the lock; concurrent request
/// handlers never touch the slot directly.
pub struct UserStore {
    record: RwLock<Option<User>>,
}

impl UserStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            record: RwLock::new(None),
        }
    }
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserService for UserStore {
    async fn create_user(&self, dto: UserDto) -> AppResult<User> {
        let user = User::from(dto);
        let mut record = self.record.write().await;
        *record = Some(user.clone());
        tracing::debug!(name = %user.name, "User record created");
        Ok(user)
    }

    async fn get_user_info(&self) -> AppResult<User> {
        self.record.read().await.clone().ok_or_not_found()
    }

    async fn update_user_info(&self, dto: UserDto) -> AppResult<User> {
        let mut record = self.record.write().await;
        if record.is_none() {
            return Err(AppError::NotFound);
        }

        let user = User::from(dto);
        *record = Some(user.clone());
        tracing::debug!(name = %user.name, "User record updated");
        Ok(user)
    }

    async fn delete_user(&self) -> AppResult<()> {
        let mut record = self.record.write().await;
        record.take().map(|_| ()).ok_or_not_found()
    }
}
