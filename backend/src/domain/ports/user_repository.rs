//! Driven port for user persistence.

use async_trait::async_trait;

use crate::domain::{User, UserDraft};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "user repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "user repository query failed: {message}",
    }
}

/// Storage for registered users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a new user, assigning a fresh identifier.
    async fn insert(&self, draft: &UserDraft) -> Result<User, UserRepositoryError>;

    /// Every stored user in ascending identifier order.
    async fn list_all(&self) -> Result<Vec<User>, UserRepositoryError>;
}
