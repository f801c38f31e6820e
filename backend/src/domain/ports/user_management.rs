//! Driving port for the user slice.
//!
//! HTTP handlers call this port; [`crate::domain::UserService`] implements it
//! on top of a [`super::UserRepository`].

use async_trait::async_trait;

use crate::domain::{Error, User, UserDraft};

/// User registration and listing use-cases.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserManagement: Send + Sync {
    /// Register a user exactly as submitted.
    async fn register(&self, draft: UserDraft) -> Result<User, Error>;

    /// List every registered user.
    async fn list_all(&self) -> Result<Vec<User>, Error>;
}
