//! User domain service.
//!
//! Registration and listing pass straight through to the repository; the only
//! work done here is translating persistence failures into domain errors.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{UserManagement, UserRepository, UserRepositoryError};
use crate::domain::{Error, User, UserDraft};

/// Service implementing [`UserManagement`] over a [`UserRepository`].
pub struct UserService<R: ?Sized> {
    users: Arc<R>,
}

impl<R: ?Sized> UserService<R> {
    /// Create a service backed by the given repository.
    #[must_use]
    pub const fn new(users: Arc<R>) -> Self {
        Self { users }
    }
}

impl<R: ?Sized> Clone for UserService<R> {
    fn clone(&self) -> Self {
        Self {
            users: Arc::clone(&self.users),
        }
    }
}

fn map_repository_error(error: UserRepositoryError) -> Error {
    match error {
        UserRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("user repository unavailable: {message}"))
        }
        UserRepositoryError::Query { message } => {
            Error::internal(format!("user repository error: {message}"))
        }
    }
}

#[async_trait]
impl<R> UserManagement for UserService<R>
where
    R: UserRepository + ?Sized,
{
    async fn register(&self, draft: UserDraft) -> Result<User, Error> {
        self.users
            .insert(&draft)
            .await
            .map_err(map_repository_error)
    }

    async fn list_all(&self) -> Result<Vec<User>, Error> {
        self.users.list_all().await.map_err(map_repository_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use crate::domain::UserId;
    use crate::domain::ports::MockUserRepository;
    use rstest::rstest;

    fn ada() -> UserDraft {
        UserDraft {
            username: Some("ada".to_owned()),
            email: Some("ada@example.com".to_owned()),
            ..UserDraft::default()
        }
    }

    #[tokio::test]
    async fn register_returns_repository_record() {
        let mut repo = MockUserRepository::new();
        repo.expect_insert()
            .withf(|draft| draft.username.as_deref() == Some("ada"))
            .times(1)
            .returning(|draft| Ok(User::new(UserId::new(1), draft.clone())));
        let service = UserService::new(Arc::new(repo));

        let user = service.register(ada()).await.expect("registration succeeds");

        assert_eq!(user.id(), UserId::new(1));
        assert_eq!(user.profile(), &ada());
    }

    #[rstest]
    #[case(UserRepositoryError::connection("refused"), ErrorCode::ServiceUnavailable)]
    #[case(UserRepositoryError::query("syntax"), ErrorCode::InternalError)]
    #[tokio::test]
    async fn list_all_maps_repository_failures(
        #[case] failure: UserRepositoryError,
        #[case] expected: ErrorCode,
    ) {
        let mut repo = MockUserRepository::new();
        repo.expect_list_all()
            .times(1)
            .returning(move || Err(failure.clone()));
        let service = UserService::new(Arc::new(repo));

        let err = service.list_all().await.expect_err("failure propagates");

        assert_eq!(err.code(), expected);
    }
}
