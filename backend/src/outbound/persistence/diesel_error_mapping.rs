//! Shared Diesel error mapping for the entity repositories.
//!
//! Every repository port exposes the same `Connection`/`Query` split, so the
//! helpers take the port's constructors and stay generic over the error type.

use tracing::debug;

use super::pool::PoolError;

/// Map pool errors into a repository-specific connection error.
pub(crate) fn map_pool_error<E, C>(error: PoolError, connection: C) -> E
where
    C: FnOnce(String) -> E,
{
    let message = match error {
        PoolError::Checkout { message } | PoolError::Build { message } => message,
    };
    connection(message)
}

/// Map Diesel failures into query/connection constructors.
///
/// Database messages are logged at debug level and replaced with generic
/// text so SQL details never reach callers.
pub(crate) fn map_diesel_error<E, Q, C>(
    error: &diesel::result::Error,
    operation: &str,
    query: Q,
    connection: C,
) -> E
where
    Q: FnOnce(&'static str) -> E,
    C: FnOnce(&'static str) -> E,
{
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), %operation, "diesel operation failed");
        }
        other => debug!(error = %other, %operation, "diesel operation failed"),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _)
        | DieselError::BrokenTransactionManager => connection("database connection error"),
        DieselError::NotFound => query("record not found"),
        DieselError::QueryBuilderError(_) => query("database query error"),
        _ => query("database error"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::UserRepositoryError;
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    fn map(error: &DieselError) -> UserRepositoryError {
        map_diesel_error(
            error,
            "test",
            UserRepositoryError::query,
            UserRepositoryError::connection,
        )
    }

    #[test]
    fn closed_connection_maps_to_connection_error() {
        let error = DieselError::DatabaseError(
            DatabaseErrorKind::ClosedConnection,
            Box::new("server closed the connection".to_owned()),
        );
        assert_eq!(
            map(&error),
            UserRepositoryError::connection("database connection error")
        );
    }

    #[test]
    fn constraint_failures_map_to_query_error() {
        let error = DieselError::DatabaseError(
            DatabaseErrorKind::UniqueViolation,
            Box::new("duplicate key".to_owned()),
        );
        assert_eq!(map(&error), UserRepositoryError::query("database error"));
    }

    #[test]
    fn pool_errors_keep_their_message() {
        let mapped = map_pool_error(
            PoolError::checkout("timed out"),
            UserRepositoryError::connection,
        );
        assert_eq!(mapped, UserRepositoryError::connection("timed out"));
    }
}
