//! PostgreSQL persistence adapters for the board repository ports.

mod diesel_like_repository;
mod diesel_question_repository;
mod diesel_reply_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_like_repository::DieselLikeRepository;
pub use diesel_question_repository::DieselQuestionRepository;
pub use diesel_reply_repository::DieselReplyRepository;
pub use migrations::{MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};

use tracing::debug;

use crate::domain::ports::RepositoryError;

/// Map pool errors to the shared repository error.
pub(crate) fn map_pool_error(error: PoolError) -> RepositoryError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            RepositoryError::connection(message)
        }
    }
}

/// Map Diesel errors to the shared repository error.
///
/// The underlying message is logged but not propagated so database
/// internals never leak through the domain into responses.
pub(crate) fn map_diesel_error(error: diesel::result::Error) -> RepositoryError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::NotFound => RepositoryError::query("record not found"),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            RepositoryError::connection("database connection error")
        }
        _ => RepositoryError::query("database error"),
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn pool_errors_map_to_connection_errors() {
        let mapped = map_pool_error(PoolError::checkout("connection refused"));
        assert!(matches!(mapped, RepositoryError::Connection { .. }));
        assert!(mapped.to_string().contains("connection refused"));
    }

    #[rstest]
    fn not_found_maps_to_query_error() {
        let mapped = map_diesel_error(diesel::result::Error::NotFound);
        assert!(matches!(mapped, RepositoryError::Query { .. }));
        assert!(mapped.to_string().contains("record not found"));
    }

    #[rstest]
    fn generic_diesel_errors_do_not_leak_details() {
        let mapped = map_diesel_error(diesel::result::Error::QueryBuilderError(
            "secret column name".into(),
        ));
        assert!(!mapped.to_string().contains("secret column name"));
    }
}
