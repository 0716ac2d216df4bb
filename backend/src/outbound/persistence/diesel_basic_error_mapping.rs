//! Translation of pool and Diesel failures into repository errors.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use super::pool::PoolError;
use crate::domain::ports::TodoItemsRepositoryError;

pub(crate) fn map_pool_error(error: PoolError) -> TodoItemsRepositoryError {
    let message = match error {
        PoolError::Checkout { message } | PoolError::Build { message } => message,
    };
    TodoItemsRepositoryError::connection(message)
}

/// Collapse Diesel errors into the two repository categories without leaking
/// SQL text; details go to the debug log only.
pub(crate) fn map_diesel_error(error: DieselError) -> TodoItemsRepositoryError {
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        other => debug!(error = %other, "diesel operation failed"),
    }

    match error {
        DieselError::NotFound => TodoItemsRepositoryError::query("record not found"),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            TodoItemsRepositoryError::connection("database connection error")
        }
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            TodoItemsRepositoryError::query("todo item already stored")
        }
        DieselError::DatabaseError(_, _) => TodoItemsRepositoryError::query("database error"),
        _ => TodoItemsRepositoryError::query("database query error"),
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::checkout(PoolError::checkout("timeout"))]
    #[case::build(PoolError::build("bad url"))]
    fn pool_failures_are_connection_errors(#[case] error: PoolError) {
        assert!(matches!(
            map_pool_error(error),
            TodoItemsRepositoryError::Connection { .. }
        ));
    }

    #[rstest]
    fn missing_rows_are_query_errors() {
        assert_eq!(
            map_diesel_error(DieselError::NotFound),
            TodoItemsRepositoryError::query("record not found")
        );
    }

    #[rstest]
    fn rollbacks_do_not_leak_details() {
        assert_eq!(
            map_diesel_error(DieselError::RollbackTransaction),
            TodoItemsRepositoryError::query("database query error")
        );
    }
}
