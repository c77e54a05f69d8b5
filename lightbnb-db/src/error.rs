//! Error types for lightbnb-db
//!
//! Driver errors are classified once, in `From<sqlx::Error>`, so callers can
//! tell a dead connection from a rejected insert without string matching.

use sqlx::error::ErrorKind;
use thiserror::Error;

use crate::models::ValidationError;

pub type DbResult<T> = Result<T, DbError>;

#[derive(Error, Debug)]
pub enum DbError {
    /// Pool exhausted or closed, socket/TLS failure, bad connect options
    #[error("connection error: {0}")]
    Connection(#[source] sqlx::Error),

    /// Unique, foreign-key, not-null or check constraint rejected the statement
    #[error("constraint violation ({}): {message}", .constraint.as_deref().unwrap_or("unnamed"))]
    ConstraintViolation {
        constraint: Option<String>,
        message: String,
    },

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },

    /// Any other SQL or row-decoding failure
    #[error("query error: {0}")]
    Query(#[source] sqlx::Error),

    #[error("invalid input: {0}")]
    Validation(#[from] ValidationError),
}

impl DbError {
    pub fn not_found(resource: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            resource,
            id: id.to_string(),
        }
    }

    pub fn is_connection(&self) -> bool {
        matches!(self, Self::Connection(_))
    }

    pub fn is_constraint_violation(&self) -> bool {
        matches!(self, Self::ConstraintViolation { .. })
    }
}

impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db)
                if matches!(
                    db.kind(),
                    ErrorKind::UniqueViolation
                        | ErrorKind::ForeignKeyViolation
                        | ErrorKind::NotNullViolation
                        | ErrorKind::CheckViolation
                ) =>
            {
                Self::ConstraintViolation {
                    constraint: db.constraint().map(str::to_owned),
                    message: db.message().to_owned(),
                }
            }
            err @ (sqlx::Error::Configuration(_)
            | sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::Protocol(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed) => Self::Connection(err),
            err => Self::Query(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_errors_are_connection_errors() {
        assert!(DbError::from(sqlx::Error::PoolTimedOut).is_connection());
        assert!(DbError::from(sqlx::Error::PoolClosed).is_connection());

        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        assert!(DbError::from(sqlx::Error::Io(io)).is_connection());
    }

    #[test]
    fn decode_errors_are_query_errors() {
        let err = DbError::from(sqlx::Error::RowNotFound);
        assert!(matches!(err, DbError::Query(_)));
        assert!(!err.is_connection());
        assert!(!err.is_constraint_violation());
    }

    #[test]
    fn error_display() {
        let err = DbError::not_found("user", 42);
        assert_eq!(err.to_string(), "not found: user '42'");

        let err = DbError::ConstraintViolation {
            constraint: Some("users_email_key".into()),
            message: "duplicate key value violates unique constraint".into(),
        };
        assert_eq!(
            err.to_string(),
            "constraint violation (users_email_key): duplicate key value violates unique constraint"
        );

        let err = DbError::ConstraintViolation {
            constraint: None,
            message: "boom".into(),
        };
        assert_eq!(err.to_string(), "constraint violation (unnamed): boom");
    }

    #[test]
    fn validation_converts() {
        let err: DbError = ValidationError::Empty { field: "name" }.into();
        assert!(matches!(err, DbError::Validation(_)));
        assert_eq!(err.to_string(), "invalid input: name cannot be empty");
    }
}
