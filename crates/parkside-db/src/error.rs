use thiserror::Error;

/// Database layer errors
#[derive(Error, Debug)]
pub enum DbError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] diesel::result::Error),

    #[error("Pool error: {0}")]
    PoolError(#[from] diesel_async::pooled_connection::bb8::RunError),

    #[error(transparent)]
    CoreError(#[from] parkside_core::error::CoreError),
}

impl DbError {
    /// Whether this error is a storage-level unique-constraint violation.
    ///
    /// The name-uniqueness pre-check and the subsequent insert are separate
    /// round trips, so a concurrent create can slip past the pre-check and
    /// land on the unique index instead.
    #[must_use]
    pub fn is_unique_violation(&self) -> bool {
        matches!(
            self,
            Self::DatabaseError(diesel::result::Error::DatabaseError(
                diesel::result::DatabaseErrorKind::UniqueViolation,
                _,
            ))
        )
    }
}

pub type DbResult<T> = std::result::Result<T, DbError>;
