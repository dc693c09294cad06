//! Shared database types for TalentLink
//!
//! This module provides the error type returned by every repository.

use thiserror::Error;

/// Database-specific error types
///
/// Store errors are carried unchanged in `Database`; the only condition the
/// store adapter names itself is a single-row lookup that matched nothing.
#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("Record not found")]
    NotFound,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl RepositoryError {
    /// A single-row lookup matched zero rows
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            RepositoryError::NotFound | RepositoryError::Database(sqlx::Error::RowNotFound)
        )
    }

    /// Insert or update collided with a unique constraint
    pub fn is_unique_violation(&self) -> bool {
        match self {
            RepositoryError::Database(sqlx::Error::Database(db_err)) => {
                db_err.is_unique_violation()
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_is_distinguishable() {
        assert!(RepositoryError::NotFound.is_not_found());
        assert!(RepositoryError::Database(sqlx::Error::RowNotFound).is_not_found());
        assert!(!RepositoryError::Database(sqlx::Error::PoolTimedOut).is_not_found());
        assert!(!RepositoryError::InvalidData("x".to_string()).is_not_found());
    }

    #[test]
    fn test_non_database_errors_are_not_unique_violations() {
        assert!(!RepositoryError::NotFound.is_unique_violation());
        assert!(!RepositoryError::Database(sqlx::Error::PoolClosed).is_unique_violation());
    }
}
