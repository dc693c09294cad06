//! Record Store Port
//!
//! The only capability repositories depend on: run a parameterized statement
//! and decode zero, one, or many rows. Implemented by [`crate::PgRecordStore`]
//! for PostgreSQL and by [`crate::MockRecordStore`] for tests.

use crate::args::Args;
use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::FromRow;
use std::fmt;
use talentlink_common::RepositoryError;

/// Repository result type
pub type Result<T> = std::result::Result<T, RepositoryError>;

/// Rows decodable from the store
pub trait Record: for<'r> FromRow<'r, PgRow> + Send + Unpin + 'static {}

impl<T> Record for T where T: for<'r> FromRow<'r, PgRow> + Send + Unpin + 'static {}

/// Diagnostic label for one repository operation
///
/// Carried into logs only; it never changes what a statement does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Op {
    pub repository: &'static str,
    pub method: &'static str,
}

impl Op {
    pub const fn new(repository: &'static str, method: &'static str) -> Self {
        Self { repository, method }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.repository, self.method)
    }
}

/// Outcome of a mutating statement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExecOutcome {
    pub rows_affected: u64,
}

#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Run a mutating statement
    async fn exec(&self, op: Op, sql: &str, args: Args) -> Result<ExecOutcome>;

    /// Run an `INSERT ... RETURNING id` and return the generated identifier
    async fn insert(&self, op: Op, sql: &str, args: Args) -> Result<i64>;

    /// Fetch exactly one row; zero rows is [`RepositoryError::NotFound`]
    async fn get<T: Record>(&self, op: Op, sql: &str, args: Args) -> Result<T>;

    /// Fetch every matching row
    async fn select<T: Record>(&self, op: Op, sql: &str, args: Args) -> Result<Vec<T>>;

    /// Fetch a single `BIGINT` aggregate
    async fn count(&self, op: Op, sql: &str, args: Args) -> Result<i64>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_op_display() {
        let op = Op::new("JobSeekerRepository", "update_agreement");
        assert_eq!(op.to_string(), "JobSeekerRepository.update_agreement");
    }
}
