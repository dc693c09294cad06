//! PostgreSQL adapter for the Record Store Port

use crate::args::{Args, SqlValue};
use crate::port::{ExecOutcome, Op, Record, RecordStore, Result};
use async_trait::async_trait;
use sqlx::postgres::{PgArguments, PgPoolOptions};
use sqlx::{Arguments, PgPool};
use talentlink_common::{DatabaseConfig, RepositoryError};

/// Record store backed by a shared `PgPool`
#[derive(Clone)]
pub struct PgRecordStore {
    pool: PgPool,
}

impl PgRecordStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Open a pool with the configured size and acquire timeout
    pub async fn connect(config: &DatabaseConfig) -> std::result::Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.acquire_timeout)
            .connect(&config.url)
            .await?;

        tracing::info!(
            max_connections = config.max_connections,
            "Database pool established"
        );
        Ok(Self { pool })
    }

    /// Apply the embedded schema migrations
    pub async fn migrate(&self) -> std::result::Result<(), sqlx::migrate::MigrateError> {
        sqlx::migrate!("../../migrations").run(&self.pool).await
    }

    /// Get a reference to the underlying pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

fn to_pg_arguments(args: Args) -> Result<PgArguments> {
    let mut out = PgArguments::default();
    for value in args.into_values() {
        let added = match value {
            SqlValue::SmallInt(v) => out.add(v),
            SqlValue::Int(v) => out.add(v),
            SqlValue::BigInt(v) => out.add(v),
            SqlValue::Bool(v) => out.add(v),
            SqlValue::Text(v) => out.add(v),
            SqlValue::Uuid(v) => out.add(v),
            SqlValue::Date(v) => out.add(v),
            SqlValue::Timestamp(v) => out.add(v),
            SqlValue::SmallIntArray(v) => out.add(v),
            SqlValue::BigIntArray(v) => out.add(v),
            SqlValue::TextArray(v) => out.add(v),
        };
        added.map_err(|e| RepositoryError::InvalidData(e.to_string()))?;
    }
    Ok(out)
}

fn log_failure(op: Op, err: &sqlx::Error) {
    tracing::error!(op = %op, error = %err, "Statement failed");
}

#[async_trait]
impl RecordStore for PgRecordStore {
    async fn exec(&self, op: Op, sql: &str, args: Args) -> Result<ExecOutcome> {
        tracing::debug!(op = %op, params = args.len(), "exec");
        let arguments = to_pg_arguments(args)?;
        let result = sqlx::query_with(sql, arguments)
            .execute(&self.pool)
            .await
            .inspect_err(|e| log_failure(op, e))?;

        Ok(ExecOutcome {
            rows_affected: result.rows_affected(),
        })
    }

    async fn insert(&self, op: Op, sql: &str, args: Args) -> Result<i64> {
        tracing::debug!(op = %op, params = args.len(), "insert");
        let arguments = to_pg_arguments(args)?;
        let id = sqlx::query_scalar_with::<_, i64, _>(sql, arguments)
            .fetch_one(&self.pool)
            .await
            .inspect_err(|e| log_failure(op, e))?;
        Ok(id)
    }

    async fn get<T: Record>(&self, op: Op, sql: &str, args: Args) -> Result<T> {
        tracing::debug!(op = %op, params = args.len(), "get");
        let arguments = to_pg_arguments(args)?;
        let row = sqlx::query_as_with::<_, T, _>(sql, arguments)
            .fetch_optional(&self.pool)
            .await
            .inspect_err(|e| log_failure(op, e))?;

        row.ok_or_else(|| {
            tracing::debug!(op = %op, "No row matched");
            RepositoryError::NotFound
        })
    }

    async fn select<T: Record>(&self, op: Op, sql: &str, args: Args) -> Result<Vec<T>> {
        tracing::debug!(op = %op, params = args.len(), "select");
        let arguments = to_pg_arguments(args)?;
        let rows = sqlx::query_as_with::<_, T, _>(sql, arguments)
            .fetch_all(&self.pool)
            .await
            .inspect_err(|e| log_failure(op, e))?;
        Ok(rows)
    }

    async fn count(&self, op: Op, sql: &str, args: Args) -> Result<i64> {
        tracing::debug!(op = %op, params = args.len(), "count");
        let arguments = to_pg_arguments(args)?;
        let count = sqlx::query_scalar_with::<_, i64, _>(sql, arguments)
            .fetch_one(&self.pool)
            .await
            .inspect_err(|e| log_failure(op, e))?;
        Ok(count)
    }
}
