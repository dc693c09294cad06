//! Mock Record Store Implementation
//!
//! Records every statement in memory for test assertions.
//! Thread-safe via `Arc<Mutex<>>`.

use crate::args::Args;
use crate::port::{ExecOutcome, Op, Record, RecordStore, Result};
use async_trait::async_trait;
use std::sync::atomic::{AtomicI64, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use talentlink_common::RepositoryError;

/// Which port method received a call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallKind {
    Exec,
    Insert,
    Get,
    Select,
    Count,
}

/// One recorded invocation
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub kind: CallKind,
    pub op: Op,
    pub sql: String,
    pub args: Args,
}

/// Mock store that records statements for test assertions.
///
/// `insert` hands out sequential ids, `select` returns no rows, `get` returns
/// `NotFound`; `exec` and `count` return configurable values.
#[derive(Debug, Clone)]
pub struct MockRecordStore {
    calls: Arc<Mutex<Vec<RecordedCall>>>,
    next_id: Arc<AtomicI64>,
    rows_affected: Arc<AtomicU64>,
    count: Arc<AtomicI64>,
}

impl MockRecordStore {
    /// Create a new mock store.
    pub fn new() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            next_id: Arc::new(AtomicI64::new(1)),
            rows_affected: Arc::new(AtomicU64::new(1)),
            count: Arc::new(AtomicI64::new(0)),
        }
    }

    /// Value returned as `rows_affected` by subsequent `exec` calls.
    pub fn set_rows_affected(&self, rows: u64) {
        self.rows_affected.store(rows, Ordering::SeqCst);
    }

    /// Value returned by subsequent `count` calls.
    pub fn set_count(&self, count: i64) {
        self.count.store(count, Ordering::SeqCst);
    }

    /// Return all recorded calls.
    pub fn recorded_calls(&self) -> Vec<RecordedCall> {
        self.calls
            .lock()
            .expect("calls lock poisoned — prior test panicked")
            .clone()
    }

    /// Number of recorded calls.
    pub fn call_count(&self) -> usize {
        self.calls
            .lock()
            .expect("calls lock poisoned — prior test panicked")
            .len()
    }

    /// The most recent call, if any.
    pub fn last_call(&self) -> Option<RecordedCall> {
        self.calls
            .lock()
            .expect("calls lock poisoned — prior test panicked")
            .last()
            .cloned()
    }

    /// Clear all recorded calls.
    pub fn reset(&self) {
        self.calls
            .lock()
            .expect("calls lock poisoned — prior test panicked")
            .clear();
    }

    fn record(&self, kind: CallKind, op: Op, sql: &str, args: Args) -> Result<()> {
        tracing::debug!(op = %op, ?kind, "Mock store: recording call");
        self.calls
            .lock()
            .map_err(|e| RepositoryError::InvalidData(format!("calls lock poisoned: {e}")))?
            .push(RecordedCall {
                kind,
                op,
                sql: sql.to_string(),
                args,
            });
        Ok(())
    }
}

impl Default for MockRecordStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecordStore for MockRecordStore {
    async fn exec(&self, op: Op, sql: &str, args: Args) -> Result<ExecOutcome> {
        self.record(CallKind::Exec, op, sql, args)?;
        Ok(ExecOutcome {
            rows_affected: self.rows_affected.load(Ordering::SeqCst),
        })
    }

    async fn insert(&self, op: Op, sql: &str, args: Args) -> Result<i64> {
        self.record(CallKind::Insert, op, sql, args)?;
        Ok(self.next_id.fetch_add(1, Ordering::SeqCst))
    }

    async fn get<T: Record>(&self, op: Op, sql: &str, args: Args) -> Result<T> {
        self.record(CallKind::Get, op, sql, args)?;
        Err(RepositoryError::NotFound)
    }

    async fn select<T: Record>(&self, op: Op, sql: &str, args: Args) -> Result<Vec<T>> {
        self.record(CallKind::Select, op, sql, args)?;
        Ok(Vec::new())
    }

    async fn count(&self, op: Op, sql: &str, args: Args) -> Result<i64> {
        self.record(CallKind::Count, op, sql, args)?;
        Ok(self.count.load(Ordering::SeqCst))
    }
}
