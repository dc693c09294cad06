//! Generic Entity Repository
//!
//! Every table in the platform is reached through the same handful of
//! statement shapes. An [`Entity`] describes one table (name, columns, how
//! to bind an insert); [`EntityRepository`] turns that description into the
//! shared operations. Per-entity repositories wrap an `EntityRepository` and
//! add their own named queries and narrow updates.

use crate::args::{Args, SqlValue};
use crate::port::{Op, Record, RecordStore, Result};
use chrono::{DateTime, Utc};
use std::marker::PhantomData;
use talentlink_common::now_utc;
use uuid::Uuid;

/// Table description for one row-shaped record
pub trait Entity: Record {
    /// Table name
    const TABLE: &'static str;
    /// Repository name used in diagnostic labels
    const LABEL: &'static str;
    /// Select list decoded by the record's `FromRow` impl
    const COLUMNS: &'static str;
    /// Columns written by `create`, in the order of [`Entity::insert_args`]
    const INSERT_COLUMNS: &'static [&'static str];

    fn insert_args(&self) -> Args;

    fn set_id(&mut self, id: i64);

    /// Stamp `created_at`/`updated_at` (and generated identifiers) before insert
    fn prepare_insert(&mut self, now: DateTime<Utc>);
}

/// Entity exposed externally through a `uuid` column
pub trait ExternalId: Entity {}

/// Detail row wholly owned by an aggregate root
pub trait ChildEntity: Entity {
    /// Foreign key column pointing at the owning row
    const PARENT_KEY: &'static str;
}

/// Entity with a full-column update
pub trait MutableEntity: Entity {
    /// Every mutable column except identifiers and `created_at`
    fn mutable_columns(&self) -> Vec<(&'static str, SqlValue)>;
}

/// Shared operations over one entity table
pub struct EntityRepository<E, S> {
    store: S,
    _entity: PhantomData<fn() -> E>,
}

impl<E, S: Clone> Clone for EntityRepository<E, S> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            _entity: PhantomData,
        }
    }
}

impl<E: Entity, S: RecordStore> EntityRepository<E, S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            _entity: PhantomData,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn op(&self, method: &'static str) -> Op {
        Op::new(E::LABEL, method)
    }

    /// `SELECT <columns> FROM <table> WHERE <clause>`
    pub fn select_sql(clause: &str) -> String {
        format!("SELECT {} FROM {} WHERE {}", E::COLUMNS, E::TABLE, clause)
    }

    /// Insert the record, then copy the generated id back onto it
    pub async fn create(&self, record: &mut E) -> Result<i64> {
        record.prepare_insert(now_utc());

        let placeholders = (1..=E::INSERT_COLUMNS.len())
            .map(|i| format!("${i}"))
            .collect::<Vec<_>>()
            .join(", ");
        let sql = format!(
            "INSERT INTO {} ({}) VALUES ({}) RETURNING id",
            E::TABLE,
            E::INSERT_COLUMNS.join(", "),
            placeholders
        );

        let id = self
            .store
            .insert(self.op("create"), &sql, record.insert_args())
            .await?;
        record.set_id(id);
        Ok(id)
    }

    /// Set the given columns and refresh `updated_at`
    pub async fn update_columns(
        &self,
        method: &'static str,
        id: i64,
        columns: Vec<(&'static str, SqlValue)>,
    ) -> Result<u64> {
        self.set_columns(method, id, columns, true).await
    }

    /// Set the given columns without refreshing `updated_at`
    pub async fn update_columns_untouched(
        &self,
        method: &'static str,
        id: i64,
        columns: Vec<(&'static str, SqlValue)>,
    ) -> Result<u64> {
        self.set_columns(method, id, columns, false).await
    }

    async fn set_columns(
        &self,
        method: &'static str,
        id: i64,
        columns: Vec<(&'static str, SqlValue)>,
        touch: bool,
    ) -> Result<u64> {
        let mut args = Args::new();
        let id_placeholder = args.bind(id);

        let mut assignments = columns
            .into_iter()
            .map(|(column, value)| format!("{} = {}", column, args.bind(value)))
            .collect::<Vec<_>>();
        if touch {
            assignments.push(format!("updated_at = {}", args.bind(now_utc())));
        }

        let sql = format!(
            "UPDATE {} SET {} WHERE id = {}",
            E::TABLE,
            assignments.join(", "),
            id_placeholder
        );
        let outcome = self.store.exec(self.op(method), &sql, args).await?;
        Ok(outcome.rows_affected)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<E> {
        self.find_where("find_by_id", "id = $1", crate::args![id])
            .await
    }

    /// First row matching `clause`, or `NotFound`
    pub async fn find_where(&self, method: &'static str, clause: &str, args: Args) -> Result<E> {
        let sql = Self::select_sql(clause);
        self.store.get(self.op(method), &sql, args).await
    }

    /// Every row matching `clause`; ordering belongs in the clause
    pub async fn select_where(
        &self,
        method: &'static str,
        clause: &str,
        args: Args,
    ) -> Result<Vec<E>> {
        let sql = Self::select_sql(clause);
        self.store.select(self.op(method), &sql, args).await
    }

    /// Rows whose id is in `ids`, ordered by id. Empty input never reaches the store.
    pub async fn get_by_id_list(&self, ids: &[i64]) -> Result<Vec<E>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        self.select_where(
            "get_by_id_list",
            "id = ANY($1) ORDER BY id ASC",
            crate::args![ids],
        )
        .await
    }

    pub async fn all(&self) -> Result<Vec<E>> {
        self.select_where("all", "TRUE ORDER BY id ASC", Args::new())
            .await
    }

    pub async fn count_where(
        &self,
        method: &'static str,
        clause: &str,
        args: Args,
    ) -> Result<i64> {
        let sql = format!("SELECT COUNT(*) FROM {} WHERE {}", E::TABLE, clause);
        self.store.count(self.op(method), &sql, args).await
    }

    pub async fn delete_by_id(&self, id: i64) -> Result<u64> {
        self.delete_where("delete_by_id", "id = $1", crate::args![id])
            .await
    }

    pub async fn delete_where(
        &self,
        method: &'static str,
        clause: &str,
        args: Args,
    ) -> Result<u64> {
        let sql = format!("DELETE FROM {} WHERE {}", E::TABLE, clause);
        self.exec(method, &sql, args).await
    }

    /// Run a hand-written mutating statement
    pub async fn exec(&self, method: &'static str, sql: &str, args: Args) -> Result<u64> {
        let outcome = self.store.exec(self.op(method), sql, args).await?;
        Ok(outcome.rows_affected)
    }
}

impl<E: ExternalId, S: RecordStore> EntityRepository<E, S> {
    pub async fn find_by_uuid(&self, uuid: Uuid) -> Result<E> {
        self.find_where("find_by_uuid", "uuid = $1", crate::args![uuid])
            .await
    }
}

impl<E: MutableEntity, S: RecordStore> EntityRepository<E, S> {
    /// Full-column update of everything but identifiers and `created_at`
    pub async fn update(&self, id: i64, record: &E) -> Result<u64> {
        self.update_columns("update", id, record.mutable_columns())
            .await
    }
}

impl<E: ChildEntity, S: RecordStore> EntityRepository<E, S> {
    pub async fn get_by_parent_id(&self, parent_id: i64) -> Result<Vec<E>> {
        let clause = format!("{} = $1 ORDER BY id ASC", E::PARENT_KEY);
        self.select_where("get_by_parent_id", &clause, crate::args![parent_id])
            .await
    }

    /// Empty input never reaches the store.
    pub async fn get_by_parent_id_list(&self, parent_ids: &[i64]) -> Result<Vec<E>> {
        if parent_ids.is_empty() {
            return Ok(Vec::new());
        }
        let clause = format!("{} = ANY($1) ORDER BY id ASC", E::PARENT_KEY);
        self.select_where("get_by_parent_id_list", &clause, crate::args![parent_ids])
            .await
    }

    /// Remove every row owned by `parent_id`
    pub async fn delete_by_parent_id(&self, parent_id: i64) -> Result<u64> {
        let clause = format!("{} = $1", E::PARENT_KEY);
        self.delete_where("delete_by_parent_id", &clause, crate::args![parent_id])
            .await
    }
}
