//! Record store port and generic entity repository for TalentLink
//!
//! Repositories build parameterized SQL, hand it to a [`RecordStore`], and map
//! the rows back into records. Nothing here holds state beyond the store
//! handle; errors from the store are returned unchanged.

pub mod args;
pub mod entity;
pub mod free_word;
pub mod hierarchy;
pub mod mock;
pub mod port;
pub mod postgres;

pub use args::{Args, SqlValue};
pub use entity::{ChildEntity, Entity, EntityRepository, ExternalId, MutableEntity};
pub use free_word::{FreeWord, FreeWordTarget};
pub use mock::{CallKind, MockRecordStore, RecordedCall};
pub use port::{ExecOutcome, Op, Record, RecordStore, Result};
pub use postgres::PgRecordStore;
pub use talentlink_common::RepositoryError;
