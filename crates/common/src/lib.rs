//! Shared utilities, configuration, and error handling for TalentLink
//!
//! This crate provides common functionality used across the persistence layer:
//! - Configuration management following 12-factor principles
//! - Error types and handling
//! - Identifier and timestamp helpers used when rows are created or updated
//! - Tracing subscriber bootstrap

pub mod clock;
pub mod config;
pub mod db;
pub mod error;
pub mod telemetry;

pub use clock::{new_uuid, now_utc};
pub use config::{Config, DatabaseConfig, LogFormat};
pub use db::RepositoryError;
pub use error::{Error, Result};
