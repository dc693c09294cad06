//! Identifier and timestamp helpers
//!
//! Every repository stamps rows through these two functions so that
//! generated identifiers and timestamps are uniform across tables.

use chrono::{DateTime, SubsecRound, Utc};
use uuid::Uuid;

/// Current UTC time truncated to microseconds (PostgreSQL `timestamptz` precision)
///
/// Truncation keeps a stamped record equal to the row read back from the store.
pub fn now_utc() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

/// New external identifier for rows exposed outside the platform
pub fn new_uuid() -> Uuid {
    Uuid::new_v4()
}
