use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::Arc;
use thiserror::Error;

use crate::args::{CleanArgs, DatabaseType};
use crate::model::choices::{Choice, parse_choice};
use crate::model::entry::{HoleEntry, StoredEntry};

pub mod postgres;
pub mod sqlite;

pub use postgres::PostgresLogStore;
pub use sqlite::SqliteLogStore;

pub const TABLE_NAME: &str = "approach_logs";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("statement failed: {0}")]
    Query(String),
    #[error("bad row in approach_logs: {0}")]
    Decode(String),
    #[error("storage config: {0}")]
    Config(String),
}

/// Append-only log of hole results.
///
/// Every call opens its own connection, runs one statement and closes it.
#[async_trait]
pub trait LogStore: Send + Sync {
    /// Create `approach_logs` if it does not exist yet.
    async fn init_schema(&self) -> Result<(), StorageError>;

    /// Append one row, returning its surrogate id.
    async fn insert(&self, entry: &HoleEntry) -> Result<i64, StorageError>;

    /// Rows for `round_date`, newest first. No rows is an empty list.
    async fn list(&self, round_date: NaiveDate) -> Result<Vec<StoredEntry>, StorageError>;

    /// Remove the most recently inserted row for `round_date`, if any.
    async fn delete_latest(
        &self,
        round_date: NaiveDate,
    ) -> Result<Option<StoredEntry>, StorageError>;
}

/// Column values as the drivers hand them back, before option lists are checked.
#[derive(Debug, Clone)]
pub(crate) struct RawLogRow {
    pub id: i64,
    pub round_date: String,
    pub course_name: String,
    pub hole_no: i64,
    pub par: i64,
    pub dist_range: String,
    pub club: String,
    pub is_green_on: bool,
    pub miss_dir: String,
    pub lie_type: String,
    pub recovery_strokes: i64,
    pub hole_score: i64,
    pub green_type: String,
    pub putts: i64,
}

fn decode_choice<T: Choice>(field: &str, code: &str) -> Result<T, StorageError> {
    parse_choice(code).ok_or_else(|| StorageError::Decode(format!("{field} = {code:?}")))
}

fn decode_small(field: &str, value: i64) -> Result<u8, StorageError> {
    u8::try_from(value).map_err(|_| StorageError::Decode(format!("{field} = {value}")))
}

impl RawLogRow {
    pub(crate) fn into_stored(self) -> Result<StoredEntry, StorageError> {
        let round_date = NaiveDate::parse_from_str(&self.round_date, "%Y-%m-%d")
            .map_err(|e| StorageError::Decode(format!("round_date = {:?}: {e}", self.round_date)))?;
        let entry = HoleEntry {
            round_date,
            course_name: self.course_name,
            hole_no: decode_small("hole_no", self.hole_no)?,
            par: decode_small("par", self.par)?,
            dist_range: decode_choice("dist_range", &self.dist_range)?,
            club: decode_choice("club", &self.club)?,
            is_green_on: self.is_green_on,
            miss_dir: decode_choice("miss_dir", &self.miss_dir)?,
            lie_type: decode_choice("lie_type", &self.lie_type)?,
            recovery_strokes: decode_small("recovery_strokes", self.recovery_strokes)?,
            hole_score: decode_small("hole_score", self.hole_score)?,
            green_type: decode_choice("green_type", &self.green_type)?,
            putts: decode_small("putts", self.putts)?,
        };
        Ok(StoredEntry { id: self.id, entry })
    }
}

/// Build the store the command line asked for.
#[must_use]
pub fn store_from_args(args: &CleanArgs) -> Arc<dyn LogStore> {
    match args.db_type {
        DatabaseType::Sqlite => Arc::new(SqliteLogStore::new(&args.db_name)),
        DatabaseType::Postgres => Arc::new(PostgresLogStore::new(&args.postgres)),
    }
}
