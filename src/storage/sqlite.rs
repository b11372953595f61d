use async_trait::async_trait;
use chrono::NaiveDate;
use rusqlite::{Connection, OptionalExtension, Row, params};
use std::path::{Path, PathBuf};

use super::{LogStore, RawLogRow, StorageError, TABLE_NAME};
use crate::model::choices::Choice;
use crate::model::entry::{HoleEntry, StoredEntry};

const SCHEMA: &str = include_str!("../sql/schema/sqlite/00_approach_logs.sql");

const INSERT_SQL: &str = "INSERT INTO approach_logs (round_date, course_name, hole_no, par, \
    dist_range, club, is_green_on, miss_dir, lie_type, recovery_strokes, hole_score, \
    green_type, putts) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)";

const LIST_SQL: &str = "SELECT id, round_date, course_name, hole_no, par, dist_range, club, \
    is_green_on, miss_dir, lie_type, recovery_strokes, hole_score, green_type, putts \
    FROM approach_logs WHERE round_date = ?1 ORDER BY id DESC";

const DELETE_LATEST_SQL: &str = "DELETE FROM approach_logs WHERE id = \
    (SELECT max(id) FROM approach_logs WHERE round_date = ?1) \
    RETURNING id, round_date, course_name, hole_no, par, dist_range, club, \
    is_green_on, miss_dir, lie_type, recovery_strokes, hole_score, green_type, putts";

/// SQLite-backed log; the database is a file opened afresh for every call.
#[derive(Debug, Clone)]
pub struct SqliteLogStore {
    path: PathBuf,
}

fn query_err(e: rusqlite::Error) -> StorageError {
    StorageError::Query(e.to_string())
}

fn raw_row(row: &Row<'_>) -> rusqlite::Result<RawLogRow> {
    Ok(RawLogRow {
        id: row.get("id")?,
        round_date: row.get("round_date")?,
        course_name: row.get("course_name")?,
        hole_no: row.get("hole_no")?,
        par: row.get("par")?,
        dist_range: row.get("dist_range")?,
        club: row.get("club")?,
        is_green_on: row.get("is_green_on")?,
        miss_dir: row.get("miss_dir")?,
        lie_type: row.get("lie_type")?,
        recovery_strokes: row.get("recovery_strokes")?,
        hole_score: row.get("hole_score")?,
        green_type: row.get("green_type")?,
        putts: row.get("putts")?,
    })
}

impl SqliteLogStore {
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Run `f` against a fresh connection on the blocking pool.
    async fn with_connection<T, F>(&self, f: F) -> Result<T, StorageError>
    where
        T: Send + 'static,
        F: FnOnce(&Connection) -> Result<T, StorageError> + Send + 'static,
    {
        let path = self.path.clone();
        tokio::task::spawn_blocking(move || {
            let conn = Connection::open(&path)
                .map_err(|e| StorageError::Unavailable(format!("{}: {e}", path.display())))?;
            f(&conn)
        })
        .await
        .map_err(|e| StorageError::Unavailable(e.to_string()))?
    }
}

#[async_trait]
impl LogStore for SqliteLogStore {
    async fn init_schema(&self) -> Result<(), StorageError> {
        self.with_connection(|conn| conn.execute_batch(SCHEMA).map_err(query_err))
            .await?;
        tracing::info!(table = TABLE_NAME, path = %self.path().display(), "sqlite schema ready");
        Ok(())
    }

    async fn insert(&self, entry: &HoleEntry) -> Result<i64, StorageError> {
        let entry = entry.clone();
        self.with_connection(move |conn| {
            conn.execute(
                INSERT_SQL,
                params![
                    entry.round_date.to_string(),
                    entry.course_name,
                    entry.hole_no,
                    entry.par,
                    entry.dist_range.code(),
                    entry.club.code(),
                    entry.is_green_on,
                    entry.miss_dir.code(),
                    entry.lie_type.code(),
                    entry.recovery_strokes,
                    entry.hole_score,
                    entry.green_type.code(),
                    entry.putts,
                ],
            )
            .map_err(query_err)?;
            Ok(conn.last_insert_rowid())
        })
        .await
    }

    async fn list(&self, round_date: NaiveDate) -> Result<Vec<StoredEntry>, StorageError> {
        let raw = self
            .with_connection(move |conn| {
                let mut stmt = conn.prepare(LIST_SQL).map_err(query_err)?;
                let rows = stmt
                    .query_map(params![round_date.to_string()], raw_row)
                    .map_err(query_err)?;
                rows.collect::<rusqlite::Result<Vec<_>>>()
                    .map_err(query_err)
            })
            .await?;
        raw.into_iter().map(RawLogRow::into_stored).collect()
    }

    async fn delete_latest(
        &self,
        round_date: NaiveDate,
    ) -> Result<Option<StoredEntry>, StorageError> {
        let raw = self
            .with_connection(move |conn| {
                conn.query_row(DELETE_LATEST_SQL, params![round_date.to_string()], raw_row)
                    .optional()
                    .map_err(query_err)
            })
            .await?;
        raw.map(RawLogRow::into_stored).transpose()
    }
}
