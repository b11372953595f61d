#![allow(dead_code)]

use std::sync::Arc;

use approach_log::model::choices::{Club, DistRange, GreenType, LieType, MissDir};
use approach_log::model::entry::HoleEntry;
use approach_log::model::form::HoleForm;
use approach_log::model::navigator::RoundConfig;
use approach_log::mvu::round::RoundModel;
use approach_log::storage::{LogStore, SqliteLogStore, StorageError};
use chrono::NaiveDate;
use tempfile::TempDir;

pub const COURSE: &str = "Kakegawa GH";

pub struct TestContext {
    pub store: Arc<SqliteLogStore>,
    // dropped with the context, taking the database file with it
    _dir: TempDir,
}

impl TestContext {
    pub fn store(&self) -> &dyn LogStore {
        self.store.as_ref()
    }

    pub fn shared_store(&self) -> Arc<dyn LogStore> {
        self.store.clone()
    }
}

pub async fn setup_test_context() -> Result<TestContext, StorageError> {
    let dir = tempfile::tempdir().map_err(|e| StorageError::Unavailable(e.to_string()))?;
    let store = Arc::new(SqliteLogStore::new(dir.path().join("approach_log.db")));
    store.init_schema().await?;
    Ok(TestContext { store, _dir: dir })
}

/// A store whose database file can never be opened.
pub fn unavailable_store() -> SqliteLogStore {
    SqliteLogStore::new("/nonexistent-dir/for/approach-log/tests.db")
}

pub fn round_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, 1).expect("valid date")
}

pub fn entry(hole_no: u8, par: u8, hole_score: u8, putts: u8) -> HoleEntry {
    HoleEntry {
        round_date: round_date(),
        course_name: COURSE.to_string(),
        hole_no,
        par,
        dist_range: DistRange::From120,
        club: Club::Iron7,
        is_green_on: true,
        miss_dir: MissDir::None,
        lie_type: LieType::None,
        recovery_strokes: 0,
        hole_score,
        green_type: GreenType::A,
        putts,
    }
}

pub fn round_model() -> RoundModel {
    RoundModel::new(RoundConfig::new(round_date(), COURSE))
}

/// The form exactly as the page would post it for the model's current hole.
pub fn form_for(model: &RoundModel) -> HoleForm {
    model.form_values()
}
