use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::choices::{Club, DistRange, GreenType, LieType, MissDir};

pub const MAX_PUTTS: u8 = 6;
pub const MAX_RECOVERY_STROKES: u8 = 6;
/// The form's last score option ("9~") is stored as this value.
pub const MAX_HOLE_SCORE: u8 = 9;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EntryError {
    #[error("{field} out of range: {value}")]
    OutOfRange { field: &'static str, value: i64 },
    #[error("a missed green needs a miss direction and a lie")]
    MissDetailsRequired,
}

/// Idempotency key for a hole submission.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct HoleKey {
    pub round_date: NaiveDate,
    pub hole_no: u8,
}

/// What the navigator knows about the hole being played.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct HoleContext {
    pub round_date: NaiveDate,
    pub course_name: String,
    pub hole_no: u8,
    pub par: u8,
    pub green_type: GreenType,
}

/// What the player entered for the hole.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShotDetails {
    pub dist_range: DistRange,
    pub club: Club,
    pub is_green_on: bool,
    pub miss_dir: MissDir,
    pub lie_type: LieType,
    pub recovery_strokes: u8,
    pub hole_score: u8,
    pub putts: u8,
}

/// One row of `approach_logs`, minus the surrogate id.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct HoleEntry {
    pub round_date: NaiveDate,
    pub course_name: String,
    pub hole_no: u8,
    pub par: u8,
    pub dist_range: DistRange,
    pub club: Club,
    pub is_green_on: bool,
    pub miss_dir: MissDir,
    pub lie_type: LieType,
    pub recovery_strokes: u8,
    pub hole_score: u8,
    pub green_type: GreenType,
    pub putts: u8,
}

fn check_range(field: &'static str, value: u8, min: u8, max: u8) -> Result<(), EntryError> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(EntryError::OutOfRange {
            field,
            value: i64::from(value),
        })
    }
}

impl HoleEntry {
    /// Merge the navigator's hole context with the player's shot details.
    ///
    /// A green-on shot always stores `NONE` for miss direction and lie.
    ///
    /// # Errors
    ///
    /// Returns `EntryError` if a value falls outside its option list, or the
    /// green was missed without a direction and a lie.
    pub fn from_parts(ctx: HoleContext, shot: ShotDetails) -> Result<Self, EntryError> {
        check_range("hole_no", ctx.hole_no, 1, 18)?;
        check_range("par", ctx.par, 3, 5)?;
        check_range("putts", shot.putts, 0, MAX_PUTTS)?;
        check_range("hole_score", shot.hole_score, 1, MAX_HOLE_SCORE)?;
        check_range("recovery_strokes", shot.recovery_strokes, 0, MAX_RECOVERY_STROKES)?;

        let (miss_dir, lie_type) = if shot.is_green_on {
            (MissDir::None, LieType::None)
        } else if shot.miss_dir == MissDir::None || shot.lie_type == LieType::None {
            return Err(EntryError::MissDetailsRequired);
        } else {
            (shot.miss_dir, shot.lie_type)
        };

        Ok(Self {
            round_date: ctx.round_date,
            course_name: ctx.course_name,
            hole_no: ctx.hole_no,
            par: ctx.par,
            dist_range: shot.dist_range,
            club: shot.club,
            is_green_on: shot.is_green_on,
            miss_dir,
            lie_type,
            recovery_strokes: shot.recovery_strokes,
            hole_score: shot.hole_score,
            green_type: ctx.green_type,
            putts: shot.putts,
        })
    }

    #[must_use]
    pub fn key(&self) -> HoleKey {
        HoleKey {
            round_date: self.round_date,
            hole_no: self.hole_no,
        }
    }
}

/// A persisted entry with its surrogate id.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct StoredEntry {
    pub id: i64,
    #[serde(flatten)]
    pub entry: HoleEntry,
}
