use serde::{Deserialize, Serialize};

use crate::model::choices::{Club, DistRange, LieType, MissDir};
use crate::model::entry::{MAX_HOLE_SCORE, ShotDetails};

/// The per-hole entry form as posted by the browser.
///
/// `hole_no` is the hole the form was rendered for. Miss fields are only
/// posted when the green was missed.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct HoleForm {
    pub hole_no: u8,
    pub dist_range: DistRange,
    pub club: Club,
    #[serde(default)]
    pub miss_dir: Option<MissDir>,
    #[serde(default)]
    pub lie_type: Option<LieType>,
    pub putts: u8,
    pub hole_score: u8,
    pub recovery_strokes: u8,
}

impl HoleForm {
    /// Pre-selected values for a fresh hole: 120~, 7I, two putts, par.
    #[must_use]
    pub fn defaults_for(hole_no: u8, par: u8) -> Self {
        Self {
            hole_no,
            dist_range: DistRange::default(),
            club: Club::default(),
            miss_dir: None,
            lie_type: None,
            putts: 2,
            hole_score: par.min(MAX_HOLE_SCORE),
            recovery_strokes: 0,
        }
    }

    /// The selected miss direction, or the first option when none was posted.
    #[must_use]
    pub fn miss_dir_or_default(&self) -> MissDir {
        self.miss_dir.unwrap_or(MissDir::MISSED[0])
    }

    #[must_use]
    pub fn lie_type_or_default(&self) -> LieType {
        self.lie_type.unwrap_or(LieType::MISSED[0])
    }

    #[must_use]
    pub fn shot(&self, is_green_on: bool) -> ShotDetails {
        let (miss_dir, lie_type) = if is_green_on {
            (MissDir::None, LieType::None)
        } else {
            (self.miss_dir_or_default(), self.lie_type_or_default())
        };
        ShotDetails {
            dist_range: self.dist_range,
            club: self.club,
            is_green_on,
            miss_dir,
            lie_type,
            recovery_strokes: self.recovery_strokes,
            hole_score: self.hole_score,
            putts: self.putts,
        }
    }
}
