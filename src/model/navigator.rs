use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::choices::{GreenType, StartSide};
use crate::model::course::{LAST_HOLE_INDEX, hole_number, par_for_hole};
use crate::model::entry::{HoleContext, HoleKey};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct RoundConfig {
    pub round_date: NaiveDate,
    pub course_name: String,
    pub start_side: StartSide,
    pub green_type: GreenType,
}

impl RoundConfig {
    #[must_use]
    pub fn new(round_date: NaiveDate, course_name: impl Into<String>) -> Self {
        Self {
            round_date,
            course_name: course_name.into(),
            start_side: StartSide::default(),
            green_type: GreenType::default(),
        }
    }
}

/// Hole-by-hole position within a round plus the duplicate-submission guard.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct RoundNavigator {
    config: RoundConfig,
    hole_index: usize,
    finished: bool,
    last_registered: Option<HoleKey>,
}

impl RoundNavigator {
    #[must_use]
    pub fn new(config: RoundConfig) -> Self {
        Self {
            config,
            hole_index: 0,
            finished: false,
            last_registered: None,
        }
    }

    #[must_use]
    pub fn config(&self) -> &RoundConfig {
        &self.config
    }

    #[must_use]
    pub fn hole_index(&self) -> usize {
        self.hole_index
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    #[must_use]
    pub fn last_registered(&self) -> Option<HoleKey> {
        self.last_registered
    }

    #[must_use]
    pub fn current_hole(&self) -> u8 {
        hole_number(self.config.start_side, self.hole_index)
    }

    #[must_use]
    pub fn current_par(&self) -> u8 {
        par_for_hole(self.current_hole())
    }

    #[must_use]
    pub fn current_key(&self) -> HoleKey {
        HoleKey {
            round_date: self.config.round_date,
            hole_no: self.current_hole(),
        }
    }

    #[must_use]
    pub fn hole_context(&self) -> HoleContext {
        HoleContext {
            round_date: self.config.round_date,
            course_name: self.config.course_name.clone(),
            hole_no: self.current_hole(),
            par: self.current_par(),
            green_type: self.config.green_type,
        }
    }

    /// Move to the next hole; past the last hole the round is finished and the
    /// index stays put.
    pub fn advance(&mut self) {
        if self.hole_index >= LAST_HOLE_INDEX {
            self.hole_index = LAST_HOLE_INDEX;
            self.finished = true;
        } else {
            self.hole_index += 1;
        }
    }

    /// Step back one hole. Leaving the finished state returns to the last hole.
    pub fn retreat(&mut self) {
        if self.finished {
            self.finished = false;
        } else {
            self.hole_index = self.hole_index.saturating_sub(1);
        }
    }

    /// The "next" button: moves forward without ever finishing the round.
    pub fn skip_forward(&mut self) {
        self.hole_index = (self.hole_index + 1).min(LAST_HOLE_INDEX);
    }

    /// Jump straight to an index, clamped. Used when restoring from the URL.
    pub fn jump_to(&mut self, index: usize) {
        self.hole_index = index.min(LAST_HOLE_INDEX);
        self.finished = false;
    }

    pub fn reset(&mut self) {
        self.hole_index = 0;
        self.finished = false;
        self.last_registered = None;
    }

    /// Apply a new configuration and restart from the first hole of the side.
    /// The guard survives: its key already carries the round date.
    pub fn reconfigure(&mut self, config: RoundConfig) {
        self.config = config;
        self.hole_index = 0;
        self.finished = false;
    }

    #[must_use]
    pub fn is_duplicate(&self, key: &HoleKey) -> bool {
        self.last_registered.as_ref() == Some(key)
    }

    pub fn mark_registered(&mut self, key: HoleKey) {
        self.last_registered = Some(key);
    }

    /// After the newest row for the date was deleted: step back one hole and
    /// allow that hole to be submitted again.
    ///
    /// The step back is positional, not tied to the deleted row's hole.
    pub fn after_delete(&mut self) {
        self.retreat();
        self.last_registered = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn navigator(side: StartSide) -> RoundNavigator {
        let mut config = RoundConfig::new(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(), "Test");
        config.start_side = side;
        RoundNavigator::new(config)
    }

    #[test]
    fn skip_forward_never_finishes() {
        let mut nav = navigator(StartSide::Out);
        for _ in 0..30 {
            nav.skip_forward();
        }
        assert_eq!(nav.hole_index(), LAST_HOLE_INDEX);
        assert!(!nav.is_finished());
    }

    #[test]
    fn in_side_starts_at_ten() {
        let nav = navigator(StartSide::In);
        assert_eq!(nav.current_hole(), 10);
        assert_eq!(nav.current_par(), 5);
    }

    #[test]
    fn reconfigure_keeps_guard_but_restarts() {
        let mut nav = navigator(StartSide::Out);
        let key = nav.current_key();
        nav.mark_registered(key);
        nav.advance();
        let mut config = nav.config().clone();
        config.start_side = StartSide::In;
        nav.reconfigure(config);
        assert_eq!(nav.hole_index(), 0);
        assert_eq!(nav.current_hole(), 10);
        assert_eq!(nav.last_registered(), Some(key));
    }

    #[test]
    fn after_delete_clears_guard_and_steps_back() {
        let mut nav = navigator(StartSide::Out);
        let key = nav.current_key();
        nav.mark_registered(key);
        nav.advance();
        nav.after_delete();
        assert_eq!(nav.hole_index(), 0);
        assert!(!nav.is_duplicate(&key));
    }
}
