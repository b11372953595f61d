use chrono::NaiveDate;
use serde::Deserialize;
use std::collections::HashMap;
use std::hash::BuildHasher;

use crate::error::CoreError;
use crate::model::choices::{Choice, GreenType, StartSide, parse_choice};
use crate::model::course::HOLE_COUNT;
use crate::model::navigator::{RoundConfig, RoundNavigator};

/// Session fields mirrored into the page URL so a reload after a restart
/// lands on the same hole.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionParams {
    pub hole: Option<usize>,
    pub course: Option<String>,
    pub start: Option<StartSide>,
    pub green: Option<GreenType>,
}

impl SessionParams {
    /// Lenient decode: unknown or malformed values are ignored.
    #[must_use]
    pub fn from_query<S: BuildHasher>(query: &HashMap<String, String, S>) -> Self {
        Self {
            hole: query
                .get("hole")
                .and_then(|s| s.trim().parse::<usize>().ok())
                .filter(|h| *h < HOLE_COUNT),
            course: query
                .get("course")
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            start: query.get("start").and_then(|s| parse_choice(s.trim())),
            green: query.get("green").and_then(|s| parse_choice(s.trim())),
        }
    }

    #[must_use]
    pub fn from_navigator(navigator: &RoundNavigator) -> Self {
        let config = navigator.config();
        Self {
            hole: Some(navigator.hole_index()),
            course: Some(config.course_name.clone()),
            start: Some(config.start_side),
            green: Some(config.green_type),
        }
    }

    /// Overwrite the navigator's configuration and position with whatever was given.
    pub fn apply(&self, navigator: &mut RoundNavigator) {
        let mut config = navigator.config().clone();
        if let Some(course) = &self.course {
            config.course_name.clone_from(course);
        }
        if let Some(start) = self.start {
            config.start_side = start;
        }
        if let Some(green) = self.green {
            config.green_type = green;
        }
        if &config != navigator.config() {
            navigator.reconfigure(config);
        }
        if let Some(hole) = self.hole {
            navigator.jump_to(hole);
        }
    }

    #[must_use]
    pub fn to_query_string(&self) -> String {
        let mut serializer = url::form_urlencoded::Serializer::new(String::new());
        if let Some(hole) = self.hole {
            serializer.append_pair("hole", &hole.to_string());
        }
        if let Some(course) = &self.course {
            serializer.append_pair("course", course);
        }
        if let Some(start) = self.start {
            serializer.append_pair("start", start.code());
        }
        if let Some(green) = self.green {
            serializer.append_pair("green", green.code());
        }
        serializer.finish()
    }
}

/// The configuration panel.
#[derive(Deserialize, Debug, Clone)]
pub struct ConfigForm {
    pub round_date: NaiveDate,
    pub course_name: String,
    pub start_side: StartSide,
    pub green_type: GreenType,
}

impl ConfigForm {
    /// A blank course name keeps `current_course`.
    #[must_use]
    pub fn into_config(self, current_course: &str) -> RoundConfig {
        let course_name = match self.course_name.trim() {
            "" => current_course.to_string(),
            name => name.to_string(),
        };
        RoundConfig {
            round_date: self.round_date,
            course_name,
            start_side: self.start_side,
            green_type: self.green_type,
        }
    }
}

/// `?green_on=` carried by the result toggle buttons.
#[derive(Deserialize, Debug, Clone, Copy)]
pub struct GreenForm {
    pub green_on: bool,
}

/// Parse the optional `date` query parameter of the history endpoint.
///
/// # Errors
///
/// Returns `CoreError::Parse` if the date is not `YYYY-MM-DD`.
pub fn parse_history_date<S: BuildHasher>(
    query: &HashMap<String, String, S>,
) -> Result<Option<NaiveDate>, CoreError> {
    match query.get("date").map(|s| s.trim()).filter(|s| !s.is_empty()) {
        None => Ok(None),
        Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map(Some)
            .map_err(|e| CoreError::Parse(format!("date must be YYYY-MM-DD ({raw}): {e}"))),
    }
}
