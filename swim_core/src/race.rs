//! # Race
//!
//! A single swim: who swam it, in what pool, which stroke and distance,
//! and the time. Conversions never modify a race; they return a new one.
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "gender": "M",
//!   "course": "SCY",
//!   "stroke": "Freestyle",
//!   "distance": 1650,
//!   "time": "18:14.40"
//! }
//! ```
//!
//! ## Example
//!
//! ```rust
//! use swim_core::{Course, Gender, Race, Stroke};
//!
//! let race = Race::new(Gender::Mens, Course::Scy, Stroke::Freestyle, 50).with_time("00:20.00");
//! assert!(race.is_valid());
//! assert_eq!(race.result_value(), "M 50Y Freestyle - 00:20.00");
//!
//! let meters = race.convert_usas(Course::Scm).unwrap();
//! assert_eq!(meters.time, "00:22.20");
//! ```

use serde::{Deserialize, Serialize};

use crate::catalog::EventCatalog;
use crate::conversions::{long_course, ncaa, nfhs, short_course, usas, Organization};
use crate::errors::{ConvertError, ConvertResult};
use crate::event::{is_legal_event, Course, Gender, Stroke, STANDARD_DISTANCES};
use crate::time::{format_time, parse_time, ZERO_TIME};

fn default_time() -> String {
    ZERO_TIME.to_string()
}

/// One swim in one course.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Race {
    pub gender: Gender,
    pub course: Course,
    pub stroke: Stroke,
    /// Distance in the course's unit (yards for SCY, meters otherwise)
    pub distance: u32,
    /// Race time as `MM:SS.HH`
    #[serde(default = "default_time")]
    pub time: String,
}

impl Race {
    /// Create a race with the zero time `00:00.00`
    pub fn new(gender: Gender, course: Course, stroke: Stroke, distance: u32) -> Self {
        Self {
            gender,
            course,
            stroke,
            distance,
            time: default_time(),
        }
    }

    /// Builder: set the race time
    pub fn with_time(mut self, time: impl Into<String>) -> Self {
        self.time = time.into();
        self
    }

    /// Build a race in another course/distance from a number of seconds.
    ///
    /// Fails with `TimeOutOfRange` when the seconds are negative or not finite.
    pub(crate) fn derive(&self, course: Course, distance: u32, seconds: f64) -> ConvertResult<Race> {
        if !seconds.is_finite() || seconds < 0.0 {
            return Err(ConvertError::TimeOutOfRange { seconds });
        }
        Ok(Race {
            gender: self.gender,
            course,
            stroke: self.stroke,
            distance,
            time: format_time(seconds),
        })
    }

    /// Race time in seconds
    pub fn seconds(&self) -> ConvertResult<f64> {
        parse_time(&self.time).map_err(|e| ConvertError::invalid_race(self.event_description(), e.to_string()))
    }

    /// The race time re-rendered as canonical `MM:SS.HH`
    pub fn normalized_time(&self) -> ConvertResult<String> {
        self.seconds().map(format_time)
    }

    /// Check the time parses and the event is swum in this course.
    pub fn validate(&self) -> ConvertResult<()> {
        self.seconds()?;

        if !STANDARD_DISTANCES.contains(&self.distance) {
            return Err(ConvertError::invalid_race(
                self.event_description(),
                format!("{} is not a valid race distance", self.distance),
            ));
        }
        if !is_legal_event(self.course, self.stroke, self.distance) {
            return Err(ConvertError::invalid_race(
                self.event_description(),
                format!("{} is not a valid event", self.event_description()),
            ));
        }
        Ok(())
    }

    /// Boolean form of [`Race::validate`]; the reason is logged at debug level.
    pub fn is_valid(&self) -> bool {
        match self.validate() {
            Ok(()) => true,
            Err(e) => {
                tracing::debug!(race = %self.result_value(), reason = %e, "race is not valid");
                false
            }
        }
    }

    /// `"<gender> <distance><course code> <stroke>"`, e.g. `M 1650Y Freestyle`
    pub fn event_description(&self) -> String {
        format!(
            "{} {}{} {}",
            self.gender.code(),
            self.distance,
            self.course.code(),
            self.stroke.display_name()
        )
    }

    /// Event description followed by the time, e.g. `M 1650Y Freestyle - 18:14.40`
    pub fn result_value(&self) -> String {
        format!("{} - {}", self.event_description(), self.time)
    }

    /// Yards ↔ short course meters, no validation
    pub fn short_course_conversion(&self, target: Course) -> ConvertResult<Race> {
        short_course::convert(self, target)
    }

    /// Any conversion touching long course meters, no validation
    pub fn long_and_short_conversion(&self, target: Course) -> ConvertResult<Race> {
        long_course::convert(self, target, EventCatalog::global())
    }

    /// Convert using USA Swimming rules
    pub fn convert_usas(&self, target: Course) -> ConvertResult<Race> {
        usas::convert(self, target, EventCatalog::global())
    }

    /// Convert using NFHS (high school) rules
    pub fn convert_nfhs(&self, target: Course) -> ConvertResult<Race> {
        nfhs::convert(self, target, EventCatalog::global())
    }

    /// Convert using NCAA rules
    pub fn convert_ncaa(&self, target: Course) -> ConvertResult<Race> {
        ncaa::convert(self, target)
    }

    /// Convert using the given organization's rules
    pub fn convert(&self, organization: Organization, target: Course) -> ConvertResult<Race> {
        organization.convert(self, target)
    }
}

impl std::fmt::Display for Race {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.result_value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mile() -> Race {
        Race::new(Gender::Mens, Course::Scy, Stroke::Freestyle, 1650).with_time("18:14.40")
    }

    #[test]
    fn test_default_time() {
        let race = Race::new(Gender::Womens, Course::Lcm, Stroke::Butterfly, 200);
        assert_eq!(race.time, "00:00.00");
        assert!(race.is_valid());
    }

    #[test]
    fn test_descriptions() {
        let race = mile();
        assert_eq!(race.event_description(), "M 1650Y Freestyle");
        assert_eq!(race.result_value(), "M 1650Y Freestyle - 18:14.40");
        assert_eq!(race.to_string(), race.result_value());

        let im = Race::new(Gender::Womens, Course::Scm, Stroke::IndividualMedley, 100);
        assert_eq!(im.event_description(), "W 100S Individual Medley");
    }

    #[test]
    fn test_validate_bad_time() {
        let race = mile().with_time("18-14-40");
        let err = race.validate().unwrap_err();
        assert_eq!(err.error_code(), "INVALID_RACE");
        assert!(err.to_string().contains("not a valid time representation"));
        assert!(!race.is_valid());
    }

    #[test]
    fn test_validate_illegal_event() {
        let race = Race::new(Gender::Mens, Course::Scm, Stroke::Freestyle, 1650);
        match race.validate() {
            Err(ConvertError::InvalidRace { event, reason }) => {
                assert_eq!(event, "M 1650S Freestyle");
                assert_eq!(reason, "M 1650S Freestyle is not a valid event");
            }
            other => panic!("expected InvalidRace, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_unknown_distance() {
        let race = Race::new(Gender::Mens, Course::Scy, Stroke::Freestyle, 75);
        let err = race.validate().unwrap_err();
        assert!(err.to_string().contains("75 is not a valid race distance"));
    }

    #[test]
    fn test_validity_boundaries() {
        let im = |course| Race::new(Gender::Mens, course, Stroke::IndividualMedley, 100);
        assert!(im(Course::Scy).is_valid());
        assert!(im(Course::Scm).is_valid());
        assert!(!im(Course::Lcm).is_valid());

        let mile = |course| Race::new(Gender::Womens, course, Stroke::Freestyle, 1650);
        assert!(mile(Course::Scy).is_valid());
        assert!(!mile(Course::Scm).is_valid());
        assert!(!mile(Course::Lcm).is_valid());
    }

    #[test]
    fn test_normalized_time() {
        let race = mile().with_time("59.9");
        assert_eq!(race.normalized_time().unwrap(), "00:59.90");
        assert!((race.seconds().unwrap() - 59.9).abs() < 1e-9);
    }

    #[test]
    fn test_derive_rejects_negative() {
        let err = mile().derive(Course::Scm, 1500, -0.5).unwrap_err();
        assert_eq!(err, ConvertError::TimeOutOfRange { seconds: -0.5 });
    }

    #[test]
    fn test_serialization() {
        let race = mile();
        let json = serde_json::to_string(&race).unwrap();
        assert!(json.contains("\"course\":\"SCY\""));
        let roundtrip: Race = serde_json::from_str(&json).unwrap();
        assert_eq!(race, roundtrip);

        let no_time: Race =
            serde_json::from_str(r#"{"gender":"W","course":"LCM","stroke":"Butterfly","distance":100}"#).unwrap();
        assert_eq!(no_time.time, ZERO_TIME);
    }
}
