//! # Short Course Conversion
//!
//! Yards ↔ short course meters. Sprint and middle distances keep their
//! distance and scale by 1.11. Distance races swap to their counterpart in
//! the other unit:
//!
//! | From  | To    | Factor |
//! |-------|-------|--------|
//! | 400 free (m) | 500 (y) | 0.8925 |
//! | 500 (y)      | 400 (m) | 0.8925 |
//! | 800 (m)      | 1000 (y)| 0.8925 |
//! | 1000 (y)     | 800 (m) | 0.8925 |
//! | 1500 (m)     | 1650 (y)| 1.02   |
//! | 1650 (y)     | 1500 (m)| 1.02   |
//!
//! Meters → yards divides by the factor, yards → meters multiplies.

use crate::errors::{ConvertError, ConvertResult};
use crate::event::{Course, Stroke};
use crate::race::Race;

/// Yards/meters factor for 50-200 and the 400 IM
pub const SHORT_COURSE_FACTOR: f64 = 1.11;

/// 400/500 and 800/1000 pairs
pub const DISTANCE_FACTOR: f64 = 0.8925;

/// 1500/1650 pair
pub const MILE_FACTOR: f64 = 1.02;

/// Distance in the other short course, and the factor to apply
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CourseRemap {
    pub distance: u32,
    pub factor: f64,
}

impl CourseRemap {
    fn same(distance: u32, factor: f64) -> Self {
        Self { distance, factor }
    }
}

/// Look up the remap for an event. Stroke only matters at 400.
pub fn remap(stroke: Stroke, distance: u32) -> ConvertResult<CourseRemap> {
    let remap = match (distance, stroke) {
        (50 | 100 | 200, _) => CourseRemap::same(distance, SHORT_COURSE_FACTOR),
        (400, Stroke::Freestyle) => CourseRemap::same(500, DISTANCE_FACTOR),
        (400, Stroke::IndividualMedley) => CourseRemap::same(400, SHORT_COURSE_FACTOR),
        (800, _) => CourseRemap::same(1000, DISTANCE_FACTOR),
        (500, _) => CourseRemap::same(400, DISTANCE_FACTOR),
        (1000, _) => CourseRemap::same(800, DISTANCE_FACTOR),
        (1500, _) => CourseRemap::same(1650, MILE_FACTOR),
        (1650, _) => CourseRemap::same(1500, MILE_FACTOR),
        _ => return Err(ConvertError::InvalidDistance { distance }),
    };
    Ok(remap)
}

/// Convert between SCY and SCM. Long course on either side is rejected.
pub fn convert(race: &Race, target: Course) -> ConvertResult<Race> {
    let Some(opposite) = race.course.opposite_short() else {
        return Err(ConvertError::unsupported_conversion(race.course, target, "short course conversion"));
    };
    if target == Course::Lcm {
        return Err(ConvertError::unsupported_conversion(race.course, target, "short course conversion"));
    }
    if target == race.course {
        return Ok(race.clone());
    }

    let CourseRemap { distance, factor } = remap(race.stroke, race.distance)?;
    let seconds = race.seconds()?;
    let new_seconds = if race.course == Course::Scm {
        seconds / factor
    } else {
        seconds * factor
    };

    let converted = race.derive(opposite, distance, new_seconds)?;
    tracing::debug!(from = %race, to = %converted, factor, "short course conversion");
    Ok(converted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Gender;

    fn race(course: Course, stroke: Stroke, distance: u32, time: &str) -> Race {
        Race::new(Gender::Mens, course, stroke, distance).with_time(time)
    }

    #[test]
    fn test_sprint_yards_to_meters() {
        let result = convert(&race(Course::Scy, Stroke::Freestyle, 50, "00:20.00"), Course::Scm).unwrap();
        assert_eq!(result.time, "00:22.20");
        assert_eq!(result.distance, 50);
        assert_eq!(result.course, Course::Scm);
    }

    #[test]
    fn test_sprint_meters_to_yards() {
        let result = convert(&race(Course::Scm, Stroke::Freestyle, 50, "00:20.00"), Course::Scy).unwrap();
        assert_eq!(result.time, "00:18.02");
        assert_eq!(result.course, Course::Scy);
    }

    #[test]
    fn test_five_hundred_to_four_hundred() {
        let result = convert(&race(Course::Scy, Stroke::Freestyle, 500, "4:30.00"), Course::Scm).unwrap();
        assert_eq!(result.distance, 400);
        assert_eq!(result.time, "04:00.98");
    }

    #[test]
    fn test_eight_hundred_meters_to_thousand_yards() {
        let result = convert(&race(Course::Scm, Stroke::Freestyle, 800, "8:30.00"), Course::Scy).unwrap();
        assert_eq!(result.distance, 1000);
        assert_eq!(result.course, Course::Scy);
        assert_eq!(result.time, "09:31.43");
    }

    #[test]
    fn test_mile() {
        let result = convert(&race(Course::Scy, Stroke::Freestyle, 1650, "18:14.40"), Course::Scm).unwrap();
        assert_eq!(result.distance, 1500);
        assert_eq!(result.time, "18:36.29");
    }

    #[test]
    fn test_four_hundred_remaps() {
        assert_eq!(remap(Stroke::Freestyle, 400).unwrap(), CourseRemap::same(500, DISTANCE_FACTOR));
        assert_eq!(
            remap(Stroke::IndividualMedley, 400).unwrap(),
            CourseRemap::same(400, SHORT_COURSE_FACTOR)
        );
        assert_eq!(
            remap(Stroke::Backstroke, 400).unwrap_err(),
            ConvertError::InvalidDistance { distance: 400 }
        );
    }

    #[test]
    fn test_unknown_distance() {
        let err = convert(&race(Course::Scy, Stroke::Freestyle, 75, "45.00"), Course::Scm).unwrap_err();
        assert_eq!(err, ConvertError::InvalidDistance { distance: 75 });
    }

    #[test]
    fn test_same_course_is_identity() {
        let input = race(Course::Scm, Stroke::Butterfly, 100, "59.1");
        assert_eq!(convert(&input, Course::Scm).unwrap(), input);
    }

    #[test]
    fn test_rejects_long_course() {
        let err = convert(&race(Course::Scy, Stroke::Freestyle, 50, "20.00"), Course::Lcm).unwrap_err();
        assert_eq!(err.error_code(), "UNSUPPORTED_CONVERSION");
        let err = convert(&race(Course::Lcm, Stroke::Freestyle, 50, "20.00"), Course::Scy).unwrap_err();
        assert_eq!(err.error_code(), "UNSUPPORTED_CONVERSION");
        let err = convert(&race(Course::Lcm, Stroke::Freestyle, 50, "20.00"), Course::Lcm).unwrap_err();
        assert_eq!(err.error_code(), "UNSUPPORTED_CONVERSION");
    }
}
