//! # Long Course Conversion
//!
//! USA Swimming's long/short meters adjustment. A long course race is
//! slower than the same race in a 25 m pool by a per-stroke increment for
//! every 50 swum (fewer walls to push off). Yards are routed through short
//! course meters on the way in and out:
//!
//! ```text
//! SCY ──short_course──▶ SCM ──+increment──▶ LCM
//! LCM ──−increment──▶ SCM ──short_course──▶ SCY
//! ```

use crate::catalog::EventCatalog;
use crate::errors::{ConvertError, ConvertResult};
use crate::event::{Course, Stroke};
use crate::race::Race;

use super::short_course;

/// Convert to or from long course meters.
///
/// One side must be LCM. The 100 IM is rejected because it is not swum in
/// a long course pool.
pub fn convert(race: &Race, target: Course, catalog: &EventCatalog) -> ConvertResult<Race> {
    if target == race.course {
        return Ok(race.clone());
    }
    if target != Course::Lcm && race.course != Course::Lcm {
        return Err(ConvertError::unsupported_conversion(race.course, target, "long course conversion"));
    }
    if race.stroke == Stroke::IndividualMedley && race.distance == 100 {
        return Err(ConvertError::invalid_event(race.event_description(), "long course"));
    }

    let meters = if race.course == Course::Scy {
        short_course::convert(race, Course::Scm)?
    } else {
        race.clone()
    };

    let per_50 = catalog
        .usas_increment(meters.stroke)
        .ok_or_else(|| ConvertError::invalid_event(meters.event_description(), "USAS"))?;
    let increment = per_50 * f64::from(meters.distance) / 50.0;
    let seconds = meters.seconds()?;
    let (course, new_seconds) = if meters.course == Course::Lcm {
        (Course::Scm, seconds - increment)
    } else {
        (Course::Lcm, seconds + increment)
    };

    let converted = meters.derive(course, meters.distance, new_seconds)?;
    tracing::debug!(from = %meters, to = %converted, increment, "long course conversion");

    if target == Course::Scy {
        short_course::convert(&converted, target)
    } else {
        Ok(converted)
    }
}
