//! # NFHS (High School)
//!
//! NFHS publishes one factor per event and gender, short course only.
//! SCM → SCY multiplies by the factor and SCY → SCM divides. The 400
//! meters and 500 yards freestyle are treated as the same event.

use crate::catalog::EventCatalog;
use crate::errors::{ConvertError, ConvertResult};
use crate::event::Course;
use crate::race::Race;

use super::Organization;

/// NFHS pairs the 400 m and 500 y freestyle; other distances carry over.
pub fn counterpart_distance(distance: u32) -> u32 {
    match distance {
        500 => 400,
        400 => 500,
        other => other,
    }
}

/// Convert a race to `target` under NFHS rules.
pub fn convert(race: &Race, target: Course, catalog: &EventCatalog) -> ConvertResult<Race> {
    race.validate()?;
    for course in [race.course, target] {
        if !Organization::Nfhs.supports(course) {
            return Err(ConvertError::UnsupportedOrganizationCourse {
                organization: Organization::Nfhs,
                course,
            });
        }
    }

    let factor = catalog
        .nfhs_factor(race.gender, race.stroke, race.distance)
        .ok_or_else(|| ConvertError::invalid_event(race.event_description(), "NFHS"))?;
    if race.course == target {
        return Ok(race.clone());
    }

    let seconds = race.seconds()?;
    let new_seconds = if race.course == Course::Scm {
        seconds * factor
    } else {
        seconds / factor
    };

    let converted = race.derive(target, counterpart_distance(race.distance), new_seconds)?;
    tracing::debug!(from = %race, to = %converted, factor, "NFHS conversion");
    Ok(converted)
}
