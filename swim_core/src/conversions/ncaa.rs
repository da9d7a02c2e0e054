//! # NCAA
//!
//! NCAA converts between the two short courses with a single factor for
//! most events and dedicated factors for the freestyle distance pairs.
//! Converted times are truncated, not rounded, to the hundredth.
//!
//! | Event                      | Factor | Distance swap |
//! |----------------------------|--------|---------------|
//! | everything not below       | 0.906  | none          |
//! | 400 m / 500 y freestyle    | 1.153  | 400 ↔ 500     |
//! | 800 m / 1000 y freestyle   | 1.153  | 800 ↔ 1000    |
//! | 1500 m / 1650 y freestyle  | 1.013  | 1500 ↔ 1650   |
//!
//! Going to yards multiplies by the factor; going to meters divides.

use crate::errors::{ConvertError, ConvertResult};
use crate::event::{Course, Stroke};
use crate::race::Race;
use crate::time::truncate_to_hundredths;

use super::Organization;

pub const DEFAULT_FACTOR: f64 = 0.906;
pub const DISTANCE_FACTOR: f64 = 1.153;
pub const MILE_FACTOR: f64 = 1.013;

/// Freestyle distance pairs: (from, to, factor)
const FREESTYLE_REMAPS: [(u32, u32, f64); 6] = [
    (400, 500, DISTANCE_FACTOR),
    (500, 400, DISTANCE_FACTOR),
    (800, 1000, DISTANCE_FACTOR),
    (1000, 800, DISTANCE_FACTOR),
    (1500, 1650, MILE_FACTOR),
    (1650, 1500, MILE_FACTOR),
];

/// Distance in the other course and the factor to apply.
pub fn remap(stroke: Stroke, distance: u32) -> (u32, f64) {
    if stroke != Stroke::Freestyle {
        return (distance, DEFAULT_FACTOR);
    }
    FREESTYLE_REMAPS
        .iter()
        .find(|(from, _, _)| *from == distance)
        .map(|&(_, to, factor)| (to, factor))
        .unwrap_or((distance, DEFAULT_FACTOR))
}

/// Convert a race to `target` under NCAA rules.
pub fn convert(race: &Race, target: Course) -> ConvertResult<Race> {
    race.validate()?;
    for course in [race.course, target] {
        if !Organization::Ncaa.supports(course) {
            return Err(ConvertError::UnsupportedOrganizationCourse {
                organization: Organization::Ncaa,
                course,
            });
        }
    }
    if race.course == target {
        return Ok(race.clone());
    }

    let (distance, factor) = remap(race.stroke, race.distance);
    let seconds = race.seconds()?;
    let new_seconds = if target == Course::Scy {
        seconds * factor
    } else {
        seconds / factor
    };

    let converted = race.derive(target, distance, truncate_to_hundredths(new_seconds))?;
    tracing::debug!(from = %race, to = %converted, factor, "NCAA conversion");
    Ok(converted)
}
