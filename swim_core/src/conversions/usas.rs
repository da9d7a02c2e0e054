//! # USA Swimming
//!
//! USAS converts between all three courses. Short course pairs use the
//! fixed yards/meters factors; anything involving long course goes through
//! the meters increment.

use crate::catalog::EventCatalog;
use crate::errors::ConvertResult;
use crate::event::Course;
use crate::race::Race;

use super::{long_course, short_course};

/// Convert a race to `target` under USA Swimming rules.
pub fn convert(race: &Race, target: Course, catalog: &EventCatalog) -> ConvertResult<Race> {
    race.validate()?;
    if race.course == target {
        return Ok(race.clone());
    }

    if race.course == Course::Lcm || target == Course::Lcm {
        long_course::convert(race, target, catalog)
    } else {
        short_course::convert(race, target)
    }
}
