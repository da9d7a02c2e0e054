//! # Course Conversions
//!
//! Each governing body converts times between pools its own way. This
//! module holds the two generic primitives and the per-organization entry
//! points built on them:
//!
//! - [`short_course`] - yards ↔ short course meters by a fixed factor
//! - [`long_course`] - anything touching long course meters (USAS increments)
//! - [`usas`] - USA Swimming, all three courses
//! - [`nfhs`] - NFHS high school, short course only, catalog factors
//! - [`ncaa`] - NCAA, short course only, truncated to hundredths
//!
//! Every function follows the same shape: `convert(&Race, Course, ..) ->
//! ConvertResult<Race>`. The input race is never modified.
//!
//! ## Example
//!
//! ```rust
//! use swim_core::conversions::{convert_race, Organization};
//! use swim_core::{Course, Gender, Race, Stroke};
//!
//! let race = Race::new(Gender::Womens, Course::Scm, Stroke::Backstroke, 100).with_time("1:00.00");
//! let outcome = convert_race(Organization::Usas, &race, Course::Lcm).unwrap();
//! assert_eq!(outcome.result.time, "01:01.20");
//! assert!(outcome.result_is_valid);
//! ```

pub mod long_course;
pub mod ncaa;
pub mod nfhs;
pub mod short_course;
pub mod usas;

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::catalog::EventCatalog;
use crate::errors::{ConvertError, ConvertResult};
use crate::event::Course;
use crate::race::Race;

/// Governing body whose conversion convention is applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Organization {
    #[serde(rename = "USAS")]
    Usas,
    #[serde(rename = "NFHS")]
    Nfhs,
    #[serde(rename = "NCAA")]
    Ncaa,
}

impl Organization {
    /// All organization variants for UI selection
    pub const ALL: [Organization; 3] = [Organization::Usas, Organization::Nfhs, Organization::Ncaa];

    pub fn code(&self) -> &'static str {
        match self {
            Organization::Usas => "USAS",
            Organization::Nfhs => "NFHS",
            Organization::Ncaa => "NCAA",
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Organization::Usas => "USA Swimming",
            Organization::Nfhs => "National Federation of State High School Associations",
            Organization::Ncaa => "National Collegiate Athletic Association",
        }
    }

    /// Whether this organization converts to and from the course
    pub fn supports(&self, course: Course) -> bool {
        match self {
            Organization::Usas => true,
            Organization::Nfhs | Organization::Ncaa => course.is_short(),
        }
    }

    /// Convert with the shared standard catalog
    pub fn convert(&self, race: &Race, target: Course) -> ConvertResult<Race> {
        self.convert_with(race, target, EventCatalog::global())
    }

    /// Convert with an explicit catalog
    pub fn convert_with(&self, race: &Race, target: Course, catalog: &EventCatalog) -> ConvertResult<Race> {
        match self {
            Organization::Usas => usas::convert(race, target, catalog),
            Organization::Nfhs => nfhs::convert(race, target, catalog),
            Organization::Ncaa => ncaa::convert(race, target),
        }
    }

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> ConvertResult<Self> {
        match s.trim().to_uppercase().replace([' ', '_', '-'], "").as_str() {
            "USAS" | "USA" | "USASWIMMING" => Ok(Organization::Usas),
            "NFHS" | "HS" | "HIGHSCHOOL" => Ok(Organization::Nfhs),
            "NCAA" | "COLLEGE" => Ok(Organization::Ncaa),
            _ => Err(ConvertError::invalid_input(
                "organization",
                s,
                format!("Invalid organization: {}", s),
            )),
        }
    }
}

impl std::fmt::Display for Organization {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Organization {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Organization::from_str_flexible(s)
    }
}

/// A finished conversion, ready for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionOutcome {
    pub organization: Organization,
    /// The input race with its time in canonical form
    pub source: Race,
    pub result: Race,
    /// Whether the converted race is itself a legal event
    pub result_is_valid: bool,
}

/// Validate, convert, and re-check the result.
pub fn convert_race(organization: Organization, race: &Race, target: Course) -> ConvertResult<ConversionOutcome> {
    let result = organization.convert(race, target)?;
    let source = Race {
        time: race.normalized_time()?,
        ..race.clone()
    };
    let result_is_valid = result.is_valid();
    if !result_is_valid {
        tracing::warn!(%organization, result = %result, "conversion produced an invalid event");
    }
    Ok(ConversionOutcome {
        organization,
        source,
        result,
        result_is_valid,
    })
}
