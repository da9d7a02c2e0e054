//! # Events
//!
//! The building blocks of a swimming event: gender, pool course, stroke,
//! and the distances that are actually swum.
//!
//! An event is legal only for certain (course, stroke, distance)
//! combinations. For example the 1650 is a yards-only freestyle race and
//! there is no 100 IM in a long course pool. See [`is_legal_event`].
//!
//! ## Example
//!
//! ```rust
//! use swim_core::event::{is_legal_event, Course, Stroke};
//!
//! assert!(is_legal_event(Course::Scy, Stroke::Freestyle, 1650));
//! assert!(!is_legal_event(Course::Lcm, Stroke::IndividualMedley, 100));
//! ```

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{ConvertError, ConvertResult};

/// Every distance that appears in at least one legal event
pub const STANDARD_DISTANCES: [u32; 9] = [50, 100, 200, 400, 500, 800, 1000, 1500, 1650];

/// Competitor gender
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "M")]
    Mens,
    #[serde(rename = "W")]
    Womens,
}

impl Gender {
    /// All gender variants for UI selection
    pub const ALL: [Gender; 2] = [Gender::Mens, Gender::Womens];

    /// Single letter code used in event descriptions
    pub fn code(&self) -> &'static str {
        match self {
            Gender::Mens => "M",
            Gender::Womens => "W",
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Gender::Mens => "Men",
            Gender::Womens => "Women",
        }
    }

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> ConvertResult<Self> {
        match s.trim().to_uppercase().as_str() {
            "M" | "MEN" | "MENS" | "MEN'S" | "MALE" | "BOYS" => Ok(Gender::Mens),
            "W" | "F" | "WOMEN" | "WOMENS" | "WOMEN'S" | "FEMALE" | "GIRLS" => Ok(Gender::Womens),
            _ => Err(ConvertError::invalid_input("gender", s, "No gender specified")),
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for Gender {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Gender::from_str_flexible(s)
    }
}

/// Pool course
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Course {
    /// Short course yards (25 yd pool)
    #[serde(rename = "SCY")]
    Scy,
    /// Short course meters (25 m pool)
    #[serde(rename = "SCM")]
    Scm,
    /// Long course meters (50 m pool)
    #[serde(rename = "LCM")]
    Lcm,
}

impl Course {
    /// All course variants for UI selection
    pub const ALL: [Course; 3] = [Course::Scy, Course::Scm, Course::Lcm];

    /// Single letter code appended to the distance in event descriptions
    pub fn code(&self) -> &'static str {
        match self {
            Course::Scy => "Y",
            Course::Scm => "S",
            Course::Lcm => "L",
        }
    }

    /// Three letter abbreviation
    pub fn abbreviation(&self) -> &'static str {
        match self {
            Course::Scy => "SCY",
            Course::Scm => "SCM",
            Course::Lcm => "LCM",
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Course::Scy => "Short Course Yards",
            Course::Scm => "Short Course Meters",
            Course::Lcm => "Long Course Meters",
        }
    }

    pub fn is_short(&self) -> bool {
        matches!(self, Course::Scy | Course::Scm)
    }

    pub fn is_meters(&self) -> bool {
        matches!(self, Course::Scm | Course::Lcm)
    }

    /// The other short course (yards ↔ meters). `None` for long course.
    pub fn opposite_short(&self) -> Option<Course> {
        match self {
            Course::Scy => Some(Course::Scm),
            Course::Scm => Some(Course::Scy),
            Course::Lcm => None,
        }
    }

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> ConvertResult<Self> {
        match s.trim().to_uppercase().replace([' ', '_', '-'], "").as_str() {
            "Y" | "SCY" | "YARDS" | "SHORTCOURSEYARDS" => Ok(Course::Scy),
            "S" | "SCM" | "SHORTCOURSEMETERS" | "SHORTCOURSEMETRES" => Ok(Course::Scm),
            "L" | "LCM" | "LONGCOURSEMETERS" | "LONGCOURSEMETRES" => Ok(Course::Lcm),
            _ => Err(ConvertError::invalid_input("course", s, "Expected SCY, SCM or LCM")),
        }
    }
}

impl std::fmt::Display for Course {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.abbreviation())
    }
}

impl FromStr for Course {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Course::from_str_flexible(s)
    }
}

/// Swimming stroke
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Stroke {
    Freestyle,
    Backstroke,
    Breaststroke,
    Butterfly,
    #[serde(rename = "Individual Medley")]
    IndividualMedley,
}

impl Stroke {
    /// All stroke variants for UI selection
    pub const ALL: [Stroke; 5] = [
        Stroke::Freestyle,
        Stroke::Backstroke,
        Stroke::Breaststroke,
        Stroke::Butterfly,
        Stroke::IndividualMedley,
    ];

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Stroke::Freestyle => "Freestyle",
            Stroke::Backstroke => "Backstroke",
            Stroke::Breaststroke => "Breaststroke",
            Stroke::Butterfly => "Butterfly",
            Stroke::IndividualMedley => "Individual Medley",
        }
    }

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> ConvertResult<Self> {
        match s.trim().to_uppercase().replace([' ', '_', '-'], "").as_str() {
            "FREE" | "FREESTYLE" | "FR" => Ok(Stroke::Freestyle),
            "BACK" | "BACKSTROKE" | "BK" => Ok(Stroke::Backstroke),
            "BREAST" | "BREASTSTROKE" | "BR" => Ok(Stroke::Breaststroke),
            "FLY" | "BUTTERFLY" | "FL" => Ok(Stroke::Butterfly),
            "IM" | "INDIVIDUALMEDLEY" | "MEDLEY" => Ok(Stroke::IndividualMedley),
            _ => Err(ConvertError::invalid_input("stroke", s, "Unknown stroke")),
        }
    }
}

impl std::fmt::Display for Stroke {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for Stroke {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Stroke::from_str_flexible(s)
    }
}

/// Whether (course, stroke, distance) is a recognized competitive event.
///
/// | Distance          | Legal for                                  |
/// |-------------------|--------------------------------------------|
/// | 50                | every stroke except IM                     |
/// | 100               | every stroke, except IM in long course     |
/// | 200               | everything                                 |
/// | 400               | IM anywhere, freestyle in meters           |
/// | 800, 1500         | freestyle in meters (SCM or LCM)           |
/// | 500, 1000, 1650   | freestyle in yards                         |
pub fn is_legal_event(course: Course, stroke: Stroke, distance: u32) -> bool {
    match distance {
        50 => stroke != Stroke::IndividualMedley,
        100 => !(course == Course::Lcm && stroke == Stroke::IndividualMedley),
        200 => true,
        400 => stroke == Stroke::IndividualMedley || (stroke == Stroke::Freestyle && course.is_meters()),
        800 | 1500 => stroke == Stroke::Freestyle && course.is_meters(),
        500 | 1000 | 1650 => stroke == Stroke::Freestyle && course == Course::Scy,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifty_excludes_im() {
        for course in Course::ALL {
            for stroke in Stroke::ALL {
                assert_eq!(
                    is_legal_event(course, stroke, 50),
                    stroke != Stroke::IndividualMedley
                );
            }
        }
    }

    #[test]
    fn test_two_hundreds_always_legal() {
        for course in Course::ALL {
            for stroke in Stroke::ALL {
                assert!(is_legal_event(course, stroke, 200));
            }
        }
    }

    #[test]
    fn test_hundred_im_not_long_course() {
        assert!(is_legal_event(Course::Scy, Stroke::IndividualMedley, 100));
        assert!(is_legal_event(Course::Scm, Stroke::IndividualMedley, 100));
        assert!(!is_legal_event(Course::Lcm, Stroke::IndividualMedley, 100));
        assert!(is_legal_event(Course::Lcm, Stroke::Butterfly, 100));
    }

    #[test]
    fn test_four_hundreds() {
        for course in Course::ALL {
            assert!(is_legal_event(course, Stroke::IndividualMedley, 400));
        }
        assert!(!is_legal_event(Course::Scy, Stroke::Freestyle, 400));
        assert!(is_legal_event(Course::Scm, Stroke::Freestyle, 400));
        assert!(is_legal_event(Course::Lcm, Stroke::Freestyle, 400));
        assert!(!is_legal_event(Course::Lcm, Stroke::Backstroke, 400));
    }

    #[test]
    fn test_distance_freestyle_by_course() {
        for distance in [800, 1500] {
            assert!(!is_legal_event(Course::Scy, Stroke::Freestyle, distance));
            assert!(is_legal_event(Course::Scm, Stroke::Freestyle, distance));
            assert!(is_legal_event(Course::Lcm, Stroke::Freestyle, distance));
            assert!(!is_legal_event(Course::Lcm, Stroke::Butterfly, distance));
        }
        for distance in [500, 1000, 1650] {
            assert!(is_legal_event(Course::Scy, Stroke::Freestyle, distance));
            assert!(!is_legal_event(Course::Scm, Stroke::Freestyle, distance));
            assert!(!is_legal_event(Course::Lcm, Stroke::Freestyle, distance));
            assert!(!is_legal_event(Course::Scy, Stroke::IndividualMedley, distance));
        }
    }

    #[test]
    fn test_unknown_distances() {
        for distance in [0, 25, 75, 150, 300, 1600] {
            assert!(!is_legal_event(Course::Scy, Stroke::Freestyle, distance));
        }
        for distance in STANDARD_DISTANCES {
            assert!(Course::ALL.iter().any(|c| is_legal_event(*c, Stroke::Freestyle, distance)));
        }
    }

    #[test]
    fn test_flexible_parsing() {
        assert_eq!(Gender::from_str_flexible("w").unwrap(), Gender::Womens);
        assert_eq!("Men".parse::<Gender>().unwrap(), Gender::Mens);
        assert!(Gender::from_str_flexible("X").is_err());

        assert_eq!(Course::from_str_flexible("y").unwrap(), Course::Scy);
        assert_eq!(Course::from_str_flexible("long course meters").unwrap(), Course::Lcm);
        assert!(Course::from_str_flexible("LCY").is_err());

        assert_eq!(Stroke::from_str_flexible("Individual Medley").unwrap(), Stroke::IndividualMedley);
        assert_eq!("fly".parse::<Stroke>().unwrap(), Stroke::Butterfly);
        assert!(Stroke::from_str_flexible("sidestroke").is_err());
    }

    #[test]
    fn test_course_helpers() {
        assert_eq!(Course::Scy.opposite_short(), Some(Course::Scm));
        assert_eq!(Course::Scm.opposite_short(), Some(Course::Scy));
        assert_eq!(Course::Lcm.opposite_short(), None);
        assert!(Course::Lcm.is_meters() && !Course::Lcm.is_short());
    }

    #[test]
    fn test_serialization_codes() {
        assert_eq!(serde_json::to_string(&Course::Scm).unwrap(), "\"SCM\"");
        assert_eq!(serde_json::to_string(&Gender::Womens).unwrap(), "\"W\"");
        assert_eq!(
            serde_json::to_string(&Stroke::IndividualMedley).unwrap(),
            "\"Individual Medley\""
        );
    }
}
