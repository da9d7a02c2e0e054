//! # Error Types
//!
//! Structured error types for swim_core. Every conversion returns one of
//! these instead of a bare failure marker, so a caller can tell "this event
//! does not exist" apart from "this course pair is not handled" or
//! "the time was typed wrong".
//!
//! ## Example
//!
//! ```rust
//! use swim_core::errors::{ConvertError, ConvertResult};
//!
//! fn require_positive(seconds: f64) -> ConvertResult<f64> {
//!     if seconds < 0.0 {
//!         return Err(ConvertError::TimeOutOfRange { seconds });
//!     }
//!     Ok(seconds)
//! }
//!
//! assert_eq!(require_positive(-1.0).unwrap_err().error_code(), "TIME_OUT_OF_RANGE");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::conversions::Organization;
use crate::event::Course;

/// Result type alias for swim_core operations
pub type ConvertResult<T> = Result<T, ConvertError>;

/// Structured error type for conversion operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum ConvertError {
    /// The race failed its own validity check (bad time or illegal event)
    #[error("Invalid race '{event}': {reason}")]
    InvalidRace { event: String, reason: String },

    /// A time string could not be read as a race time
    #[error("'{time}' is not a valid time representation, please enter as \"MM:SS.HH\"")]
    InvalidTime { time: String },

    /// The selected algorithm does not handle this pair of courses
    #[error("Unsupported conversion from {from} to {to} in {algorithm}")]
    UnsupportedConversion {
        from: Course,
        to: Course,
        algorithm: String,
    },

    /// The organization defines no conversion for this course
    #[error("{organization} does not have a conversion for {course} meets")]
    UnsupportedOrganizationCourse {
        organization: Organization,
        course: Course,
    },

    /// No catalog entry exists, or the event is not swum in the requested course
    #[error("{event} is not a valid {context} event")]
    InvalidEvent { event: String, context: String },

    /// The distance is not covered by the conversion's remap table
    #[error("Invalid distance: {distance}")]
    InvalidDistance { distance: u32 },

    /// A converted time fell below zero and cannot be rendered
    #[error("Converted time {seconds:.2}s is out of range")]
    TimeOutOfRange { seconds: f64 },

    /// A user-supplied value could not be parsed
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },
}

impl ConvertError {
    /// Create an InvalidRace error
    pub fn invalid_race(event: impl Into<String>, reason: impl Into<String>) -> Self {
        ConvertError::InvalidRace {
            event: event.into(),
            reason: reason.into(),
        }
    }

    /// Create an InvalidTime error
    pub fn invalid_time(time: impl Into<String>) -> Self {
        ConvertError::InvalidTime { time: time.into() }
    }

    /// Create an UnsupportedConversion error
    pub fn unsupported_conversion(from: Course, to: Course, algorithm: impl Into<String>) -> Self {
        ConvertError::UnsupportedConversion {
            from,
            to,
            algorithm: algorithm.into(),
        }
    }

    /// Create an InvalidEvent error
    pub fn invalid_event(event: impl Into<String>, context: impl Into<String>) -> Self {
        ConvertError::InvalidEvent {
            event: event.into(),
            context: context.into(),
        }
    }

    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        ConvertError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// True when the failure comes from the input itself rather than from a
    /// missing conversion rule.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            ConvertError::InvalidRace { .. }
                | ConvertError::InvalidTime { .. }
                | ConvertError::InvalidInput { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            ConvertError::InvalidRace { .. } => "INVALID_RACE",
            ConvertError::InvalidTime { .. } => "INVALID_TIME",
            ConvertError::UnsupportedConversion { .. } => "UNSUPPORTED_CONVERSION",
            ConvertError::UnsupportedOrganizationCourse { .. } => "UNSUPPORTED_ORGANIZATION_COURSE",
            ConvertError::InvalidEvent { .. } => "INVALID_EVENT",
            ConvertError::InvalidDistance { .. } => "INVALID_DISTANCE",
            ConvertError::TimeOutOfRange { .. } => "TIME_OUT_OF_RANGE",
            ConvertError::InvalidInput { .. } => "INVALID_INPUT",
        }
    }
}
