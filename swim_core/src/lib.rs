//! # swim_core - Swim Time Conversion Engine
//!
//! `swim_core` converts competitive swimming times between pool courses
//! (short course yards, short course meters, long course meters) using the
//! conventions of USA Swimming, NFHS and NCAA. All inputs and outputs are
//! JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Every conversion takes a race and returns a new one
//! - **JSON-First**: All domain types implement Serialize/Deserialize
//! - **Rich Errors**: A failed conversion says why, see [`errors`]
//! - **Shared Tables**: Factor tables are built once and never mutated
//!
//! ## Quick Start
//!
//! ```rust
//! use swim_core::{Course, Gender, Race, Stroke};
//!
//! let race = Race::new(Gender::Womens, Course::Scm, Stroke::Backstroke, 100).with_time("01:00.00");
//! let long_course = race.convert_usas(Course::Lcm).unwrap();
//! assert_eq!(long_course.result_value(), "W 100L Backstroke - 01:01.20");
//! ```
//!
//! ## Modules
//!
//! - [`event`] - Gender, course, stroke, and event legality
//! - [`race`] - The race value type
//! - [`time`] - `MM:SS.HH` parsing and formatting
//! - [`catalog`] - NFHS factors and USAS increments
//! - [`conversions`] - Course conversion algorithms per organization
//! - [`errors`] - Structured error types

pub mod catalog;
pub mod conversions;
pub mod errors;
pub mod event;
pub mod race;
pub mod time;

// Re-export commonly used types at crate root for convenience
pub use catalog::EventCatalog;
pub use conversions::{convert_race, ConversionOutcome, Organization};
pub use errors::{ConvertError, ConvertResult};
pub use event::{Course, Gender, Stroke};
pub use race::Race;
pub use time::{format_time, parse_time};
