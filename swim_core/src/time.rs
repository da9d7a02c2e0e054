//! # Race Time Codec
//!
//! Converts between the textual `MM:SS.HH` race time and a number of seconds.
//!
//! Parsing treats the colon as a separator to drop: `"18:14.40"` is read as
//! the number `1814.40`, whose hundreds are minutes and whose remainder is
//! seconds with hundredths. Times without a colon (`"59.99"`) are plain
//! seconds, and `"125.3"` reads as one minute 25.3 seconds.
//!
//! ## Example
//!
//! ```rust
//! use swim_core::time::{format_time, parse_time};
//!
//! let seconds = parse_time("18:14.40").unwrap();
//! assert!((seconds - 1094.40).abs() < 1e-9);
//! assert_eq!(format_time(seconds), "18:14.40");
//! ```

use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::{ConvertError, ConvertResult};

/// Canonical zero time
pub const ZERO_TIME: &str = "00:00.00";

/// Digits, then optionally `:SS`, then optionally a fractional part.
static TIME_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d+(:\d{2})?(\.\d*)?$").expect("time pattern is a valid regex")
});

/// Parse a race time into seconds.
///
/// Accepts `MM:SS.HH`, `M:SS`, `SS.HH` and plain digit strings. Surrounding
/// whitespace is ignored.
pub fn parse_time(text: &str) -> ConvertResult<f64> {
    let trimmed = text.trim();
    if !TIME_PATTERN.is_match(trimmed) {
        return Err(ConvertError::invalid_time(text));
    }

    let number: f64 = trimmed
        .replacen(':', "", 1)
        .parse()
        .map_err(|_| ConvertError::invalid_time(text))?;
    if !number.is_finite() {
        return Err(ConvertError::invalid_time(text));
    }

    let minutes = (number / 100.0).floor();
    let remainder = number - minutes * 100.0;
    let seconds = minutes * 60.0 + remainder;
    tracing::trace!(time = text, seconds, "parsed race time");
    Ok(seconds)
}

/// Format seconds as `MM:SS.HH`.
///
/// The value is rounded to the nearest hundredth before it is split, so
/// `59.996` renders as `01:00.00` rather than `00:59.100`. Negative values
/// render as [`ZERO_TIME`]. Minutes widen past two digits when needed.
pub fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() || seconds <= 0.0 {
        return ZERO_TIME.to_string();
    }

    let total_hundredths = (seconds * 100.0).round() as u64;
    let minutes = total_hundredths / 6000;
    let whole_seconds = (total_hundredths % 6000) / 100;
    let hundredths = total_hundredths % 100;
    format!("{:02}:{:02}.{:02}", minutes, whole_seconds, hundredths)
}

/// Drop everything past the hundredths digit.
///
/// A tiny tolerance keeps products like `960 × 1.013` (which lands on
/// `972.4799999…` in binary) from losing a hundredth they actually have.
pub fn truncate_to_hundredths(seconds: f64) -> f64 {
    (seconds * 100.0 + 1e-7).floor() / 100.0
}

/// Re-render a time string in canonical form (`"59.9"` → `"00:59.90"`).
pub fn normalize_time(text: &str) -> ConvertResult<String> {
    parse_time(text).map(format_time)
}
