//! Hour formatting for the SGU report.
//!
//! SGU expects hours with five decimal digits and a decimal comma. Values are
//! rounded up, never down, so that summed seconds are not lost to rounding.
//!
//! ## Examples
//!
//! - 3661 seconds → 1.016944… h → "1,01695"
//! - 5400 seconds → 1.5 h → "1,50000"
//!
//! ```rust
//! use toggl2sgu::libs::formatter::format_hours;
//!
//! assert_eq!(format_hours(3661.0 / 3600.0), "1,01695");
//! ```

/// Number of decimal digits written for hours.
pub const HOURS_PRECISION: usize = 5;

/// Rounds hours up to [`HOURS_PRECISION`] decimal places.
pub fn round_hours(hours: f64) -> f64 {
    let ratio = 10f64.powi(HOURS_PRECISION as i32);
    (hours * ratio).ceil() / ratio
}

/// Formats hours for the report: rounded up, fixed precision, decimal comma.
pub fn format_hours(hours: f64) -> String {
    format!("{:.*}", HOURS_PRECISION, round_hours(hours)).replacen('.', ",", 1)
}
