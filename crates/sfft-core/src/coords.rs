//! Textual coordinate validation.
//!
//! The dataset serves latitude/longitude as strings of wildly varying
//! quality: missing fields, empty strings, whitespace, literal `"NaN"`.
//! Everything funnels through [`parse_coordinate`] so the rest of the
//! pipeline only ever sees a finite `f64` or nothing.

/// Parses an optional coordinate string into a validated number.
///
/// Returns `None` for absence, empty/whitespace-only input, or anything
/// that does not parse as a finite number. Surrounding whitespace around
/// an otherwise valid number is trimmed and accepted.
///
/// `str::parse::<f64>` happily accepts `"NaN"` and `"inf"`; those are
/// rejected here — a coordinate that is not a finite number is invalid,
/// never a silently-wrong value.
#[must_use]
pub fn parse_coordinate(value: Option<&str>) -> Option<f64> {
    let trimmed = value?.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}
