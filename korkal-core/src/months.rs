//! Danish month-name lookup.

use crate::error::ParseError;

/// The twelve Danish month names, in calendar order.
const MONTHS: [&str; 12] = [
    "januar",
    "februar",
    "marts",
    "april",
    "maj",
    "juni",
    "juli",
    "august",
    "september",
    "oktober",
    "november",
    "december",
];

/// Resolve a Danish month name to its 1-12 number.
///
/// Matching is case-insensitive; anything outside the fixed table is an
/// `UnknownMonth` error.
pub fn month_number(name: &str) -> Result<u32, ParseError> {
    let lower = name.to_lowercase();

    MONTHS
        .iter()
        .position(|month| *month == lower)
        .map(|index| index as u32 + 1)
        .ok_or_else(|| ParseError::UnknownMonth(name.to_string()))
}
