//! Date-text parsing.
//!
//! The calendar page renders dates as "Søndag d. 5. marts 2023", optionally
//! as a range joined by " - ". Values are kept as plain integers here:
//! instant construction in the extractor is the validation boundary, so a
//! nonsense day like 0 or 32 passes through unchecked.

use crate::constants::RANGE_SEPARATOR;
use crate::error::ParseError;
use crate::months::month_number;

/// Marker preceding the day number; anything before it is a weekday name.
const DAY_MARKER: &str = "d. ";

/// One parsed calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateParts {
    pub day: i32,
    pub month: u32,
    pub year: i32,
}

/// Start and end dates of one event. Equal for single-day events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRangeParts {
    pub start: DateParts,
    pub end: DateParts,
}

/// Parse a date text, either a single date ("Søndag d. 5. marts 2023") or a
/// range ("Fredag d. 3. maj 2024 - Søndag d. 5. maj 2024").
///
/// A single date applies to both the start and end roles. A range where
/// either half fails to parse is a whole-fragment failure; nothing is
/// guessed from the half that did parse.
pub fn parse_date(text: &str) -> Result<DateRangeParts, ParseError> {
    match text.split_once(RANGE_SEPARATOR) {
        Some((start_text, end_text)) => Ok(DateRangeParts {
            start: parse_single_date(start_text)?,
            end: parse_single_date(end_text)?,
        }),
        None => {
            let date = parse_single_date(text)?;
            Ok(DateRangeParts {
                start: date,
                end: date,
            })
        }
    }
}

/// Parse one "… d. 5. marts 2023" date.
fn parse_single_date(text: &str) -> Result<DateParts, ParseError> {
    let malformed = || ParseError::DateFormat(text.to_string());

    // Everything before the marker is the weekday name, if present.
    let (_, rest) = text.split_once(DAY_MARKER).ok_or_else(malformed)?;

    let tokens: Vec<&str> = rest.split_whitespace().collect();
    let (day_text, month_name, year_text) = match tokens.as_slice() {
        [day, month, year] => (*day, *month, *year),
        _ => return Err(malformed()),
    };

    let day = day_text
        .trim_end_matches('.')
        .parse()
        .map_err(|_| malformed())?;
    let month = month_number(month_name)?;
    let year = year_text.parse().map_err(|_| malformed())?;

    Ok(DateParts { day, month, year })
}
