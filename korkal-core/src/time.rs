//! Time-span parsing for "19:00 - 21:00" texts.
//!
//! 24-hour clock, no AM/PM. Hour and minute are not range-checked here;
//! an out-of-range value fails later at instant construction.

use crate::constants::RANGE_SEPARATOR;
use crate::error::ParseError;

/// One parsed wall-clock time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeParts {
    pub hour: u32,
    pub minute: u32,
}

/// Start and end times of one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRangeParts {
    pub start: TimeParts,
    pub end: TimeParts,
}

/// Parse a "H:MM - H:MM" span into its four integers.
pub fn parse_time(text: &str) -> Result<TimeRangeParts, ParseError> {
    let malformed = || ParseError::TimeFormat(text.to_string());

    let (start_text, end_text) = text.split_once(RANGE_SEPARATOR).ok_or_else(malformed)?;

    Ok(TimeRangeParts {
        start: parse_clock(start_text).ok_or_else(malformed)?,
        end: parse_clock(end_text).ok_or_else(malformed)?,
    })
}

fn parse_clock(text: &str) -> Option<TimeParts> {
    let (hour_text, minute_text) = text.split_once(':')?;

    Some(TimeParts {
        hour: hour_text.parse().ok()?,
        minute: minute_text.parse().ok()?,
    })
}
