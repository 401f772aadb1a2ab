//! Fixed values shared across the pipeline.

use chrono_tz::Tz;

/// Civil timezone every wall-clock text on the page is interpreted in.
pub const TIMEZONE: Tz = chrono_tz::Europe::Copenhagen;

/// TZID emitted on DTSTART/DTEND properties.
pub const TZID: &str = "Europe/Copenhagen";

/// Events whose parsed start year is earlier than this are dropped.
pub const CUTOFF_YEAR: i32 = 2023;

/// Case-insensitive title substring marking a cancelled event.
pub const CANCEL_KEYWORD: &str = "aflyst";

/// Class selector matching candidate event fragments on the calendar page.
pub const EVENT_SELECTOR: &str = ".calendar-event-title";

/// Separator between the two halves of a date or time range.
pub const RANGE_SEPARATOR: &str = " - ";

/// PRODID of the generated calendar document.
pub const PRODID: &str = "-//grundfoskoret-calendar//grundfoskoret.dk//";
