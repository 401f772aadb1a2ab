//! Extracted event records.

use chrono::DateTime;
use chrono_tz::Tz;
use serde::Serialize;

use crate::constants::CANCEL_KEYWORD;

/// Local wall-clock format used by the plain-record output.
const LOCAL_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// One extracted calendar occurrence.
///
/// `start`/`end` are wall-clock instants in the fixed civil timezone. The
/// source markup is trusted for ordering: `start <= end` is not enforced
/// and never corrected.
#[derive(Debug, Clone, PartialEq)]
pub struct EventRecord {
    pub title: String,
    pub start: DateTime<Tz>,
    pub end: DateTime<Tz>,
    pub cancelled: bool,
}

impl EventRecord {
    /// Build a record, deriving the cancellation flag from the title.
    pub fn new(title: String, start: DateTime<Tz>, end: DateTime<Tz>) -> Self {
        let cancelled = is_cancelled(&title);

        EventRecord {
            title,
            start,
            end,
            cancelled,
        }
    }
}

/// Case-insensitive "aflyst" substring test on an event title.
pub fn is_cancelled(title: &str) -> bool {
    title.to_lowercase().contains(CANCEL_KEYWORD)
}

/// Flat record for the secondary output mode: local wall-clock text with
/// no UTC offset, one per extracted event.
#[derive(Debug, Clone, Serialize)]
pub struct PlainEvent {
    pub title: String,
    pub start: String,
    pub end: String,
    pub cancelled: bool,
}

impl From<&EventRecord> for PlainEvent {
    fn from(event: &EventRecord) -> Self {
        PlainEvent {
            title: event.title.clone(),
            start: event.start.naive_local().format(LOCAL_FORMAT).to_string(),
            end: event.end.naive_local().format(LOCAL_FORMAT).to_string(),
            cancelled: event.cancelled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::TIMEZONE;
    use chrono::TimeZone;

    #[test]
    fn test_cancellation_is_case_insensitive_substring() {
        assert!(is_cancelled("Øveaften AFLYST"));
        assert!(is_cancelled("aflyst"));
        assert!(is_cancelled("Koncert (Aflyst!)"));
        assert!(!is_cancelled("Forårskoncert"));
    }

    #[test]
    fn test_new_derives_cancelled_from_title() {
        let start = TIMEZONE.with_ymd_and_hms(2024, 1, 10, 19, 30, 0).unwrap();
        let end = TIMEZONE.with_ymd_and_hms(2024, 1, 10, 21, 30, 0).unwrap();

        let event = EventRecord::new("Øveaften AFLYST".to_string(), start, end);
        assert!(event.cancelled);

        let event = EventRecord::new("Øveaften".to_string(), start, end);
        assert!(!event.cancelled);
    }

    #[test]
    fn test_plain_event_uses_local_time_without_offset() {
        let start = TIMEZONE.with_ymd_and_hms(2023, 3, 5, 19, 0, 0).unwrap();
        let end = TIMEZONE.with_ymd_and_hms(2023, 3, 5, 21, 0, 0).unwrap();
        let event = EventRecord::new("Forårskoncert".to_string(), start, end);

        let plain = PlainEvent::from(&event);
        assert_eq!(plain.start, "2023-03-05T19:00:00");
        assert_eq!(plain.end, "2023-03-05T21:00:00");
        assert!(!plain.cancelled);
    }

    #[test]
    fn test_plain_event_serializes_to_flat_json() {
        let start = TIMEZONE.with_ymd_and_hms(2023, 3, 5, 19, 0, 0).unwrap();
        let end = TIMEZONE.with_ymd_and_hms(2023, 3, 5, 21, 0, 0).unwrap();
        let event = EventRecord::new("Forårskoncert".to_string(), start, end);

        let json = serde_json::to_value(PlainEvent::from(&event)).unwrap();
        assert_eq!(json["title"], "Forårskoncert");
        assert_eq!(json["start"], "2023-03-05T19:00:00");
        assert_eq!(json["cancelled"], false);
    }
}
