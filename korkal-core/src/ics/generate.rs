//! ICS document generation.

use chrono::{DateTime, Utc};
use icalendar::{Calendar, Component, EventLike, Property};
use indoc::indoc;

use crate::constants::{PRODID, TZID};
use crate::error::KorkalResult;
use crate::event::EventRecord;
use crate::uid::{OccurrenceCounters, event_uid};

/// Europe/Copenhagen with recurring-yearly DST rules.
const VTIMEZONE: &str = indoc! {"
    BEGIN:VTIMEZONE
    TZID:Europe/Copenhagen
    BEGIN:DAYLIGHT
    TZNAME:CEST
    TZOFFSETFROM:+0100
    TZOFFSETTO:+0200
    DTSTART:19700101T000000
    RRULE:FREQ=YEARLY;BYMONTH=3;BYDAY=-1SU
    END:DAYLIGHT
    BEGIN:STANDARD
    TZNAME:CET
    TZOFFSETFROM:+0200
    TZOFFSETTO:+0100
    DTSTART:19700101T000000
    RRULE:FREQ=YEARLY;BYMONTH=10;BYDAY=-1SU
    END:STANDARD
    END:VTIMEZONE
"};

/// Assemble the complete calendar document for one run.
///
/// Events keep their input order. Cancelled events are emitted with an
/// explicit cancellation method and status, never omitted.
pub fn assemble_calendar(events: &[EventRecord]) -> KorkalResult<String> {
    let mut cal = Calendar::new();

    let dtstamp = Utc::now().format("%Y%m%dT%H%M%SZ").to_string();
    let mut counters = OccurrenceCounters::new();

    for event in events {
        let mut ics_event = icalendar::Event::new();

        ics_event.uid(&event_uid(&event.start, &mut counters).to_string());
        ics_event.add_property("DTSTAMP", &dtstamp);
        ics_event.add_property("NAME", &event.title);
        ics_event.summary(&event.title);
        ics_event.description(&event.title);

        add_local_datetime(&mut ics_event, "DTSTART", &event.start);
        add_local_datetime(&mut ics_event, "DTEND", &event.end);

        if event.cancelled {
            ics_event.add_property("METHOD", "CANCEL");
            ics_event.add_property("STATUS", "CANCELLED");
        }

        cal.push(ics_event.done());
    }

    let cal = cal.done();

    Ok(finalize_ics(&cal.to_string()))
}

/// Add a wall-clock datetime property carrying the fixed TZID parameter.
fn add_local_datetime(
    ics_event: &mut icalendar::Event,
    name: &str,
    instant: &DateTime<chrono_tz::Tz>,
) {
    let mut prop = Property::new(name, instant.format("%Y%m%dT%H%M%S").to_string());
    prop.add_parameter("TZID", TZID);
    ics_event.append_property(prop);
}

/// Post-process the icalendar crate's output into the published document:
/// replace its PRODID, drop CALSCALE:GREGORIAN, and splice the timezone
/// definition in ahead of the first component.
fn finalize_ics(ics: &str) -> String {
    let mut result = String::with_capacity(ics.len() + VTIMEZONE.len());
    let mut timezone_inserted = false;

    for line in ics.lines() {
        if line.starts_with("PRODID:") {
            result.push_str("PRODID:");
            result.push_str(PRODID);
            result.push_str("\r\n");
            continue;
        }

        if line == "CALSCALE:GREGORIAN" {
            continue;
        }

        if !timezone_inserted && (line == "BEGIN:VEVENT" || line == "END:VCALENDAR") {
            for tz_line in VTIMEZONE.lines() {
                result.push_str(tz_line);
                result.push_str("\r\n");
            }
            timezone_inserted = true;
        }

        result.push_str(line);
        result.push_str("\r\n");
    }

    result
}
