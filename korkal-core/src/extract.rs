//! Event extraction from the rendered calendar page.
//!
//! Each `.calendar-event-title` fragment carries three pieces in order:
//! the title text, a nested date text, and a nested time text. Fragments
//! with malformed text are skipped; a date/time combination that denotes no
//! real instant in the civil timezone aborts the whole run.

use chrono::{DateTime, LocalResult, TimeZone};
use chrono_tz::Tz;
use scraper::{ElementRef, Html, Selector};

use crate::constants::{CUTOFF_YEAR, EVENT_SELECTOR, TIMEZONE};
use crate::date::{DateParts, parse_date};
use crate::error::{KorkalError, KorkalResult};
use crate::event::EventRecord;
use crate::time::{TimeParts, parse_time};

/// Extract all event records from the page markup, in encounter order.
pub fn extract_events(html: &str) -> KorkalResult<Vec<EventRecord>> {
    let document = Html::parse_document(html);
    let selector = Selector::parse(EVENT_SELECTOR)
        .map_err(|e| KorkalError::Markup(format!("Invalid selector: {e}")))?;

    let mut result = Vec::new();

    for element in document.select(&selector) {
        let children: Vec<_> = element.children().collect();
        if children.len() < 3 {
            log::warn!("Skipping fragment with {} child nodes", children.len());
            continue;
        }

        let title = match children[0].value().as_text() {
            Some(text) if !text.is_empty() => &**text,
            _ => {
                log::warn!("Skipping fragment without a title text");
                continue;
            }
        };

        let Some(date_text) = ElementRef::wrap(children[1]).and_then(first_inner_text) else {
            log::warn!("Skipping '{title}': no date text");
            continue;
        };

        let date_range = match parse_date(date_text) {
            Ok(parts) => parts,
            Err(err) => {
                log::warn!("Skipping '{title}': {err}");
                continue;
            }
        };

        if date_range.start.year < CUTOFF_YEAR {
            log::debug!(
                "Dropping stale event '{title}' from {}",
                date_range.start.year
            );
            continue;
        }

        let Some(time_text) = ElementRef::wrap(children[2]).and_then(first_inner_text) else {
            log::warn!("Skipping '{title}': no time text");
            continue;
        };

        let time_range = match parse_time(time_text) {
            Ok(parts) => parts,
            Err(err) => {
                log::warn!("Skipping '{title}': {err}");
                continue;
            }
        };

        let start = local_instant(&date_range.start, &time_range.start)?;
        let end = local_instant(&date_range.end, &time_range.end)?;

        result.push(EventRecord::new(title.to_string(), start, end));
    }

    Ok(result)
}

/// First text inside a nested element (the page wraps date and time texts
/// one element deep).
fn first_inner_text(element: ElementRef<'_>) -> Option<&str> {
    let text = element.text().next()?;
    (!text.is_empty()).then_some(text)
}

/// Bind parsed date and time parts to the civil timezone.
///
/// Ambiguous fall-back wall times resolve to the later, standard-time
/// instant. A combination that does not exist (day 32, hour 24, the
/// spring-forward gap) is a fatal `InvalidInstant`.
fn local_instant(date: &DateParts, time: &TimeParts) -> KorkalResult<DateTime<Tz>> {
    let invalid = || {
        KorkalError::InvalidInstant(format!(
            "{:04}-{:02}-{:02} {:02}:{:02} does not exist in {}",
            date.year, date.month, date.day, time.hour, time.minute, TIMEZONE
        ))
    };

    let day = u32::try_from(date.day).map_err(|_| invalid())?;

    match TIMEZONE.with_ymd_and_hms(date.year, date.month, day, time.hour, time.minute, 0) {
        LocalResult::Single(instant) => Ok(instant),
        LocalResult::Ambiguous(_, standard) => Ok(standard),
        LocalResult::None => Err(invalid()),
    }
}
