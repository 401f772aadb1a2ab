//! Core extraction and assembly for the Grundfos choir calendar.
//!
//! The pipeline is strictly leaf-to-root: page markup goes in, the
//! extractor produces `EventRecord`s in encounter order, and the assembler
//! turns them into one iCalendar document. All I/O (fetching the page,
//! writing the file) lives in the CLI crate.

pub mod constants;
pub mod date;
pub mod error;
pub mod event;
pub mod extract;
pub mod ics;
pub mod months;
pub mod time;
pub mod uid;

pub use error::{KorkalError, KorkalResult, ParseError};
pub use event::{EventRecord, PlainEvent};
pub use extract::extract_events;
pub use ics::assemble_calendar;
