//! ICS document assembly.
//!
//! One complete RFC 5545 document per run: calendar metadata, the fixed
//! Europe/Copenhagen timezone definition, and one VEVENT per record.

mod generate;

pub use generate::assemble_calendar;
