//! Error types for the korkal pipeline.

use thiserror::Error;

/// Recoverable failure while parsing one fragment's text.
///
/// These never abort a run: the extractor logs the fragment and moves on
/// to the next one.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown month name '{0}'")]
    UnknownMonth(String),

    #[error("Malformed date text '{0}'")]
    DateFormat(String),

    #[error("Malformed time text '{0}'")]
    TimeFormat(String),
}

/// Errors that abort the whole run.
#[derive(Error, Debug)]
pub enum KorkalError {
    /// Well-formed date/time text that denotes no real calendar moment.
    /// Never recovered per fragment; the run produces no output.
    #[error("Invalid calendar instant: {0}")]
    InvalidInstant(String),

    #[error("Markup error: {0}")]
    Markup(String),
}

/// Result type alias for korkal operations.
pub type KorkalResult<T> = Result<T, KorkalError>;
