//! Timetable server error types.

use crate::domain::InvalidDeparture;

/// Errors talking to the timetable server.
#[derive(Debug, thiserror::Error)]
pub enum MpkError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("HTTP status {status} from {url}")]
    Status { status: u16, url: String },

    /// No canned page for a selector (mock timetable only)
    #[error("no page for line selector {0}")]
    MissingPage(String),
}

/// A timetable page does not have the shape the extraction rules expect.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    /// An element signature was not found
    #[error("expected {0}, found none")]
    Missing(String),

    /// The first cell of an hour row is not an hour
    #[error("expected an hour in the first cell of a timetable row, found {0:?}")]
    InvalidHour(String),

    /// An all-digit minute token that is not a representable number
    #[error("expected a minute in a timetable cell, found {0:?}")]
    InvalidMinute(String),

    /// An hour row is too short for the requested day type
    #[error("timetable row for hour {hour} has no column {column}")]
    MissingColumn { hour: u32, column: usize },

    /// Hour or minute out of range
    #[error(transparent)]
    InvalidDeparture(#[from] InvalidDeparture),
}
