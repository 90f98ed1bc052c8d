//! Error types for civil date-time handling.

/// Errors from parsing or constructing a civil date-time.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum TimeError {
    /// Input does not match the `YYYY-MM-DD HH:MM` layout.
    #[error("parse error: {0}")]
    Parse(String),
    /// Fields are well-formed but name a day that does not exist.
    #[error("invalid date: {0}")]
    InvalidDate(String),
    /// Hour or minute outside 00:00..=23:59.
    #[error("invalid time: {hour:02}:{minute:02}")]
    InvalidTime { hour: u32, minute: u32 },
    /// Year cannot be represented by the calendar backend.
    #[error("year {0} outside supported range")]
    OutOfRange(i64),
}
