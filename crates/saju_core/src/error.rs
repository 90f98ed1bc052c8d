//! Error types for pillar derivation.

use saju_time::TimeError;

use crate::branch::Branch;
use crate::stem::Stem;

/// Errors from pillar derivation, label parsing and prompt assembly.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum SajuError {
    /// Date-time could not be parsed or constructed.
    #[error("time error: {0}")]
    Time(#[from] TimeError),
    /// Month outside `1..=12`.
    #[error("month {0} outside 1..=12")]
    InvalidMonth(u32),
    /// Hour outside `0..=23`.
    #[error("hour {0} outside 0..=23")]
    InvalidHour(u32),
    /// Stem and branch of differing parity never meet in the cycle.
    #[error("{stem}{branch} is not a sexagenary pair")]
    InvalidPair { stem: Stem, branch: Branch },
    /// Text is not a stem, branch or pair label.
    #[error("unknown label: {0:?}")]
    UnknownLabel(String),
    /// Prompt question is empty after trimming.
    #[error("question is empty")]
    EmptyQuestion,
}
