//! Sexagenary (stem-and-branch) Four Pillars engine.
//!
//! This crate provides:
//! - The ten heavenly stems, twelve earthly branches and the 60-entry
//!   sexagenary cycle built from them
//! - Year, month, day and hour pillar derivations
//! - The `FourPillars` record with a stable text rendering
//! - Chat prompt preparation for an external interpreter
//!
//! All derivations are pure. The cycle table is a compile-time constant,
//! shared read-only by every caller.
//!
//! Month and hour use calendar-month and two-hour heuristics; year and day
//! are fixed offsets from 1984 and 1900-01-01. None of them follow solar-term
//! boundaries.

pub mod branch;
pub mod error;
pub mod four_pillars;
pub mod ganji;
pub mod pillars;
pub mod prompt;
pub mod stem;
pub mod util;

pub use branch::{ALL_BRANCHES, BRANCH_COUNT, Branch};
pub use error::SajuError;
pub use four_pillars::{FourPillars, PILLAR_KEYS, four_pillars};
pub use ganji::{CYCLE_LEN, Ganji, SEXAGENARY_CYCLE, build_cycle, ganji_from_index};
pub use pillars::{
    DAY_EPOCH, DAY_EPOCH_YMD, YEAR_ANCHOR, day_epoch, day_pillar, hour_branch, month_branch,
    year_pillar,
};
pub use prompt::{ChatMessage, ChatPrompt, DEFAULT_SYSTEM_PROMPT, PromptConfig, Role};
pub use stem::{ALL_STEMS, STEM_COUNT, Stem};
pub use util::floor_mod;

// Re-export time types so callers don't need to depend on saju_time directly.
pub use saju_time::{CivilDateTime, NaiveDate, TimeError, days_between};
