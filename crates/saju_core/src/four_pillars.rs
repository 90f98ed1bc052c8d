//! The Four Pillars record (사주) and its assembly from a civil date-time.

use std::fmt::{Display, Formatter};

use saju_time::CivilDateTime;
use serde::Serialize;
use tracing::debug;

use crate::branch::Branch;
use crate::error::SajuError;
use crate::ganji::Ganji;
use crate::pillars::{day_pillar, hour_branch_unchecked, month_branch_unchecked, year_pillar};

/// Listing keys in output order: year pillar, month branch, day pillar,
/// hour branch.
pub const PILLAR_KEYS: [&str; 4] = ["년주", "월지", "일주", "시지"];

/// Year, month, day and hour values for one birth moment.
///
/// Month and hour carry only a branch; year and day carry a full pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct FourPillars {
    year_pillar: Ganji,
    month_branch: Branch,
    day_pillar: Ganji,
    hour_branch: Branch,
}

impl FourPillars {
    /// Derive all four pillars from a validated date-time.
    pub fn from_datetime(dt: &CivilDateTime) -> Self {
        let pillars = Self {
            year_pillar: year_pillar(dt.year()),
            month_branch: month_branch_unchecked(dt.month()),
            day_pillar: day_pillar(dt.date()),
            hour_branch: hour_branch_unchecked(dt.hour()),
        };
        debug!(
            birth = %dt,
            year_pillar = %pillars.year_pillar,
            month_branch = %pillars.month_branch,
            day_pillar = %pillars.day_pillar,
            hour_branch = %pillars.hour_branch,
            "four pillars assembled"
        );
        pillars
    }

    /// Validate numeric fields, then derive.
    pub fn from_parts(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
    ) -> Result<Self, SajuError> {
        let dt = CivilDateTime::new(year, month, day, hour, minute)?;
        Ok(Self::from_datetime(&dt))
    }

    pub fn year_pillar(&self) -> Ganji {
        self.year_pillar
    }

    pub fn month_branch(&self) -> Branch {
        self.month_branch
    }

    pub fn day_pillar(&self) -> Ganji {
        self.day_pillar
    }

    pub fn hour_branch(&self) -> Branch {
        self.hour_branch
    }

    /// Fixed multi-line key-value listing, one pillar per line.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl Display for FourPillars {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let [year, month, day, hour] = PILLAR_KEYS;
        writeln!(f, "- {year}: {}", self.year_pillar)?;
        writeln!(f, "- {month}: {}", self.month_branch)?;
        writeln!(f, "- {day}: {}", self.day_pillar)?;
        write!(f, "- {hour}: {}", self.hour_branch)
    }
}

/// Parse a `YYYY-MM-DD HH:MM` birth string and derive its Four Pillars.
///
/// # Example
///
/// ```
/// let p = saju_core::four_pillars("1990-05-15 14:30").unwrap();
/// assert_eq!(p.year_pillar().to_string(), "경오");
/// assert_eq!(p.hour_branch().to_string(), "미");
/// ```
pub fn four_pillars(birth: &str) -> Result<FourPillars, SajuError> {
    let dt = CivilDateTime::parse(birth)?;
    Ok(FourPillars::from_datetime(&dt))
}
