//! Minute-precision civil date-time.
//!
//! `CivilDateTime` is the input type of every pillar derivation. It carries
//! no timezone: the wall-clock reading at the place of birth is used as is.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::format::ParseErrorKind;
use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use crate::error::TimeError;

/// Layout accepted by [`CivilDateTime::parse`], e.g. `1990-05-15 14:30`.
pub const BIRTH_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Earliest year accepted. Kept inside the range of every chrono 0.4 release.
pub const MIN_YEAR: i32 = -262_143;
/// Latest year accepted.
pub const MAX_YEAR: i32 = 262_142;

/// Gregorian date and wall-clock time, truncated to the minute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CivilDateTime {
    inner: NaiveDateTime,
}

impl CivilDateTime {
    /// Build from numeric fields.
    ///
    /// Fails with [`TimeError::OutOfRange`] for years outside
    /// `MIN_YEAR..=MAX_YEAR`, [`TimeError::InvalidDate`] for days that do not
    /// exist and [`TimeError::InvalidTime`] for clock readings past 23:59.
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
    ) -> Result<Self, TimeError> {
        check_year(i64::from(year))?;
        let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
            TimeError::InvalidDate(format!("{year:04}-{month:02}-{day:02}"))
        })?;
        let time = NaiveTime::from_hms_opt(hour, minute, 0)
            .ok_or(TimeError::InvalidTime { hour, minute })?;
        Ok(Self {
            inner: NaiveDateTime::new(date, time),
        })
    }

    /// Parse `YYYY-MM-DD HH:MM`.
    ///
    /// Years beyond four digits need an explicit sign (`+12000-01-01 00:00`).
    pub fn parse(s: &str) -> Result<Self, TimeError> {
        // chrono skips whitespace before numeric fields; the layout does not
        if s.starts_with(char::is_whitespace) {
            return Err(TimeError::Parse(format!(
                "expected YYYY-MM-DD HH:MM, got {s:?} (leading whitespace)"
            )));
        }
        match NaiveDateTime::parse_from_str(s, BIRTH_FORMAT) {
            Ok(dt) => Self::try_from(dt),
            Err(e) if e.kind() == ParseErrorKind::OutOfRange => Err(classify_out_of_range(s)),
            Err(e) => Err(TimeError::Parse(format!(
                "expected YYYY-MM-DD HH:MM, got {s:?} ({e})"
            ))),
        }
    }

    pub fn year(&self) -> i32 {
        self.inner.year()
    }

    pub fn month(&self) -> u32 {
        self.inner.month()
    }

    pub fn day(&self) -> u32 {
        self.inner.day()
    }

    pub fn hour(&self) -> u32 {
        self.inner.hour()
    }

    pub fn minute(&self) -> u32 {
        self.inner.minute()
    }

    /// Calendar date, dropping the time of day.
    pub fn date(&self) -> NaiveDate {
        self.inner.date()
    }

    /// Underlying chrono value.
    pub fn as_naive(&self) -> NaiveDateTime {
        self.inner
    }
}

impl TryFrom<NaiveDateTime> for CivilDateTime {
    type Error = TimeError;

    /// Seconds and fractions are discarded.
    fn try_from(dt: NaiveDateTime) -> Result<Self, Self::Error> {
        Self::new(dt.year(), dt.month(), dt.day(), dt.hour(), dt.minute())
    }
}

impl FromStr for CivilDateTime {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Display for CivilDateTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner.format(BIRTH_FORMAT))
    }
}

fn check_year(year: i64) -> Result<(), TimeError> {
    if (i64::from(MIN_YEAR)..=i64::from(MAX_YEAR)).contains(&year) {
        Ok(())
    } else {
        Err(TimeError::OutOfRange(year))
    }
}

/// chrono reports impossible days, clock overflow and unrepresentable years
/// with the same error kind; split them apart by looking at the raw fields.
fn classify_out_of_range(s: &str) -> TimeError {
    if let Some(year) = leading_year(s) {
        if let Err(e) = check_year(year) {
            return e;
        }
    }
    if let Some((hour, minute)) = clock_fields(s) {
        if hour > 23 || minute > 59 {
            return TimeError::InvalidTime { hour, minute };
        }
    }
    TimeError::InvalidDate(s.to_owned())
}

fn leading_year(s: &str) -> Option<i64> {
    let (sign, rest) = match s.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, s.strip_prefix('+').unwrap_or(s)),
    };
    let digits = rest.split('-').next()?;
    digits.parse::<i64>().ok().map(|y| sign * y)
}

fn clock_fields(s: &str) -> Option<(u32, u32)> {
    let (_, clock) = s.rsplit_once(' ')?;
    let (h, m) = clock.split_once(':')?;
    Some((h.parse().ok()?, m.parse().ok()?))
}
