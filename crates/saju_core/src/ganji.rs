//! Sexagenary pairs (간지) and the 60-entry cycle.
//!
//! Entry `i` of the cycle pairs stem `i mod 10` with branch `i mod 12`.
//! Because 10 and 12 share the factor 2, only stems and branches of equal
//! parity ever meet, giving 60 of the 120 conceivable combinations.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::branch::{ALL_BRANCHES, Branch};
use crate::error::SajuError;
use crate::stem::{ALL_STEMS, Stem};
use crate::util::floor_mod;

/// Length of the sexagenary cycle.
pub const CYCLE_LEN: u32 = 60;

/// One stem-branch pair of the sexagenary cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ganji {
    stem: Stem,
    branch: Branch,
}

/// Build the 60-entry cycle from the stem and branch sequences.
pub const fn build_cycle() -> [Ganji; 60] {
    let mut cycle = [Ganji {
        stem: Stem::Gap,
        branch: Branch::Ja,
    }; 60];
    let mut i = 0;
    while i < 60 {
        cycle[i] = Ganji {
            stem: ALL_STEMS[i % 10],
            branch: ALL_BRANCHES[i % 12],
        };
        i += 1;
    }
    cycle
}

/// The sexagenary cycle, index 0 = 갑자 .. 59 = 계해.
pub const SEXAGENARY_CYCLE: [Ganji; 60] = build_cycle();

/// Cycle entry at `index`, reduced modulo 60.
pub const fn ganji_from_index(index: i64) -> Ganji {
    SEXAGENARY_CYCLE[floor_mod(index, CYCLE_LEN)]
}

impl Ganji {
    /// Pair a stem with a branch.
    ///
    /// Fails with [`SajuError::InvalidPair`] when their parities differ.
    pub fn new(stem: Stem, branch: Branch) -> Result<Self, SajuError> {
        if stem.index() % 2 != branch.index() % 2 {
            return Err(SajuError::InvalidPair { stem, branch });
        }
        Ok(Self { stem, branch })
    }

    pub fn stem(self) -> Stem {
        self.stem
    }

    pub fn branch(self) -> Branch {
        self.branch
    }

    /// 0-based position in the cycle (갑자=0 .. 계해=59).
    pub fn index(self) -> u8 {
        // i ≡ s (mod 10) and i ≡ b (mod 12) is solved by 6s - 5b for equal parity
        let s = i64::from(self.stem.index());
        let b = i64::from(self.branch.index());
        floor_mod(6 * s - 5 * b, CYCLE_LEN) as u8
    }

    /// 1-based position in the cycle (1..=60).
    pub fn order(self) -> u8 {
        self.index() + 1
    }

    /// Pair `n` steps further along the cycle (negative steps go back).
    pub fn offset(self, n: i64) -> Self {
        ganji_from_index(i64::from(self.index()) + n)
    }
}

impl Display for Ganji {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.stem, self.branch)
    }
}

impl FromStr for Ganji {
    type Err = SajuError;

    /// Parse a two-character label such as `갑자`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || SajuError::UnknownLabel(s.to_owned());
        let mut chars = s.chars();
        let (Some(first), Some(second), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(unknown());
        };
        let stem = Stem::from_label(first.encode_utf8(&mut [0; 4])).ok_or_else(unknown)?;
        let branch = Branch::from_label(second.encode_utf8(&mut [0; 4])).ok_or_else(unknown)?;
        Self::new(stem, branch)
    }
}

impl Serialize for Ganji {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
