//! Earthly branches (지지), the 12-element cycle.

use std::fmt::{Display, Formatter};

use serde::{Serialize, Serializer};

use crate::util::floor_mod;

/// Number of earthly branches.
pub const BRANCH_COUNT: u32 = 12;

/// The twelve earthly branches in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[allow(missing_docs)]
pub enum Branch {
    Ja,
    Chuk,
    In,
    Myo,
    Jin,
    Sa,
    O,
    Mi,
    Sin,
    Yu,
    Sul,
    Hae,
}

/// All 12 branches in order (index 0 = 자).
pub const ALL_BRANCHES: [Branch; 12] = [
    Branch::Ja,
    Branch::Chuk,
    Branch::In,
    Branch::Myo,
    Branch::Jin,
    Branch::Sa,
    Branch::O,
    Branch::Mi,
    Branch::Sin,
    Branch::Yu,
    Branch::Sul,
    Branch::Hae,
];

const BRANCH_LABELS: [&str; 12] = [
    "자", "축", "인", "묘", "진", "사", "오", "미", "신", "유", "술", "해",
];

const BRANCH_NAMES: [&str; 12] = [
    "Ja", "Chuk", "In", "Myo", "Jin", "Sa", "O", "Mi", "Sin", "Yu", "Sul", "Hae",
];

impl Branch {
    /// 0-based index (자=0 .. 해=11).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Branch at `index`, reduced modulo 12.
    pub const fn from_index(index: i64) -> Self {
        ALL_BRANCHES[floor_mod(index, BRANCH_COUNT)]
    }

    /// Hangul label.
    pub fn label(self) -> &'static str {
        BRANCH_LABELS[self.index() as usize]
    }

    /// Romanized name.
    pub fn name(self) -> &'static str {
        BRANCH_NAMES[self.index() as usize]
    }

    /// Look up a branch by its Hangul label.
    pub fn from_label(label: &str) -> Option<Self> {
        BRANCH_LABELS
            .iter()
            .position(|&l| l == label)
            .map(|i| ALL_BRANCHES[i])
    }
}

impl Display for Branch {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Branch {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}
