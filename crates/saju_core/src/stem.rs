//! Heavenly stems (천간), the 10-element cycle.

use std::fmt::{Display, Formatter};

use serde::{Serialize, Serializer};

use crate::util::floor_mod;

/// Number of heavenly stems.
pub const STEM_COUNT: u32 = 10;

/// The ten heavenly stems in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[allow(missing_docs)]
pub enum Stem {
    Gap,
    Eul,
    Byeong,
    Jeong,
    Mu,
    Gi,
    Gyeong,
    Sin,
    Im,
    Gye,
}

/// All 10 stems in order (index 0 = 갑).
pub const ALL_STEMS: [Stem; 10] = [
    Stem::Gap,
    Stem::Eul,
    Stem::Byeong,
    Stem::Jeong,
    Stem::Mu,
    Stem::Gi,
    Stem::Gyeong,
    Stem::Sin,
    Stem::Im,
    Stem::Gye,
];

const STEM_LABELS: [&str; 10] = ["갑", "을", "병", "정", "무", "기", "경", "신", "임", "계"];

const STEM_NAMES: [&str; 10] = [
    "Gap", "Eul", "Byeong", "Jeong", "Mu", "Gi", "Gyeong", "Sin", "Im", "Gye",
];

impl Stem {
    /// 0-based index (갑=0 .. 계=9).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Stem at `index`, reduced modulo 10.
    pub const fn from_index(index: i64) -> Self {
        ALL_STEMS[floor_mod(index, STEM_COUNT)]
    }

    /// Hangul label.
    pub fn label(self) -> &'static str {
        STEM_LABELS[self.index() as usize]
    }

    /// Romanized name.
    pub fn name(self) -> &'static str {
        STEM_NAMES[self.index() as usize]
    }

    /// Look up a stem by its Hangul label.
    pub fn from_label(label: &str) -> Option<Self> {
        STEM_LABELS
            .iter()
            .position(|&l| l == label)
            .map(|i| ALL_STEMS[i])
    }
}

impl Display for Stem {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Stem {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}
