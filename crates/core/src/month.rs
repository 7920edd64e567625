//! Ethiopian month names
//!
//! | # | Latin | Ge'ez | Days |
//! |---|-------|-------|------|
//! | 1 | Meskerem | መስከረም | 30 |
//! | 2 | Tikimt | ጥቅምት | 30 |
//! | 3 | Hidar | ኅዳር | 30 |
//! | 4 | Tahsas | ታኅሣሥ | 30 |
//! | 5 | Tir | ጥር | 30 |
//! | 6 | Yekatit | የካቲት | 30 |
//! | 7 | Megabit | መጋቢት | 30 |
//! | 8 | Miyazya | ሚያዝያ | 30 |
//! | 9 | Ginbot | ግንቦት | 30 |
//! | 10 | Sene | ሰኔ | 30 |
//! | 11 | Hamle | ሐምሌ | 30 |
//! | 12 | Nehase | ነሐሴ | 30 |
//! | 13 | Pagume | ጳጉሜ | 5 or 6 |

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Latin transliterations, indexed by `month - 1`
pub const LATIN_MONTH_NAMES: [&str; 13] = [
    "Meskerem", "Tikimt", "Hidar", "Tahsas", "Tir", "Yekatit", "Megabit", "Miyazya", "Ginbot",
    "Sene", "Hamle", "Nehase", "Pagume",
];

/// Ge'ez script names, indexed by `month - 1`
pub const GEEZ_MONTH_NAMES: [&str; 13] = [
    "መስከረም", "ጥቅምት", "ኅዳር", "ታኅሣሥ", "ጥር", "የካቲት", "መጋቢት", "ሚያዝያ", "ግንቦት", "ሰኔ", "ሐምሌ",
    "ነሐሴ", "ጳጉሜ",
];

/// Which month-name table to render with
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MonthScript {
    /// Latin transliteration ("Meskerem")
    #[default]
    Latin,
    /// Ge'ez script ("መስከረም")
    Geez,
}

impl MonthScript {
    /// The 13-entry name table for this script
    pub const fn table(&self) -> &'static [&'static str; 13] {
        match self {
            MonthScript::Latin => &LATIN_MONTH_NAMES,
            MonthScript::Geez => &GEEZ_MONTH_NAMES,
        }
    }

    /// Short identifier used in config files and flags
    pub const fn id(&self) -> &'static str {
        match self {
            MonthScript::Latin => "latin",
            MonthScript::Geez => "geez",
        }
    }
}

impl FromStr for MonthScript {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "latin" => Ok(MonthScript::Latin),
            "geez" | "ge'ez" | "amharic" => Ok(MonthScript::Geez),
            other => Err(format!(
                "unknown month script '{}' (expected \"latin\" or \"geez\")",
                other
            )),
        }
    }
}

/// The thirteen months of the Ethiopian year
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum EthiopianMonth {
    /// Meskerem (1), begins the year in September
    Meskerem = 1,
    /// Tikimt (2)
    Tikimt = 2,
    /// Hidar (3)
    Hidar = 3,
    /// Tahsas (4)
    Tahsas = 4,
    /// Tir (5)
    Tir = 5,
    /// Yekatit (6)
    Yekatit = 6,
    /// Megabit (7)
    Megabit = 7,
    /// Miyazya (8)
    Miyazya = 8,
    /// Ginbot (9)
    Ginbot = 9,
    /// Sene (10)
    Sene = 10,
    /// Hamle (11)
    Hamle = 11,
    /// Nehase (12)
    Nehase = 12,
    /// Pagume (13), 5 days or 6 in a leap year
    Pagume = 13,
}

impl EthiopianMonth {
    /// All months in calendar order
    pub const ALL: [EthiopianMonth; 13] = [
        EthiopianMonth::Meskerem,
        EthiopianMonth::Tikimt,
        EthiopianMonth::Hidar,
        EthiopianMonth::Tahsas,
        EthiopianMonth::Tir,
        EthiopianMonth::Yekatit,
        EthiopianMonth::Megabit,
        EthiopianMonth::Miyazya,
        EthiopianMonth::Ginbot,
        EthiopianMonth::Sene,
        EthiopianMonth::Hamle,
        EthiopianMonth::Nehase,
        EthiopianMonth::Pagume,
    ];

    /// Construct from a month number (1 = Meskerem … 13 = Pagume)
    ///
    /// Returns `None` if the value is out of range.
    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1..=13 => Some(Self::ALL[usize::from(n) - 1]),
            _ => None,
        }
    }

    /// The 1-based month number
    #[inline]
    pub const fn number(&self) -> u8 {
        *self as u8
    }

    /// Latin transliteration
    pub const fn name(&self) -> &'static str {
        LATIN_MONTH_NAMES[*self as usize - 1]
    }

    /// Name in Ge'ez script
    pub const fn geez_name(&self) -> &'static str {
        GEEZ_MONTH_NAMES[*self as usize - 1]
    }

    /// Name in the requested script
    pub const fn name_in(&self, script: MonthScript) -> &'static str {
        script.table()[*self as usize - 1]
    }

    /// Parse a Latin or Ge'ez month name (Latin is case-insensitive)
    pub fn from_name(name: &str) -> Option<Self> {
        let position = LATIN_MONTH_NAMES
            .iter()
            .position(|n| n.eq_ignore_ascii_case(name))
            .or_else(|| GEEZ_MONTH_NAMES.iter().position(|n| *n == name))?;
        Some(Self::ALL[position])
    }
}

impl fmt::Display for EthiopianMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
