//! Indicator categories, their rewrite direction and tie-break priority.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::FangError;

/// Which way text is being rewritten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Make indicators non-resolvable (`.` -> `[.]`).
    Defang,
    /// Restore defanged indicators.
    Refang,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Defang => "defang",
            Direction::Refang => "refang",
        }
    }

    /// Categories scanned for this direction, highest priority first.
    pub fn categories(&self) -> &'static [Category] {
        match self {
            Direction::Defang => &DEFANG_CATEGORIES,
            Direction::Refang => &REFANG_CATEGORIES,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = FangError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "defang" => Ok(Direction::Defang),
            "refang" => Ok(Direction::Refang),
            other => Err(FangError::InvalidInput(format!(
                "unknown direction '{}' (expected 'defang' or 'refang')",
                other
            ))),
        }
    }
}

/// The kind of network indicator, independent of its fanged state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndicatorKind {
    Url,
    Email,
    Ip,
    Domain,
}

/// A detectable category: an indicator kind in one particular form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Url,
    Email,
    Ip,
    Domain,
    DefangedUrl,
    DefangedEmail,
    DefangedIp,
    DefangedDomain,
}

const DEFANG_CATEGORIES: [Category; 4] =
    [Category::Url, Category::Email, Category::Ip, Category::Domain];

const REFANG_CATEGORIES: [Category; 4] = [
    Category::DefangedUrl,
    Category::DefangedEmail,
    Category::DefangedIp,
    Category::DefangedDomain,
];

impl Category {
    /// Tie-break rank; 0 is the highest priority.
    pub fn rank(&self) -> u8 {
        match self.kind() {
            IndicatorKind::Url => 0,
            IndicatorKind::Email => 1,
            IndicatorKind::Ip => 2,
            IndicatorKind::Domain => 3,
        }
    }

    pub fn kind(&self) -> IndicatorKind {
        match self {
            Category::Url | Category::DefangedUrl => IndicatorKind::Url,
            Category::Email | Category::DefangedEmail => IndicatorKind::Email,
            Category::Ip | Category::DefangedIp => IndicatorKind::Ip,
            Category::Domain | Category::DefangedDomain => IndicatorKind::Domain,
        }
    }

    pub fn direction(&self) -> Direction {
        match self {
            Category::Url | Category::Email | Category::Ip | Category::Domain => {
                Direction::Defang
            }
            _ => Direction::Refang,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Url => "url",
            Category::Email => "email",
            Category::Ip => "ip",
            Category::Domain => "domain",
            Category::DefangedUrl => "defanged_url",
            Category::DefangedEmail => "defanged_email",
            Category::DefangedIp => "defanged_ip",
            Category::DefangedDomain => "defanged_domain",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
