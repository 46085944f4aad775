//! Subsystem and row tags

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One independently generated part of a kitchen.
///
/// Every cabinet carries exactly one subsystem tag. Tags drive display
/// numbering, the verification pass and export sorting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Subsystem {
    /// Wall-hung upper row
    Top,
    /// Floor-standing lower row
    Bottom,
    /// Full-height tall unit
    Tall,
}

impl Subsystem {
    /// Generation order used by the engine.
    pub const ALL: [Subsystem; 3] = [Subsystem::Tall, Subsystem::Top, Subsystem::Bottom];

    /// Prefix used for cabinet display names
    pub fn cabinet_label(&self) -> &'static str {
        match self {
            Self::Top => "Top Cabinet",
            Self::Bottom => "Bottom Box",
            Self::Tall => "Tall Unit",
        }
    }
}

impl fmt::Display for Subsystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Top => write!(f, "top"),
            Self::Bottom => write!(f, "bottom"),
            Self::Tall => write!(f, "tall"),
        }
    }
}

impl FromStr for Subsystem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "top" | "upper" | "wall" => Ok(Self::Top),
            "bottom" | "lower" | "base" => Ok(Self::Bottom),
            "tall" => Ok(Self::Tall),
            _ => Err(format!("Unknown subsystem: {}", s)),
        }
    }
}

/// Which row a cabinet belongs to, for rules that differ between rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RowKind {
    /// Wall-hung cabinets
    Upper,
    /// Floor-standing cabinets
    Lower,
}

impl fmt::Display for RowKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Upper => write!(f, "upper"),
            Self::Lower => write!(f, "lower"),
        }
    }
}
