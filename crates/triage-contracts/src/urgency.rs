//! Urgency levels and their display policy.
//!
//! Urgency drives both the ordering of displayed priority and the color
//! coding applied by every front end. The wire form is the lowercase label
//! (`"low"`, `"moderate"`, `"high"`).

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::TriageError;

/// How soon the user should seek care.
///
/// Variants are declared in ascending order so `Ord` follows clinical
/// priority: `Low < Moderate < High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Low,
    Moderate,
    High,
}

impl Urgency {
    /// Every level, lowest first.
    pub const ALL: [Urgency; 3] = [Urgency::Low, Urgency::Moderate, Urgency::High];

    /// The lowercase wire label.
    pub fn as_str(self) -> &'static str {
        match self {
            Urgency::Low => "low",
            Urgency::Moderate => "moderate",
            Urgency::High => "high",
        }
    }

    /// The color class used when rendering this level.
    pub fn color_class(self) -> &'static str {
        match self {
            Urgency::High => "red",
            Urgency::Moderate => "orange",
            Urgency::Low => "green",
        }
    }
}

/// Color class for a raw urgency label.
///
/// Known labels follow [`Urgency::color_class`]; anything else is gray.
pub fn color_class_for(label: &str) -> &'static str {
    label
        .parse::<Urgency>()
        .map(Urgency::color_class)
        .unwrap_or("gray")
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Urgency {
    type Err = TriageError;

    /// Parse a label case-insensitively, ignoring surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Urgency::Low),
            "moderate" => Ok(Urgency::Moderate),
            "high" => Ok(Urgency::High),
            _ => Err(TriageError::UnknownUrgency {
                value: s.to_string(),
            }),
        }
    }
}
