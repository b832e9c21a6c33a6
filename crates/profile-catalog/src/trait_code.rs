//! RIASEC Trait Codes

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Label that is not one of the six RIASEC letters
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown trait code: {0:?}")]
pub struct UnknownTraitCode(pub String);

/// One of the six occupational-interest traits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TraitCode {
    /// Realistic
    R,
    /// Investigative
    I,
    /// Artistic
    A,
    /// Social
    S,
    /// Enterprising
    E,
    /// Conventional
    C,
}

impl TraitCode {
    /// All codes in questionnaire order
    pub const ALL: [TraitCode; 6] = [
        TraitCode::R,
        TraitCode::I,
        TraitCode::A,
        TraitCode::S,
        TraitCode::E,
        TraitCode::C,
    ];

    /// Single-letter code
    pub fn letter(&self) -> char {
        match self {
            TraitCode::R => 'R',
            TraitCode::I => 'I',
            TraitCode::A => 'A',
            TraitCode::S => 'S',
            TraitCode::E => 'E',
            TraitCode::C => 'C',
        }
    }

    /// Trait name
    pub fn name(&self) -> &'static str {
        match self {
            TraitCode::R => "Realistic",
            TraitCode::I => "Investigative",
            TraitCode::A => "Artistic",
            TraitCode::S => "Social",
            TraitCode::E => "Enterprising",
            TraitCode::C => "Conventional",
        }
    }
}

impl FromStr for TraitCode {
    type Err = UnknownTraitCode;

    /// Exact match only: no trimming, no case folding
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "R" => Ok(TraitCode::R),
            "I" => Ok(TraitCode::I),
            "A" => Ok(TraitCode::A),
            "S" => Ok(TraitCode::S),
            "E" => Ok(TraitCode::E),
            "C" => Ok(TraitCode::C),
            other => Err(UnknownTraitCode(other.to_string())),
        }
    }
}

impl fmt::Display for TraitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}
