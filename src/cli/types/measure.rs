//! Statistical measure-set selector.

use crate::error::NbaError;
use std::fmt;
use std::str::FromStr;

/// Which statistical column set a dash-stats query returns.
///
/// The stats service exposes the same team/player entities under several
/// measure types; this pipeline fetches `Base` and `Advanced` and merges
/// them on the entity keys, suffixing overlapping columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeasureType {
    Base,
    Advanced,
}

impl MeasureType {
    /// Wire value for the `MeasureType` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            MeasureType::Base => "Base",
            MeasureType::Advanced => "Advanced",
        }
    }

    /// Column suffix used to disambiguate overlapping columns after merge.
    pub fn suffix(&self) -> &'static str {
        match self {
            MeasureType::Base => "_base",
            MeasureType::Advanced => "_adv",
        }
    }
}

impl fmt::Display for MeasureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for MeasureType {
    type Err = NbaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "base" => Ok(MeasureType::Base),
            "advanced" | "adv" => Ok(MeasureType::Advanced),
            _ => Err(NbaError::InvalidMeasureType {
                value: s.to_string(),
            }),
        }
    }
}
