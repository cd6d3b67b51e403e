//! Season label newtype for stats.nba.com queries.

use crate::error::{NbaError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for NBA season labels (`YYYY-YY`, e.g. `2024-25`).
///
/// The label scopes every remote query and stamps every output filename,
/// so it is validated once on parse and then passed around by value.
///
/// # Examples
///
/// ```rust
/// use nba_stats::Season;
///
/// let season: Season = "2024-25".parse().unwrap();
/// assert_eq!(season.to_string(), "2024-25");
/// assert_eq!(season.compact(), "202425");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Season(String);

impl Season {
    /// Parse and validate a season label.
    pub fn new(label: &str) -> Result<Self> {
        let bytes = label.as_bytes();
        let well_formed = bytes.len() == 7
            && bytes[4] == b'-'
            && bytes[..4].iter().all(u8::is_ascii_digit)
            && bytes[5..].iter().all(u8::is_ascii_digit);
        if !well_formed {
            return Err(NbaError::InvalidSeason {
                label: label.to_string(),
            });
        }

        // The suffix must be the following calendar year: 2024-25, not 2024-26.
        let start: u16 = label[..4].parse().map_err(|_| NbaError::InvalidSeason {
            label: label.to_string(),
        })?;
        let suffix: u16 = label[5..].parse().map_err(|_| NbaError::InvalidSeason {
            label: label.to_string(),
        })?;
        if (start + 1) % 100 != suffix {
            return Err(NbaError::InvalidSeason {
                label: label.to_string(),
            });
        }

        Ok(Self(label.to_string()))
    }

    /// The label as sent to the remote service, e.g. `2024-25`.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Dash-free form used in output file names, e.g. `202425`.
    pub fn compact(&self) -> String {
        self.0.replace('-', "")
    }
}

impl Default for Season {
    /// Fixed fallback label used when neither the `--season` flag nor the
    /// env var is set. Bumped manually once per season.
    fn default() -> Self {
        Self("2025-26".to_string())
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Season {
    type Err = NbaError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}
