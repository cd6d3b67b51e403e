//! NBA Stats Collection CLI Library
//!
//! A Rust library and CLI for collecting NBA statistics from the public
//! stats.nba.com API and exporting merged, cleaned, season-stamped CSV
//! tables for downstream dashboards and model training.
//!
//! ## Features
//!
//! - **Retry-wrapped fetches**: team stats, player stats, and game logs,
//!   each retried up to 3 times with a fixed backoff before failing the run
//! - **Measure-set merging**: Base and Advanced columns joined on stable
//!   entity keys, overlapping columns suffixed `_base` / `_adv`
//! - **Partial-failure team details**: per-team metadata lookups that skip
//!   failed teams instead of aborting the batch
//! - **Spreadsheet-friendly export**: UTF-8 CSVs with a byte-order mark so
//!   localized names survive common spreadsheet tools
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use nba_stats::commands::collect::{handle_collect, CollectParams};
//!
//! # async fn example() -> nba_stats::Result<()> {
//! // Collect all four tables for a season into the current directory.
//! handle_collect(CollectParams {
//!     season: Some("2024-25".parse()?),
//!     out_dir: ".".into(),
//!     verbose: false,
//! })
//! .await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Set the season once to avoid passing it to every command:
//! ```bash
//! export NBA_STATS_SEASON=2024-25
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod export;
pub mod nba;

// Re-export commonly used types
pub use crate::core::table::{Cell, Table};
pub use cli::types::{MeasureType, Season};
pub use error::{NbaError, Result};
pub use export::TableKind;

pub const SEASON_ENV_VAR: &str = "NBA_STATS_SEASON";
