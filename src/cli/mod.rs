//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use types::Season;

/// Common options shared between commands
#[derive(Debug, Args)]
pub struct CommonOpts {
    /// Season label, e.g. 2024-25 (or set `NBA_STATS_SEASON` env var).
    #[clap(long, short)]
    pub season: Option<Season>,

    /// Directory the season-stamped CSV files are written into.
    #[clap(long, short, default_value = ".")]
    pub out_dir: PathBuf,

    /// Print per-step progress detail.
    #[clap(long)]
    pub verbose: bool,
}

#[derive(Debug, Parser)]
#[clap(name = "nba-stats", about = "NBA stats collection CLI")]
pub struct NbaStats {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Fetch all four tables and export season-stamped CSVs.
    ///
    /// Runs the full pipeline: team and player stats (Base + Advanced,
    /// merged), game logs, and per-team detail info, each cleaned and
    /// exported as `NBA_<Kind>_<Season>.csv`.
    Collect {
        #[clap(flatten)]
        opts: CommonOpts,
    },

    /// Fetch and export a single table.
    Get {
        #[clap(subcommand)]
        cmd: GetCmd,
    },
}

#[derive(Debug, Subcommand)]
pub enum GetCmd {
    /// Merged Base + Advanced per-game team stats.
    TeamStats {
        #[clap(flatten)]
        opts: CommonOpts,
    },

    /// Merged Base + Advanced per-game player stats.
    PlayerStats {
        #[clap(flatten)]
        opts: CommonOpts,
    },

    /// One row per team-game occurrence with outcome and box-score columns.
    GameLogs {
        #[clap(flatten)]
        opts: CommonOpts,
    },

    /// Per-team descriptive metadata (city, arena, founding year, ...).
    ///
    /// Team ids are taken from a fresh team stats fetch; teams whose
    /// detail lookup fails are skipped with a warning.
    TeamInfo {
        #[clap(flatten)]
        opts: CommonOpts,
    },
}
