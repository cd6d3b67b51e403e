//! CSV export with spreadsheet-friendly encoding.
//!
//! Files are written UTF-8 with a byte-order mark so localized team and
//! player names open correctly in common spreadsheet tools, and are
//! overwritten in place on every run. That overwrite is intentional:
//! every table is rebuilt from the remote source per run.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::cli::types::Season;
use crate::core::table::Table;
use crate::error::Result;

/// UTF-8 byte-order mark prepended to every export.
pub const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// The four exported tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableKind {
    TeamStats,
    PlayerStats,
    GameLogs,
    TeamInfo,
}

impl TableKind {
    pub fn file_stem(&self) -> &'static str {
        match self {
            TableKind::TeamStats => "NBA_TeamStats",
            TableKind::PlayerStats => "NBA_PlayerStats",
            TableKind::GameLogs => "NBA_GameLogs",
            TableKind::TeamInfo => "NBA_TeamInfo",
        }
    }
}

/// Deterministic output path for a table kind and season,
/// e.g. `NBA_TeamStats_202425.csv`.
pub fn output_path(dir: &Path, kind: TableKind, season: &Season) -> PathBuf {
    dir.join(format!("{}_{}.csv", kind.file_stem(), season.compact()))
}

/// Serialize `table` to `path`: BOM, header row, then one record per row.
pub fn write_csv(table: &Table, path: &Path) -> Result<()> {
    let mut file = File::create(path)?;
    file.write_all(&UTF8_BOM)?;

    let mut writer = csv::Writer::from_writer(file);
    writer.write_record(table.columns())?;
    for row in table.rows() {
        writer.write_record(row.iter().map(|cell| cell.to_string()))?;
    }
    writer.flush()?;
    Ok(())
}
