//! Shared fetch-merge-export helpers used by the command handlers.

use std::path::{Path, PathBuf};

use crate::cli::types::{MeasureType, Season};
use crate::core::table::{Cell, Table};
use crate::error::Result;
use crate::export::{output_path, write_csv, TableKind};
use crate::nba::{details, StatsClient};
use crate::SEASON_ENV_VAR;

/// Merge keys for the team stats tables.
pub const TEAM_JOIN_KEYS: [&str; 2] = ["TEAM_ID", "TEAM_NAME"];

/// Merge keys for the player stats tables.
pub const PLAYER_JOIN_KEYS: [&str; 4] =
    ["PLAYER_ID", "PLAYER_NAME", "TEAM_ID", "TEAM_ABBREVIATION"];

/// Resolve the season to query: explicit flag, then the
/// `NBA_STATS_SEASON` env var, then the fixed default label.
pub fn resolve_season(season: Option<Season>) -> Result<Season> {
    if let Some(season) = season {
        return Ok(season);
    }
    match std::env::var(SEASON_ENV_VAR) {
        Ok(label) => label.parse(),
        Err(_) => Ok(Season::default()),
    }
}

/// Base + Advanced team stats, merged on the team keys.
pub async fn fetch_team_stats(client: &StatsClient, season: &Season) -> Result<Table> {
    let base = client.team_stats(season, MeasureType::Base).await?;
    println!("✓ Team stats (Base) loaded.");
    let advanced = client.team_stats(season, MeasureType::Advanced).await?;
    println!("✓ Team stats (Advanced) loaded.");

    base.inner_join(
        &advanced,
        &TEAM_JOIN_KEYS,
        MeasureType::Base.suffix(),
        MeasureType::Advanced.suffix(),
    )
}

/// Base + Advanced player stats, merged on the player keys.
pub async fn fetch_player_stats(client: &StatsClient, season: &Season) -> Result<Table> {
    let base = client.player_stats(season, MeasureType::Base).await?;
    println!("✓ Player stats (Base) loaded.");
    let advanced = client.player_stats(season, MeasureType::Advanced).await?;
    println!("✓ Player stats (Advanced) loaded.");

    base.inner_join(
        &advanced,
        &PLAYER_JOIN_KEYS,
        MeasureType::Base.suffix(),
        MeasureType::Advanced.suffix(),
    )
}

/// Team-level game logs for the season.
pub async fn fetch_game_logs(client: &StatsClient, season: &Season) -> Result<Table> {
    let logs = client.game_logs(season).await?;
    println!("✓ Game logs loaded.");
    Ok(logs)
}

/// Detail rows for every distinct team id in the merged team table.
///
/// Individual lookup failures are skipped inside the enrichment loop;
/// only a missing TEAM_ID column is an error here.
pub async fn fetch_team_info(client: &StatsClient, team_stats: &Table) -> Result<Table> {
    let team_ids = team_stats.distinct_ints("TEAM_ID")?;
    let info = details::team_info(client, &team_ids).await;
    println!("✓ Team structure info loaded.");
    Ok(info)
}

/// Fill missing values and write the season-stamped CSV.
pub fn clean_and_export(
    mut table: Table,
    fill: &Cell,
    dir: &Path,
    kind: TableKind,
    season: &Season,
) -> Result<PathBuf> {
    table.fill_missing(fill);
    let path = output_path(dir, kind, season);
    write_csv(&table, &path)?;
    Ok(path)
}
