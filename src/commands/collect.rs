//! Full pipeline command: fetch, merge, enrich, clean, export.

use std::path::PathBuf;

use crate::cli::types::Season;
use crate::core::table::Cell;
use crate::error::Result;
use crate::export::TableKind;
use crate::nba::StatsClient;

use super::common::{
    clean_and_export, fetch_game_logs, fetch_player_stats, fetch_team_info, fetch_team_stats,
    resolve_season,
};

/// Parameters for the collect command
#[derive(Debug)]
pub struct CollectParams {
    pub season: Option<Season>,
    pub out_dir: PathBuf,
    pub verbose: bool,
}

/// Handle the collect command
///
/// Data flows strictly forward: fetch → merge → clean → export, with the
/// team-detail enrichment as a side branch off the merged team table. Any
/// statistical fetch that exhausts its retries aborts the run; no partial
/// file is written for that table.
pub async fn handle_collect(params: CollectParams) -> Result<()> {
    let season = resolve_season(params.season)?;
    println!("Fetching NBA data for season {season}...");

    let client = StatsClient::new()?;

    let team_stats = fetch_team_stats(&client, &season).await?;
    let player_stats = fetch_player_stats(&client, &season).await?;
    let game_logs = fetch_game_logs(&client, &season).await?;
    let team_info = fetch_team_info(&client, &team_stats).await?;

    if params.verbose {
        println!(
            "Rows fetched: {} teams, {} players, {} game logs, {} team info",
            team_stats.row_count(),
            player_stats.row_count(),
            game_logs.row_count(),
            team_info.row_count()
        );
    }

    let zero = Cell::Number(0.0);
    let empty = Cell::Text(String::new());
    let out = params.out_dir.as_path();

    let written = vec![
        clean_and_export(team_stats, &zero, out, TableKind::TeamStats, &season)?,
        clean_and_export(player_stats, &zero, out, TableKind::PlayerStats, &season)?,
        clean_and_export(game_logs, &zero, out, TableKind::GameLogs, &season)?,
        clean_and_export(team_info, &empty, out, TableKind::TeamInfo, &season)?,
    ];

    println!("✓ All data saved successfully!");
    println!("Files created:");
    for path in &written {
        println!(" - {}", path.display());
    }

    Ok(())
}
