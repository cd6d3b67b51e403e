//! Single-table command implementation

use std::path::PathBuf;

use crate::cli::types::{MeasureType, Season};
use crate::core::table::Cell;
use crate::error::Result;
use crate::export::TableKind;
use crate::nba::StatsClient;

use super::common::{
    clean_and_export, fetch_game_logs, fetch_player_stats, fetch_team_info, fetch_team_stats,
    resolve_season,
};

/// Handle a `get <table>` command: fetch one table, clean it, export it.
pub async fn handle_table_data(
    kind: TableKind,
    season: Option<Season>,
    out_dir: PathBuf,
    verbose: bool,
) -> Result<()> {
    let season = resolve_season(season)?;
    let client = StatsClient::new()?;

    let (table, fill) = match kind {
        TableKind::TeamStats => (
            fetch_team_stats(&client, &season).await?,
            Cell::Number(0.0),
        ),
        TableKind::PlayerStats => (
            fetch_player_stats(&client, &season).await?,
            Cell::Number(0.0),
        ),
        TableKind::GameLogs => (fetch_game_logs(&client, &season).await?, Cell::Number(0.0)),
        TableKind::TeamInfo => {
            // The detail endpoint is keyed by team id, so derive the id
            // list from a fresh Base team stats fetch.
            let base = client.team_stats(&season, MeasureType::Base).await?;
            (
                fetch_team_info(&client, &base).await?,
                Cell::Text(String::new()),
            )
        }
    };

    if verbose {
        println!(
            "Fetched {} rows x {} columns for season {}",
            table.row_count(),
            table.columns().len(),
            season
        );
    }

    let path = clean_and_export(table, &fill, &out_dir, kind, &season)?;
    println!("✓ Exported {}", path.display());

    Ok(())
}
