//! Per-team detail enrichment.
//!
//! In contrast to the all-or-nothing retry around the statistical
//! fetches, detail lookups tolerate individual failures: a team whose
//! lookup fails is skipped with a warning and the batch continues.

use std::future::Future;
use std::time::Duration;

use crate::core::table::Table;
use crate::error::Result;
use crate::nba::http::StatsClient;

/// Fixed delay between successive detail queries, as courtesy to the
/// service's implicit rate limits.
pub const DETAIL_PACING: Duration = Duration::from_millis(500);

/// Look up details for each id in order, skipping failures.
///
/// Successful lookups are accumulated in iteration order and stacked
/// into one table; failed ids produce a warning and no row. The lookup
/// is a closure so tests can drive the loop without a network.
pub async fn collect_details<F, Fut>(team_ids: &[i64], pacing: Duration, mut lookup: F) -> Table
where
    F: FnMut(i64) -> Fut,
    Fut: Future<Output = Result<Table>>,
{
    let mut parts = Vec::new();
    for (i, &team_id) in team_ids.iter().enumerate() {
        if i > 0 && !pacing.is_zero() {
            tokio::time::sleep(pacing).await;
        }
        match lookup(team_id).await {
            Ok(table) => parts.push(table),
            Err(e) => eprintln!("⚠ Failed to get details for TEAM_ID={team_id}: {e}"),
        }
    }
    Table::concat(parts)
}

/// Fetch descriptive metadata for every team id via the stats client.
pub async fn team_info(client: &StatsClient, team_ids: &[i64]) -> Table {
    collect_details(team_ids, DETAIL_PACING, |id| client.team_details(id)).await
}
