//! HTTP client for the public stats.nba.com API.

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ORIGIN, REFERER};
use reqwest::Client;

use crate::cli::types::{MeasureType, Season};
use crate::core::retry::{with_retry, RetryPolicy};
use crate::core::table::Table;
use crate::error::Result;
use crate::nba::types::StatsResponse;

#[cfg(test)]
mod tests;

/// Base path for the NBA stats API.
pub const STATS_BASE_URL: &str = "https://stats.nba.com/stats";

const USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0 Safari/537.36";
const PER_MODE: &str = "PerGame";
const SEASON_TYPE: &str = "Regular Season";

/// Browser-like headers the stats service requires; requests without the
/// Referer/Origin pair hang or come back 403.
fn stats_header_map() -> HeaderMap {
    let mut h = HeaderMap::new();
    h.insert(
        ACCEPT,
        HeaderValue::from_static("application/json, text/plain, */*"),
    );
    h.insert(REFERER, HeaderValue::from_static("https://www.nba.com/"));
    h.insert(ORIGIN, HeaderValue::from_static("https://www.nba.com"));
    h.insert("x-nba-stats-origin", HeaderValue::from_static("stats"));
    h.insert("x-nba-stats-token", HeaderValue::from_static("true"));
    h
}

/// Query parameters shared by the two league-dash endpoints.
fn dash_params(season: &Season, measure: MeasureType) -> Vec<(&'static str, String)> {
    vec![
        ("LastNGames", "0".to_string()),
        ("MeasureType", measure.as_str().to_string()),
        ("Month", "0".to_string()),
        ("OpponentTeamID", "0".to_string()),
        ("PaceAdjust", "N".to_string()),
        ("PerMode", PER_MODE.to_string()),
        ("Period", "0".to_string()),
        ("PlusMinus", "N".to_string()),
        ("Rank", "N".to_string()),
        ("Season", season.as_str().to_string()),
        ("SeasonType", SEASON_TYPE.to_string()),
    ]
}

/// Blocking-free client over the stats endpoints this pipeline consumes.
///
/// All statistical fetches are wrapped in the bounded retry loop; the
/// per-team detail lookup is deliberately single-attempt because the
/// enricher tolerates individual failures instead of retrying them.
pub struct StatsClient {
    client: Client,
    headers: HeaderMap,
    retry: RetryPolicy,
}

impl StatsClient {
    pub fn new() -> Result<Self> {
        Self::with_retry_policy(RetryPolicy::default())
    }

    pub fn with_retry_policy(retry: RetryPolicy) -> Result<Self> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            client,
            headers: stats_header_map(),
            retry,
        })
    }

    /// Issue one GET and decode the first result set of the response.
    async fn first_result_set(
        &self,
        endpoint: &str,
        params: &[(&'static str, String)],
    ) -> Result<Table> {
        let url = format!("{STATS_BASE_URL}/{endpoint}");
        let resp = self
            .client
            .get(&url)
            .headers(self.headers.clone())
            .query(params)
            .send()
            .await?
            .error_for_status()?
            .json::<StatsResponse>()
            .await?;
        resp.into_first_table()
    }

    /// Per-game team stats for one measure set, retried on failure.
    pub async fn team_stats(&self, season: &Season, measure: MeasureType) -> Result<Table> {
        let params = dash_params(season, measure);
        let what = format!("team {measure} stats");
        with_retry(&self.retry, &what, || {
            self.first_result_set("leaguedashteamstats", &params)
        })
        .await
    }

    /// Per-game player stats for one measure set, retried on failure.
    pub async fn player_stats(&self, season: &Season, measure: MeasureType) -> Result<Table> {
        let params = dash_params(season, measure);
        let what = format!("player {measure} stats");
        with_retry(&self.retry, &what, || {
            self.first_result_set("leaguedashplayerstats", &params)
        })
        .await
    }

    /// Team-level game logs (one row per team-game), retried on failure.
    pub async fn game_logs(&self, season: &Season) -> Result<Table> {
        let params = vec![
            ("Counter", "1000".to_string()),
            ("Direction", "DESC".to_string()),
            ("PlayerOrTeam", "T".to_string()),
            ("Season", season.as_str().to_string()),
            ("SeasonType", SEASON_TYPE.to_string()),
            ("Sorter", "DATE".to_string()),
        ];
        with_retry(&self.retry, "game logs", || {
            self.first_result_set("leaguegamelog", &params)
        })
        .await
    }

    /// Descriptive metadata for a single team. Single attempt, no retry.
    pub async fn team_details(&self, team_id: i64) -> Result<Table> {
        let params = vec![("TeamID", team_id.to_string())];
        self.first_result_set("teamdetails", &params).await
    }
}
