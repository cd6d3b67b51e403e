use super::*;

#[test]
fn test_stats_header_map_carries_required_headers() {
    let headers = stats_header_map();
    assert_eq!(headers.get(REFERER).unwrap(), "https://www.nba.com/");
    assert_eq!(headers.get(ORIGIN).unwrap(), "https://www.nba.com");
    assert_eq!(headers.get("x-nba-stats-origin").unwrap(), "stats");
    assert_eq!(headers.get("x-nba-stats-token").unwrap(), "true");
    assert!(headers.contains_key(ACCEPT));
}

#[test]
fn test_dash_params_scope_season_and_measure() {
    let season = Season::new("2024-25").unwrap();
    let params = dash_params(&season, MeasureType::Advanced);

    let get = |key: &str| {
        params
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    };
    assert_eq!(get("Season"), Some("2024-25"));
    assert_eq!(get("MeasureType"), Some("Advanced"));
    assert_eq!(get("PerMode"), Some("PerGame"));
    assert_eq!(get("SeasonType"), Some("Regular Season"));
}

#[test]
fn test_client_builds_with_default_policy() {
    let client = StatsClient::new().unwrap();
    assert_eq!(client.retry, RetryPolicy::default());
}

#[test]
fn test_client_accepts_injected_policy() {
    let client = StatsClient::with_retry_policy(RetryPolicy::immediate(1)).unwrap();
    assert_eq!(client.retry.max_attempts, 1);
    assert_eq!(client.retry.backoff, std::time::Duration::ZERO);
}
