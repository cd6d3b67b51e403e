//! Integration tests for command plumbing and CLI parsing

use clap::Parser;
use nba_stats::{
    cli::{Commands, GetCmd, NbaStats},
    commands::resolve_season,
    NbaError, Season, SEASON_ENV_VAR,
};

#[test]
fn test_resolve_season_from_option() {
    let season = Some(Season::new("2023-24").unwrap());
    let result = resolve_season(season);
    assert_eq!(result.unwrap().as_str(), "2023-24");
}

#[test]
fn test_resolve_season_option_overrides_env() {
    // The explicit flag wins regardless of the env var's state.
    let season = Some(Season::new("2022-23").unwrap());
    let result = resolve_season(season);
    assert_eq!(result.unwrap().as_str(), "2022-23");
}

#[test]
fn test_resolve_season_env_scenarios() {
    // Exercised as one sequential test: these scenarios share the
    // process-wide env var and must not race each other.

    // 1) Env var set: used when no flag is given.
    std::env::set_var(SEASON_ENV_VAR, "2021-22");
    let result = resolve_season(None);
    assert_eq!(result.unwrap().as_str(), "2021-22");

    // 2) Env var malformed: parse error surfaces.
    std::env::set_var(SEASON_ENV_VAR, "not-a-season");
    let result = resolve_season(None);
    assert!(matches!(
        result.unwrap_err(),
        NbaError::InvalidSeason { .. }
    ));

    // 3) Env var absent: fall back to the default season label.
    std::env::remove_var(SEASON_ENV_VAR);
    let result = resolve_season(None);
    assert_eq!(result.unwrap(), Season::default());
}

#[test]
fn test_cli_parses_collect() {
    let app = NbaStats::try_parse_from([
        "nba-stats",
        "collect",
        "--season",
        "2024-25",
        "--out-dir",
        "/tmp/exports",
        "--verbose",
    ])
    .unwrap();

    match app.command {
        Commands::Collect { opts } => {
            assert_eq!(opts.season.unwrap().as_str(), "2024-25");
            assert_eq!(opts.out_dir, std::path::PathBuf::from("/tmp/exports"));
            assert!(opts.verbose);
        }
        other => panic!("expected collect command, got {other:?}"),
    }
}

#[test]
fn test_cli_collect_defaults() {
    let app = NbaStats::try_parse_from(["nba-stats", "collect"]).unwrap();
    match app.command {
        Commands::Collect { opts } => {
            assert!(opts.season.is_none());
            assert_eq!(opts.out_dir, std::path::PathBuf::from("."));
            assert!(!opts.verbose);
        }
        other => panic!("expected collect command, got {other:?}"),
    }
}

#[test]
fn test_cli_rejects_malformed_season() {
    let result = NbaStats::try_parse_from(["nba-stats", "collect", "--season", "2024"]);
    assert!(result.is_err());
}

#[test]
fn test_cli_parses_get_subcommands() {
    let app =
        NbaStats::try_parse_from(["nba-stats", "get", "team-stats", "-s", "2023-24"]).unwrap();
    match app.command {
        Commands::Get {
            cmd: GetCmd::TeamStats { opts },
        } => assert_eq!(opts.season.unwrap().as_str(), "2023-24"),
        other => panic!("expected get team-stats, got {other:?}"),
    }

    let app = NbaStats::try_parse_from(["nba-stats", "get", "team-info"]).unwrap();
    assert!(matches!(
        app.command,
        Commands::Get {
            cmd: GetCmd::TeamInfo { .. }
        }
    ));

    let app = NbaStats::try_parse_from(["nba-stats", "get", "player-stats"]).unwrap();
    assert!(matches!(
        app.command,
        Commands::Get {
            cmd: GetCmd::PlayerStats { .. }
        }
    ));

    let app = NbaStats::try_parse_from(["nba-stats", "get", "game-logs"]).unwrap();
    assert!(matches!(
        app.command,
        Commands::Get {
            cmd: GetCmd::GameLogs { .. }
        }
    ));
}

#[test]
fn test_cli_requires_a_subcommand() {
    assert!(NbaStats::try_parse_from(["nba-stats"]).is_err());
}
