//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use nba_stats::{
    cli::{Commands, GetCmd, NbaStats},
    commands::{
        collect::{handle_collect, CollectParams},
        table_data::handle_table_data,
    },
    Result, TableKind,
};

/// Run the CLI.
#[tokio::main]
async fn main() -> Result<()> {
    let app = NbaStats::parse();

    match app.command {
        Commands::Collect { opts } => {
            handle_collect(CollectParams {
                season: opts.season,
                out_dir: opts.out_dir,
                verbose: opts.verbose,
            })
            .await?
        }

        Commands::Get { cmd } => {
            let (kind, opts) = match cmd {
                GetCmd::TeamStats { opts } => (TableKind::TeamStats, opts),
                GetCmd::PlayerStats { opts } => (TableKind::PlayerStats, opts),
                GetCmd::GameLogs { opts } => (TableKind::GameLogs, opts),
                GetCmd::TeamInfo { opts } => (TableKind::TeamInfo, opts),
            };
            handle_table_data(kind, opts.season, opts.out_dir, opts.verbose).await?
        }
    }

    Ok(())
}
