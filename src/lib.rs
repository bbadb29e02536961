//! timeledger library root.
//! Exposes the time-ledger calculator, the session store, the CLI parser
//! and the high-level run() function.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli, cfg),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Db { .. } => cli::commands::db::handle(&cli.command, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
        Commands::In { .. } | Commands::Break { .. } | Commands::Out { .. } => {
            cli::commands::clock::handle(&cli.command, cfg)
        }
        Commands::Status { .. } => cli::commands::status::handle(&cli.command, cfg),
        Commands::List { .. } => cli::commands::list::handle(&cli.command, cfg),
        Commands::Del { .. } => cli::commands::del::handle(&cli.command, cfg),
        Commands::Report { .. } => cli::commands::report::handle(&cli.command, cfg),
        Commands::Backup { .. } => cli::commands::backup::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load config once
    let mut cfg = Config::load()?;

    // 3️⃣ command-line overrides
    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }
    if let Some(owner) = &cli.owner {
        cfg.owner_id = owner.clone();
    }
    if let Some(tz) = &cli.tz {
        cfg.timezone = tz.clone();
    }

    tracing::debug!(
        database = %cfg.database,
        owner = %cfg.owner_id,
        timezone = %cfg.timezone,
        "configuration resolved"
    );

    // 4️⃣ hand everything to the dispatcher
    dispatch(&cli, &cfg)
}
