use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::log;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use rusqlite::Connection;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - the SQLite database
///  - all pending DB migrations
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let db_path = Config::init_all(cfg, cli.test)?;
    let db_path = db_path.to_string_lossy().to_string();

    println!("⚙️  Initializing timeledger…");
    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("🗄️  Database    : {}", &db_path);
    println!("🌍 Time zone   : {}", cfg.time_zone()?.name());
    println!("👤 Owner       : {}", cfg.owner_id);

    let conn = Connection::open(&db_path)?;
    init_db(&conn)?;

    success(format!("Database initialized at {}", &db_path));

    // internal log (non-blocking)
    if let Err(e) = log::ttlog(
        &conn,
        "init",
        "Database initialized",
        &format!("Database initialized at {}", &db_path),
    ) {
        warning(format!("Failed to write internal log: {e}"));
    }

    println!("🎉 timeledger initialization completed!");
    Ok(())
}
