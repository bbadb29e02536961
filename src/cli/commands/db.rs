use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::migrate::{pending_migrations, run_pending_migrations};
use crate::db::pool::DbPool;
use crate::db::stats;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, RED, RESET};
use rusqlite::Connection;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        migrate,
        check,
        vacuum,
        info,
    } = cmd
    {
        //
        // 1) MIGRATE (raw connection, so pending versions are still visible)
        //
        if *migrate {
            let conn = Connection::open(&cfg.database)?;
            let pending = pending_migrations(&conn)?;
            println!("{CYAN}▶ Running migrations… ({} pending){RESET}", pending.len());
            for version in run_pending_migrations(&conn)? {
                println!("  • {version}");
            }
            println!("{GREEN}✔ Migration completed.{RESET}\n");
        }

        if !(*info || *check || *vacuum) {
            return Ok(());
        }

        let pool = DbPool::new(&cfg.database)?;

        //
        // 2) INFO
        //
        if *info {
            stats::print_db_info(&pool, &cfg.database)?;
        }

        //
        // 3) CHECK
        //
        if *check {
            println!("{CYAN}▶ Running integrity check…{RESET}");

            let integrity: String = pool
                .conn
                .query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;

            if integrity == "ok" {
                println!("{GREEN}✔ Integrity check passed.{RESET}\n");
            } else {
                println!("{RED}✘ Integrity check failed:{RESET} {integrity}\n");
            }
        }

        //
        // 4) VACUUM
        //
        if *vacuum {
            println!("{CYAN}▶ Running VACUUM…{RESET}");
            pool.conn.execute_batch("VACUUM;")?;
            println!("{GREEN}✔ Vacuum completed.{RESET}\n");
        }
    }

    Ok(())
}
