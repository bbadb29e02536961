use crate::cli::parser::Commands;
use crate::config::Config;
use crate::config::migrate::{migrate_config_file, missing_keys};
use crate::core::config::ConfigLogic;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        migrate,
        edit_config,
        editor,
    } = cmd
    {
        let path = Config::config_file();

        // ---- PRINT CONFIG ----
        if *print_config {
            println!("📄 Current configuration ({}):\n", path.display());
            let yaml = serde_yaml::to_string(cfg).map_err(|e| AppError::Config(e.to_string()))?;
            println!("{yaml}");
        }

        // ---- CHECK / MIGRATE ----
        if (*check || *migrate) && !path.exists() {
            warning(format!(
                "No configuration file at {}. Run `timeledger init` first.",
                path.display()
            ));
            return Ok(());
        }

        if *check {
            let missing = missing_keys(&path)?;
            if missing.is_empty() {
                success("Configuration file is complete.");
            } else {
                warning(format!("Missing configuration keys: {}", missing.join(", ")));
                info("Run `timeledger config --migrate` to add them with default values.");
            }
        }

        if *migrate {
            migrate_config_file(&path)?;
        }

        // ---- EDIT CONFIG ----
        if *edit_config {
            ConfigLogic::edit(&path, editor.as_deref())?;
        }
    }

    Ok(())
}
