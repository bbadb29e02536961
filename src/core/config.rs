use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    fn default_editor() -> String {
        std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            })
    }

    fn try_edit(editor: &str, path: &Path) -> bool {
        Command::new(editor)
            .arg(path)
            .status()
            .map(|s| s.success())
            .unwrap_or(false)
    }

    /// Open the configuration file in `editor`, falling back to
    /// $EDITOR / $VISUAL / the platform default.
    pub fn edit(path: &Path, editor: Option<&str>) -> AppResult<()> {
        let fallback = Self::default_editor();
        let requested = editor.map(str::to_string).unwrap_or_else(|| fallback.clone());

        if Self::try_edit(&requested, path) {
            success(format!("Configuration file edited using '{requested}'"));
            return Ok(());
        }

        if requested != fallback {
            warning(format!(
                "Editor '{requested}' not available, falling back to '{fallback}'"
            ));
            if Self::try_edit(&fallback, path) {
                success(format!("Configuration file edited using fallback '{fallback}'"));
                return Ok(());
            }
        }

        Err(AppError::Config(format!(
            "failed to edit {} with '{requested}'",
            path.display()
        )))
    }
}
