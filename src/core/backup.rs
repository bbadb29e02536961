use crate::db::log::ttlog;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use crate::utils::path::expand_tilde;
use rusqlite::Connection;
use std::fs;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the database to `dest_file`, optionally zipping it.
    /// Returns the path of the final backup file.
    pub fn backup(db_path: &str, dest_file: &str, compress: bool, force: bool) -> AppResult<PathBuf> {
        let src = Path::new(db_path);
        let dest = expand_tilde(dest_file);

        if !src.exists() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Database not found: {}", src.display()),
            )
            .into());
        }

        if let Some(parent) = dest.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        crate::export::ensure_writable(&dest, force)?;

        fs::copy(src, &dest)?;
        success(format!("Backup created: {}", dest.display()));

        let final_path = if compress {
            let compressed = compress_backup(&dest)?;
            if let Err(e) = fs::remove_file(&dest) {
                warning(format!("Failed to remove uncompressed backup: {e}"));
            } else {
                info(format!("Removed uncompressed backup: {}", dest.display()));
            }
            compressed
        } else {
            dest
        };

        // audit line in the source database (non-blocking)
        if let Ok(conn) = Connection::open(src)
            && let Err(e) = ttlog(
                &conn,
                "backup",
                &final_path.to_string_lossy(),
                if compress {
                    "Backup created and compressed"
                } else {
                    "Backup created"
                },
            )
        {
            tracing::warn!(error = %e, "failed to write internal log");
        }

        Ok(final_path)
    }
}

/// Compress a backup into a sibling `.zip` file.
fn compress_backup(path: &Path) -> AppResult<PathBuf> {
    let zip_path = path.with_extension("zip");
    let entry_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .ok_or_else(|| AppError::Other(format!("invalid backup path: {}", path.display())))?;

    let file = fs::File::create(&zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let mut f = fs::File::open(path)?;
    zip.start_file(entry_name, options)
        .map_err(std::io::Error::other)?;

    std::io::copy(&mut f, &mut zip)?;
    zip.finish().map_err(std::io::Error::other)?;

    success(format!("Compressed: {}", zip_path.display()));

    Ok(zip_path)
}
