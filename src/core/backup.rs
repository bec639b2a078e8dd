//! Backup of the CSV data directory.
//!
//! Copies every per-project table (and the audit log) into a destination
//! directory, or into a single zip archive with `--compress`.

use crate::config::Config;
use crate::core::audit::audit;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    pub fn backup(cfg: &Config, dest_file: &str, compress: bool) -> AppResult<()> {
        let data_dir = Path::new(&cfg.data_dir);
        let dest = Path::new(dest_file);

        if !data_dir.exists() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("Data directory not found: {}", data_dir.display()),
            )
            .into());
        }

        let files = csv_files(data_dir)?;
        if files.is_empty() {
            warning("No CSV tables found: nothing to back up.");
            return Ok(());
        }

        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }

        if dest.exists() && !confirm_overwrite(dest)? {
            println!("❌ Backup cancelled by user.");
            return Ok(());
        }

        let final_path = if compress {
            compress_backup(&files, dest)?
        } else {
            copy_backup(&files, dest)?
        };

        success(format!("Backup created: {}", final_path.display()));

        let _ = audit(
            data_dir,
            "backup",
            &final_path.to_string_lossy(),
            if compress {
                "Backup created and compressed"
            } else {
                "Backup created"
            },
        );

        Ok(())
    }
}

/// All delimited tables in the data dir, audit log included.
fn csv_files(data_dir: &Path) -> AppResult<Vec<PathBuf>> {
    let mut out = Vec::new();
    for entry in fs::read_dir(data_dir)? {
        let path = entry?.path();
        if path.extension().is_some_and(|e| e == "csv") {
            out.push(path);
        }
    }
    out.sort();
    Ok(out)
}

fn confirm_overwrite(dest: &Path) -> AppResult<bool> {
    warning(format!("The destination '{}' already exists.", dest.display()));
    print!("Overwrite? [y/N]: ");
    io::stdout().flush().ok();

    let mut answer = String::new();
    io::stdin().read_line(&mut answer).map_err(AppError::from)?;
    let ans = answer.trim().to_ascii_lowercase();
    Ok(ans == "y" || ans == "yes")
}

/// Plain copy into a destination directory.
fn copy_backup(files: &[PathBuf], dest: &Path) -> AppResult<PathBuf> {
    fs::create_dir_all(dest)?;
    for f in files {
        let name = f
            .file_name()
            .ok_or_else(|| AppError::Other(format!("invalid file name: {}", f.display())))?;
        fs::copy(f, dest.join(name))?;
    }
    Ok(dest.to_path_buf())
}

/// Single zip archive holding every table.
fn compress_backup(files: &[PathBuf], dest: &Path) -> AppResult<PathBuf> {
    let zip_path = if dest.extension().is_some_and(|e| e == "zip") {
        dest.to_path_buf()
    } else {
        dest.with_extension("zip")
    };

    let file = fs::File::create(&zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    for path in files {
        let name = path
            .file_name()
            .ok_or_else(|| AppError::Other(format!("invalid file name: {}", path.display())))?
            .to_string_lossy()
            .into_owned();

        let mut f = fs::File::open(path)?;
        zip.start_file(name, options).map_err(io::Error::other)?;
        io::copy(&mut f, &mut zip)?;
    }

    zip.finish().map_err(io::Error::other)?;
    println!("📦 Compressed: {}", zip_path.display());

    Ok(zip_path)
}
