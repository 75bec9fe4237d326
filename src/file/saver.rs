//! Writing documents back to disk.
//!
//! Writes are atomic: data goes to a temp file that is then renamed over the
//! target, so the target is never left partially written. Targets ending in
//! `.gz` are gzip-compressed, and an existing target can be backed up to a
//! `.bak` copy first when configured.

use crate::config::Config;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Writes `data` to `path` atomically.
///
/// Compresses when the target ends in `.gz`, and creates a `.bak` copy of an
/// existing target first when `config.create_backup` is set.
///
/// # Errors
///
/// Returns an error if the backup copy, the temp-file write, or the final
/// rename fails.
///
/// # Example
///
/// ```no_run
/// use yamledit::config::Config;
/// use yamledit::file::saver::save_document;
///
/// let config = Config::default();
/// save_document("output.yaml", "name: Alice\n", &config).unwrap();
/// ```
pub fn save_document<P: AsRef<Path>>(path: P, data: &str, config: &Config) -> Result<()> {
    let path = path.as_ref();
    let should_compress = path.to_string_lossy().ends_with(".gz");

    if config.create_backup && path.exists() {
        create_backup(path)?;
    }

    write_file_atomic(path, data.as_bytes(), should_compress)
}

/// Creates a backup of a file by copying it with a .bak extension.
fn create_backup(path: &Path) -> Result<()> {
    let mut backup_path = path.to_path_buf();
    let original_name = backup_path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| anyhow::anyhow!("Invalid file name"))?;
    backup_path.set_file_name(format!("{}.bak", original_name));
    fs::copy(path, backup_path).context("Failed to create backup")?;
    Ok(())
}

fn write_file_atomic(path: &Path, data: &[u8], compress: bool) -> Result<()> {
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;

    let temp_path = path.with_extension("tmp");

    if compress {
        let file = fs::File::create(&temp_path).context("Failed to create temp file")?;
        let mut encoder = GzEncoder::new(file, Compression::default());
        encoder
            .write_all(data)
            .context("Failed to write compressed data")?;
        encoder.finish().context("Failed to finish compression")?;
    } else {
        fs::write(&temp_path, data).context("Failed to write temp file")?;
    }

    fs::rename(&temp_path, path).context("Failed to rename temp file")?;

    Ok(())
}
