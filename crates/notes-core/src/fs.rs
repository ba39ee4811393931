//! Filesystem utilities for atomic file replacement.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Write `contents` to `destination` by way of a sibling temp file.
///
/// Readers never observe a half-written file: the data is flushed to the temp
/// file first and then renamed over the destination.
///
/// # Errors
///
/// Returns an error if the temp file cannot be written or the rename fails.
pub fn write_atomic(destination: &Path, contents: &[u8]) -> io::Result<()> {
    let temp_path = temp_sibling(destination);
    let mut file = fs::File::create(&temp_path)?;
    if let Err(err) = file.write_all(contents).and_then(|_| file.sync_all()) {
        let _ = fs::remove_file(&temp_path);
        return Err(err);
    }
    drop(file);
    rename_with_fallback(&temp_path, destination)
}

/// Atomically rename a file, with fallback for platforms where rename fails if target exists.
///
/// On some platforms (notably Windows), `fs::rename` fails if the destination already exists.
/// This function handles that case by removing the destination first and retrying.
///
/// If the rename ultimately fails, the temp file is cleaned up.
///
/// # Errors
///
/// Returns an error if the rename fails even after the fallback attempt.
pub fn rename_with_fallback(temp_path: &Path, destination: &Path) -> io::Result<()> {
    if let Err(initial_err) = fs::rename(temp_path, destination) {
        let _ = fs::remove_file(destination);
        fs::rename(temp_path, destination).map_err(|retry_err| {
            let _ = fs::remove_file(temp_path);
            io::Error::new(
                retry_err.kind(),
                format!(
                    "Atomic rename failed (initial: {}, retry: {})",
                    initial_err, retry_err
                ),
            )
        })?;
    }
    Ok(())
}

fn temp_sibling(destination: &Path) -> PathBuf {
    let name = destination
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "notes".to_string());
    destination.with_file_name(format!(".{}.{}.tmp", name, std::process::id()))
}
