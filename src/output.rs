//! JSON output files
//!
//! Each file is replaced atomically: the document is serialized in memory,
//! written next to the target as `<name>.tmp`, synced and renamed over the
//! target. A failed run leaves whatever a previous run wrote untouched.

use serde::Serialize;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info, warn};

use crate::constants::output::{BOUTS_FILE_NAME, LEADERBOARD_FILE_NAME, TEMP_SUFFIX};
use crate::data_fetcher::models::{BoutRecord, Leaderboard};
use crate::error::AppError;

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(TEMP_SUFFIX);
    path.with_file_name(name)
}

async fn write_and_sync(path: &Path, contents: &[u8]) -> Result<(), AppError> {
    let mut file = fs::File::create(path).await?;
    file.write_all(contents).await?;
    file.flush().await?;
    file.sync_all().await?;
    Ok(())
}

/// Serializes `value` as pretty JSON and atomically replaces `path` with it.
pub async fn write_json_atomic<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), AppError> {
    let mut contents = serde_json::to_string_pretty(value)?;
    contents.push('\n');

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).await?;
    }

    let temp_path = temp_path_for(path);
    debug!("Writing {} bytes to {}", contents.len(), temp_path.display());

    let result = match write_and_sync(&temp_path, contents.as_bytes()).await {
        Ok(()) => fs::rename(&temp_path, path).await.map_err(AppError::from),
        Err(e) => Err(e),
    };

    if let Err(e) = &result {
        warn!("Writing {} failed: {e}", path.display());
        if let Err(cleanup) = fs::remove_file(&temp_path).await {
            debug!("Temp file {} not removed: {cleanup}", temp_path.display());
        }
    }
    result
}

/// Writes `<output_dir>/bouts.json` and returns its path.
pub async fn write_bouts(output_dir: &Path, bouts: &[BoutRecord]) -> Result<PathBuf, AppError> {
    let path = output_dir.join(BOUTS_FILE_NAME);
    write_json_atomic(&path, bouts).await?;
    info!("Wrote {} bouts to {}", bouts.len(), path.display());
    Ok(path)
}

/// Writes `<output_dir>/leaderboard.json` and returns its path.
pub async fn write_leaderboard(
    output_dir: &Path,
    leaderboard: &Leaderboard,
) -> Result<PathBuf, AppError> {
    let path = output_dir.join(LEADERBOARD_FILE_NAME);
    write_json_atomic(&path, leaderboard).await?;
    info!(
        "Wrote {} leaderboard entries to {}",
        leaderboard.len(),
        path.display()
    );
    Ok(path)
}
