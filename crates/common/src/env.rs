//! Environment/runtime helpers
//!
//! Sanity checks to ensure expected directories exist at startup.

use std::path::PathBuf;

use tracing::{debug, warn};

/// Resolve the on-disk file behind a SQLite URL.
///
/// Returns `None` for non-SQLite URLs and for in-memory databases.
pub fn sqlite_file_path(database_url: &str) -> Option<PathBuf> {
    let rest = database_url
        .strip_prefix("sqlite://")
        .or_else(|| database_url.strip_prefix("sqlite:"))?;
    let path = rest.split('?').next().unwrap_or_default();
    if path.is_empty() || path == ":memory:" || path.starts_with("file::memory:") {
        return None;
    }
    Some(PathBuf::from(path))
}

/// Ensure the directory holding a file-backed SQLite database exists.
pub async fn ensure_database_dir(database_url: &str) -> anyhow::Result<()> {
    let Some(file) = sqlite_file_path(database_url) else {
        debug!("database is not file-backed; nothing to prepare");
        return Ok(());
    };
    let Some(dir) = file.parent().filter(|d| !d.as_os_str().is_empty()) else {
        return Ok(());
    };
    if tokio::fs::metadata(dir).await.is_err() {
        warn!(dir = %dir.display(), "database directory missing; creating it");
    }
    tokio::fs::create_dir_all(dir)
        .await
        .map_err(|e| anyhow::anyhow!("cannot create {}: {e}", dir.display()))?;
    Ok(())
}
