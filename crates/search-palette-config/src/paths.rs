//! Cache and data directory paths
//!
//! Uses XDG directories via `dirs` crate.
//!
//! Platform-specific locations:
//! - Linux: `~/.cache/trek-finder/`, `~/.local/share/trek-finder/`
//! - macOS: `~/Library/Caches/trek-finder/`, `~/Library/Application Support/trek-finder/`
//! - Windows: `%LOCALAPPDATA%\trek-finder\`, `%APPDATA%\trek-finder\`

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_NAME: &str = "trek-finder";

/// Get the application cache directory (log files)
pub fn cache_dir() -> Result<PathBuf> {
    let base = dirs::cache_dir().context("Could not determine cache directory")?;
    ensure_dir(base.join(APP_NAME))
}

/// Get the application data directory (persisted palette history)
pub fn data_dir() -> Result<PathBuf> {
    let base = dirs::data_dir().context("Could not determine data directory")?;
    ensure_dir(base.join(APP_NAME))
}

fn ensure_dir(dir: PathBuf) -> Result<PathBuf> {
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create directory {}", dir.display()))?;
    Ok(dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_dir_creates_missing_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = ensure_dir(tmp.path().join("nested").join(APP_NAME)).unwrap();
        assert!(dir.exists());
        assert!(dir.ends_with(APP_NAME));
    }
}
