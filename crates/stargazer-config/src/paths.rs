//! Configuration and data directory paths
//!
//! Uses XDG directories via `dirs` crate.
//!
//! Platform-specific locations:
//! - Linux: `~/.local/share/stargazer/`, `~/.cache/stargazer/`
//! - macOS: `~/Library/Application Support/stargazer/`, `~/Library/Caches/stargazer/`
//! - Windows: `%APPDATA%\stargazer\`, `%LOCALAPPDATA%\stargazer\`

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_NAME: &str = "stargazer";
const LOCAL_STORAGE_FILE: &str = "local-storage.json";

/// Get the application data directory
/// Returns ~/.local/share/stargazer/ on Linux
pub fn data_dir() -> Result<PathBuf> {
    let base = dirs::data_dir().context("Could not determine data directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Get the application cache directory (log files live here in release builds)
pub fn cache_dir() -> Result<PathBuf> {
    let base = dirs::cache_dir().context("Could not determine cache directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Get path to the local storage file holding user, token and image details
pub fn local_storage_path() -> Result<PathBuf> {
    Ok(data_dir()?.join(LOCAL_STORAGE_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_dir_exists() {
        let dir = data_dir().unwrap();
        assert!(dir.exists());
        assert!(dir.ends_with(APP_NAME));
    }

    #[test]
    fn test_local_storage_path() {
        let path = local_storage_path().unwrap();
        assert!(path.ends_with(LOCAL_STORAGE_FILE));
        assert!(path.parent().unwrap().ends_with(APP_NAME));
    }
}
