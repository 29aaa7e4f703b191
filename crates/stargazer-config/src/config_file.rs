use std::path::PathBuf;

const CONFIG_FILE: &str = ".stargazer.toml";

/// Candidate config file locations, highest priority first
fn candidate_paths() -> Vec<PathBuf> {
    let mut candidates = vec![PathBuf::from(CONFIG_FILE)];
    if let Some(home) = dirs::home_dir() {
        candidates.push(home.join(CONFIG_FILE));
    }
    candidates
}

/// Load config file content from CWD first, then home directory
///
/// Returns the path the content was read from together with the content,
/// or None if no config file exists.
pub fn load_config_file() -> Option<(PathBuf, String)> {
    candidate_paths().into_iter().find_map(|path| {
        let content = std::fs::read_to_string(&path).ok()?;
        log::debug!("Loaded config from {}", path.display());
        Some((path, content))
    })
}
