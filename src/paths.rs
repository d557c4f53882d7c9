use std::path::PathBuf;

use directories::ProjectDirs;

/// Returns the Resolv home directory holding config and session files.
///
/// Resolution order:
/// 1. `RESOLV_HOME` environment variable (if set)
/// 2. Platform data directory for `resolv`
/// 3. Current working directory + `.resolv`
pub fn resolv_home() -> PathBuf {
    if let Ok(root) = std::env::var("RESOLV_HOME") {
        return PathBuf::from(root);
    }
    ProjectDirs::from("", "", "resolv")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".resolv"))
}

/// Returns the path to the configuration file.
pub fn config_path() -> PathBuf {
    resolv_home().join("config.yaml")
}

/// Returns the path to the local key-value store holding the session flag.
pub fn session_path() -> PathBuf {
    resolv_home().join("session.json")
}
