//! Platform-specific directory utilities

use std::path::PathBuf;

/// Get the platform-specific log directory
///
/// - macOS: `~/Library/Caches/astar/logs`
/// - Linux: `~/.cache/astar/logs` (or `$XDG_CACHE_HOME/astar/logs`)
/// - Windows: `%LOCALAPPDATA%\astar\logs`
/// - Fallback: `/tmp/astar/logs`
pub fn log_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "astar")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("/tmp/astar"))
        .join("logs")
}
