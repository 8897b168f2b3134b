//! Platform-specific directory paths and log rotation.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

const QUALIFIER: &str = "org";
const ORGANIZATION: &str = "panels";
const APPLICATION: &str = "panels";

const LATEST_LOG: &str = "latest.log";

/// Maximum number of archived log files to keep.
const MAX_OLD_LOGS: usize = 25;

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
}

/// Directory for configuration files.
///
/// - Linux: `$XDG_CONFIG_HOME/panels` or `~/.config/panels`
/// - macOS: `~/Library/Application Support/org.panels.panels`
/// - Windows: `C:\Users\<User>\AppData\Roaming\panels\panels\config`
pub fn config_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().to_path_buf())
}

/// Directory for logs.
pub fn cache_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Default location of the UI settings file.
pub fn settings_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("settings.json"))
}

/// Path of the log file written by this run.
pub fn log_file(cache: &Path) -> PathBuf {
    cache.join(LATEST_LOG)
}

/// Archive the previous `latest.log` under a timestamped name and drop the
/// oldest archives beyond [`MAX_OLD_LOGS`].
///
/// Call at startup before opening the new log file.
pub fn rotate_logs(cache: &Path) {
    let latest = log_file(cache);
    if latest.exists() {
        let stamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
        let _ = fs::rename(&latest, cache.join(format!("{}.log", stamp)));
    }
    prune_archives(cache, MAX_OLD_LOGS);
}

fn prune_archives(cache: &Path, keep: usize) {
    let Ok(entries) = fs::read_dir(cache) else {
        return;
    };

    let mut archives: Vec<_> = entries
        .filter_map(|e| e.ok())
        .filter(|e| {
            let name = e.file_name();
            let name = name.to_string_lossy();
            name.ends_with(".log") && name != LATEST_LOG
        })
        .collect();
    if archives.len() <= keep {
        return;
    }

    // Timestamped names sort chronologically.
    archives.sort_by_key(|e| e.file_name());
    for entry in &archives[..archives.len() - keep] {
        let _ = fs::remove_file(entry.path());
    }
}
