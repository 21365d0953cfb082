//! File System Utilities
//!
//! Per-user directories for settings and logs.

use crate::error::{Error, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("com", "goldwind", "rtu-dashboard").ok_or_else(|| Error::Invalid {
        message: "Could not determine project directories".to_string(),
    })
}

fn ensure_dir(dir: &Path) -> Result<PathBuf> {
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(dir.to_path_buf())
}

/// Get or create the application's configuration directory
///
/// Platform-specific locations:
/// - **Linux**: `~/.config/rtu-dashboard/` or `$XDG_CONFIG_HOME/rtu-dashboard/`
/// - **macOS**: `~/Library/Application Support/com.goldwind.rtu-dashboard/`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\goldwind\rtu-dashboard\config\`
pub fn get_or_create_config_dir() -> Result<PathBuf> {
    ensure_dir(project_dirs()?.config_dir())
}

/// Get the data directory, where log files are written
///
/// Platform-specific locations:
/// - **Linux**: `~/.local/share/rtu-dashboard/`
/// - **macOS**: `~/Library/Application Support/com.goldwind.rtu-dashboard/`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\goldwind\rtu-dashboard\data\`
pub fn get_or_create_data_dir() -> Result<PathBuf> {
    ensure_dir(project_dirs()?.data_dir())
}
