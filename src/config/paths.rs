// Platform path utilities.
// Locates the config file and log directory for viva-review.

use std::fs;
use std::io;
use std::path::PathBuf;

use directories::ProjectDirs;

const APP_NAME: &str = "viva-review";

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", APP_NAME)
}

/// Base config directory (~/.config/viva-review on Linux).
pub fn config_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().to_path_buf())
}

/// Default path of the JSON config file.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.json"))
}

/// Directory for rolling log files.
pub fn logs_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.data_dir().join("logs"))
}

/// Create the log directory if needed and return it.
pub fn ensure_logs_dir() -> io::Result<PathBuf> {
    let dir = logs_dir().ok_or_else(|| {
        io::Error::new(io::ErrorKind::NotFound, "no home directory for log files")
    })?;
    fs::create_dir_all(&dir)?;
    Ok(dir)
}
