use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// Directory the runner reads its per-user settings from
pub fn runner_config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or(Error::NoHomeDir)?;
    Ok(home.join(".claude"))
}

/// The settings file chime writes hooks into
pub fn settings_file() -> Result<PathBuf> {
    Ok(runner_config_dir()?.join("settings.json"))
}

/// Sibling path the previous settings content is copied to before a save
pub fn backup_path(path: &Path) -> PathBuf {
    let mut backup = path.as_os_str().to_os_string();
    backup.push(".backup");
    PathBuf::from(backup)
}
