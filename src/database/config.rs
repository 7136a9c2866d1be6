use anyhow::{Context, Result};
use std::path::PathBuf;

/// Directory holding config.toml and the default database (~/.busyblocks)
pub fn get_config_dir() -> Result<PathBuf> {
    let home_dir = dirs::home_dir().context("Could not find home directory")?;
    Ok(home_dir.join(".busyblocks"))
}

/// Database path used when nothing else is configured
pub fn get_default_db_path() -> Result<PathBuf> {
    Ok(get_config_dir()?.join("schedule.db"))
}
