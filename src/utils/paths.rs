use anyhow::{Result, anyhow};
use std::path::PathBuf;

pub fn get_daydo_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or_else(|| anyhow!("Could not find home directory"))?;
    Ok(home.join(".daydo"))
}

pub fn get_config_path() -> Result<PathBuf> {
    let daydo_dir = get_daydo_dir()?;
    Ok(daydo_dir.join("config.toml"))
}

pub fn get_store_path() -> Result<PathBuf> {
    let daydo_dir = get_daydo_dir()?;
    Ok(daydo_dir.join("todos.json"))
}

pub fn get_logs_dir() -> Result<PathBuf> {
    let daydo_dir = get_daydo_dir()?;
    Ok(daydo_dir.join("logs"))
}
