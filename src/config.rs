use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::utils::paths::{get_config_path, get_store_path};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Days shown on each side of the focus date; the visible window is
    /// `2 * side_length + 1` days wide.
    #[serde(default = "default_side_length")]
    pub side_length: usize,

    /// Directory holding todos.json. Defaults to ~/.daydo.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}

fn default_side_length() -> usize {
    1
}

impl Default for Config {
    fn default() -> Self {
        Self {
            side_length: default_side_length(),
            data_dir: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = get_config_path()?;

        if !config_path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: Config = toml::from_str(&content)?;

        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_path = get_config_path()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(&config_path, content)?;

        Ok(())
    }

    /// Where the persisted todo document lives.
    pub fn store_path(&self) -> Result<PathBuf> {
        match &self.data_dir {
            Some(dir) => Ok(dir.join("todos.json")),
            None => get_store_path(),
        }
    }
}
