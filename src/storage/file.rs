use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::todo::{TodoItem, TodoStore};

/// On-disk shape of the persisted store: one JSON document holding the full
/// item list and the id counter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreData {
    #[serde(default)]
    pub list: Vec<TodoItem>,
    #[serde(rename = "nextId", default = "default_next_id")]
    pub next_id: u64,
}

fn default_next_id() -> u64 {
    1
}

impl Default for StoreData {
    fn default() -> Self {
        Self {
            list: Vec::new(),
            next_id: default_next_id(),
        }
    }
}

/// Load the persisted store.
///
/// Any failure here (missing file, malformed JSON, wrong shape) falls back to
/// the empty default: corrupt state never blocks startup and never surfaces
/// to the caller.
pub fn load_store(path: &Path) -> StoreData {
    match try_load(path) {
        Ok(data) => data,
        Err(e) => {
            tracing::debug!("starting empty, could not load {}: {e:#}", path.display());
            StoreData::default()
        }
    }
}

fn try_load(path: &Path) -> Result<StoreData> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Write the full store state out as one JSON document, replacing whatever
/// was there. Called after every mutation; no batching.
pub fn save_store(path: &Path, store: &TodoStore) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let data = StoreData {
        list: store.items().to_vec(),
        next_id: store.next_id(),
    };
    let content = serde_json::to_string(&data)?;
    fs::write(path, content).with_context(|| format!("could not write {}", path.display()))?;

    Ok(())
}
