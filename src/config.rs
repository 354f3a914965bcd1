//! Config file persistence.
//!
//! A single `[Paths]` table holding the catalog location. Created on first
//! run, read thereafter, and always passed into startup explicitly rather
//! than consulted as ambient state.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(rename = "Paths")]
    pub paths: Paths,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Paths {
    pub json_file_path: String,
}

impl Config {
    pub fn new(json_file_path: impl Into<String>) -> Self {
        Config {
            paths: Paths {
                json_file_path: json_file_path.into(),
            },
        }
    }

    /// Read the config if it exists; `Ok(None)` means first run.
    pub fn load(path: &Path) -> Result<Option<Config>> {
        if !path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
        Ok(Some(config))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string(self).map_err(|e| Error::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
