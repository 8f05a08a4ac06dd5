//! Deployment configuration, read once at startup from a TOML file.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// SQLite database file.
    pub database_path: PathBuf,
    /// IANA timezone the maintenance rotation fires in.
    pub scheduler_timezone: String,
    /// Catalog used to resolve enum labels.
    pub locale: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        let database_path = dirs::data_dir()
            .map(|dir| dir.join("patente").join("patente.db"))
            .unwrap_or_else(|| PathBuf::from("patente.db"));
        Self {
            database_path,
            scheduler_timezone: "Europe/Rome".to_string(),
            locale: "it".to_string(),
        }
    }
}

impl AppConfig {
    /// Load from `path`, falling back to defaults when the file is absent.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        toml::from_str(&raw).with_context(|| format!("Malformed config at {}", path.display()))
    }
}
