//! Lot configuration
//!
//! A lot is described by a name and a matrix of slot categories:
//!
//! ```toml
//! name = "north"
//! rows = [
//!     ["REGULAR", "REGULAR", "COMPACT"],
//!     ["REGULAR", "COMPACT"],
//! ]
//! ```
//!
//! Files are loaded through the `config` crate, so `LOTKEEPER_*` environment
//! variables override file values (e.g. `LOTKEEPER_NAME`).

use crate::error::{Error, Result};
use crate::lot::SlotCategory;
use serde::Deserialize;
use std::path::Path;
use tracing::info;

/// Prefix for environment overrides
pub const ENV_PREFIX: &str = "LOTKEEPER";

/// Lot layout configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LotConfig {
    /// Lot name, used in logs
    #[serde(default = "default_name")]
    pub name: String,
    /// Slot categories per row, in construction order
    #[serde(default)]
    pub rows: Vec<Vec<SlotCategory>>,
}

fn default_name() -> String {
    "lot".to_string()
}

impl Default for LotConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            rows: Vec::new(),
        }
    }
}

impl LotConfig {
    /// Parse a TOML document
    pub fn from_toml_str(input: &str) -> Result<Self> {
        toml::from_str(input).map_err(|e| Error::Config(format!("Invalid lot config: {}", e)))
    }

    /// Load from a file, with environment overrides applied on top
    ///
    /// The file format is taken from the extension (`.toml`, `.json`, ...).
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let config: Self = config::Config::builder()
            .add_source(config::File::from(path))
            .add_source(config::Environment::with_prefix(ENV_PREFIX))
            .build()
            .map_err(|e| Error::Config(format!("Failed to read {}: {}", path.display(), e)))?
            .try_deserialize()
            .map_err(|e| Error::Config(format!("Invalid lot config {}: {}", path.display(), e)))?;

        info!(
            path = ?path,
            name = %config.name,
            rows = config.rows.len(),
            "Loaded lot configuration"
        );
        Ok(config)
    }

    /// Total number of slots described
    pub fn slot_count(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }
}
