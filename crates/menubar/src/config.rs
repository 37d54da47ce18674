//! Accelerator configuration loading
//!
//! The user's rebindings live in `accelerators.json` in the Lantern config
//! directory, as a JSON object of accelerator names to strings:
//!
//! ```json
//! { "zoomIn": "Ctrl+Shift+=", "toggleMenu": "" }
//! ```
//!
//! Names not in the file keep their factory default. An empty string
//! unbinds the action.

use anyhow::{Context, Result};
use log::{debug, info};
use std::path::{Path, PathBuf};

use crate::accelerator::AcceleratorSet;

/// Overrides filename in the Lantern config directory
pub const ACCELERATORS_FILE: &str = "accelerators.json";

impl AcceleratorSet {
    /// Load the user's accelerators, falling back to the factory set when
    /// no overrides file exists
    pub fn load() -> Result<Self> {
        if config::config_exists(ACCELERATORS_FILE) {
            let set: AcceleratorSet = config::load_json(ACCELERATORS_FILE)?;
            info!("Loaded {} accelerator overrides", set.overrides().len());
            return Ok(set);
        }
        debug!("No {} found, using factory accelerators", ACCELERATORS_FILE);
        Ok(Self::factory())
    }

    /// Load overrides from a specific JSON file
    pub fn from_file(path: &Path) -> Result<Self> {
        config::load_json_file(path)
    }

    /// Parse an overrides object
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse accelerator overrides")
    }

    /// Serialize the overrides object
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize accelerator overrides")
    }

    /// Write the overrides to the Lantern config directory
    pub fn save(&self) -> Result<()> {
        config::save_json(ACCELERATORS_FILE, self)
    }

    /// Get the default overrides file path (~/.config/lantern/accelerators.json)
    pub fn default_config_path() -> Option<PathBuf> {
        config::config_path(ACCELERATORS_FILE)
    }
}
