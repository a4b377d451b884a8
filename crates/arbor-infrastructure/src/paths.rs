//! Path management for arbor configuration files.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/arbor/
//! └── config.toml    # Application configuration
//! ```

use std::path::PathBuf;

use arbor_core::error::{ArborError, Result};

pub struct ArborPaths;

impl ArborPaths {
    /// Returns the arbor configuration directory (`~/.config/arbor`).
    pub fn config_dir() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| ArborError::config("Could not determine home directory"))?;
        Ok(home.join(".config").join("arbor"))
    }

    /// Returns the path to the main configuration file.
    pub fn config_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }
}
