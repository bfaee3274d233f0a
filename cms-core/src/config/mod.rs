//! Host configuration for the menu front end
//!
//! Loaded from `config/cms.toml` unless a path is given. Controls where the
//! configuration store is persisted and which optional hardware entries the
//! menu topology exposes.

pub mod error;
mod loader;

pub use error::ConfigError;
pub use loader::load_config;

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default config file path - can be overridden via CLI argument
pub const CONFIG_PATH: &str = "config/cms.toml";

/// Default location of the persisted configuration store
pub const STORE_PATH: &str = "config/store.toml";

/// Optional hardware capabilities, consulted when the menu tree is built
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Features {
    pub virtual_current_meter: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CmsConfig {
    pub store_path: String,
    pub save_on_exit: bool,
    pub features: Features,
}

impl Default for CmsConfig {
    fn default() -> Self {
        Self {
            store_path: STORE_PATH.to_string(),
            save_on_exit: true,
            features: Features::default(),
        }
    }
}

impl CmsConfig {
    /// Load configuration from a file path (or default path if None)
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        load_config(path)
    }

    /// Store path with `~` and environment variables expanded
    pub fn store_path(&self) -> PathBuf {
        match shellexpand::full(&self.store_path) {
            Ok(expanded) => PathBuf::from(expanded.as_ref()),
            Err(_) => PathBuf::from(&self.store_path),
        }
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string(self).map_err(|source| ConfigError::Serialize { source })
    }
}
