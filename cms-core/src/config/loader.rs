use super::error::ConfigError;
use super::{CONFIG_PATH, CmsConfig};
use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, info};

/// Load configuration from `path`, or from the default path.
///
/// A missing file at the default path yields the defaults; a missing file at
/// an explicit path is an error.
pub fn load_config(path: Option<&Path>) -> Result<CmsConfig, ConfigError> {
    match path {
        Some(path) => read_config(path),
        None => match read_config(Path::new(CONFIG_PATH)) {
            Err(ConfigError::NotFound { .. }) => {
                info!(path = CONFIG_PATH, "No configuration file, using defaults");
                Ok(CmsConfig::default())
            }
            other => other,
        },
    }
}

fn read_config(path: &Path) -> Result<CmsConfig, ConfigError> {
    debug!(path = %path.display(), "Reading configuration file");

    let content = fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            ConfigError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            ConfigError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
