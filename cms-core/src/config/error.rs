use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when loading or saving configuration files
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("configuration file not found at {path:?}")]
    NotFound { path: PathBuf },

    #[error("failed to access {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to serialize configuration: {source}")]
    Serialize {
        #[source]
        source: toml::ser::Error,
    },
}
