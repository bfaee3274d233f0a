use super::{ConfigStore, FieldId, StoreError};
use crate::config::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::io;
use std::ops::RangeInclusive;
use std::path::Path;
use tracing::{debug, warn};

/// In-memory configuration store.
///
/// Each field may carry a storage range (the width of the underlying
/// firmware field); writes outside it are refused. Values persist as a
/// `[fields]` TOML table, ranges are not persisted. Volatile fields (live
/// inputs such as RC channels) are readable and writable but never saved
/// or merged from disk.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MemoryStore {
    #[serde(default)]
    fields: BTreeMap<String, i32>,
    #[serde(skip)]
    limits: BTreeMap<String, RangeInclusive<i32>>,
    #[serde(skip)]
    volatile: BTreeSet<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_field(mut self, field: FieldId, value: i32) -> Self {
        self.fields.insert(field.as_str().to_string(), value);
        self
    }

    /// Declare the storage range of a field
    pub fn with_limit(mut self, field: FieldId, range: RangeInclusive<i32>) -> Self {
        self.limits.insert(field.as_str().to_string(), range);
        self
    }

    /// Mark a field as runtime-only
    pub fn with_volatile(mut self, field: FieldId) -> Self {
        self.volatile.insert(field.as_str().to_string());
        self
    }

    pub fn get(&self, name: &str) -> Option<i32> {
        self.fields.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Overlay values from `other` onto fields this store already knows.
    ///
    /// Unknown fields and values outside the storage range are skipped.
    pub fn merge(&mut self, other: &MemoryStore) {
        for (name, value) in &other.fields {
            if !self.fields.contains_key(name) {
                warn!(field = %name, "Ignoring unknown field from stored configuration");
                continue;
            }
            if self.volatile.contains(name) {
                debug!(field = %name, "Ignoring stored value of volatile field");
                continue;
            }
            if let Some(range) = self.limits.get(name) {
                if !range.contains(value) {
                    warn!(field = %name, value, "Ignoring out-of-range stored value");
                    continue;
                }
            }
            self.fields.insert(name.clone(), *value);
        }
    }

    /// Load field values from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        debug!(path = %path.display(), "Reading configuration store");
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

    /// Persist field values as TOML, creating parent directories as needed
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let persisted = MemoryStore {
            fields: self
                .fields
                .iter()
                .filter(|(name, _)| !self.volatile.contains(*name))
                .map(|(name, value)| (name.clone(), *value))
                .collect(),
            ..MemoryStore::default()
        };
        let raw = toml::to_string(&persisted).map_err(|source| ConfigError::Serialize { source })?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| ConfigError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(path, raw).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), fields = persisted.len(), "Saved configuration store");
        Ok(())
    }
}

impl ConfigStore for MemoryStore {
    fn read(&self, field: FieldId) -> Option<i32> {
        self.fields.get(field.as_str()).copied()
    }

    fn write(&mut self, field: FieldId, value: i32) -> Result<(), StoreError> {
        let Some(slot) = self.fields.get_mut(field.as_str()) else {
            return Err(StoreError::UnknownField {
                field: field.to_string(),
            });
        };
        if let Some(range) = self.limits.get(field.as_str()) {
            if !range.contains(&value) {
                return Err(StoreError::OutOfRange {
                    field: field.to_string(),
                    value,
                    min: *range.start(),
                    max: *range.end(),
                });
            }
        }
        *slot = value;
        Ok(())
    }
}
