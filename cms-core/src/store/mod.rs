//! Config Store boundary
//!
//! The menu framework never owns configuration. It reads fields through
//! [`ConfigStore::read`] when a menu is entered and writes them back through
//! [`ConfigStore::commit`] when a menu exit is confirmed.
//!
//! - [`MemoryStore`] - in-memory store with TOML load/save
//! - [`SharedStore`] - lock-protected handle shared with other subsystems

mod memory;
mod shared;

pub use memory::MemoryStore;
pub use shared::SharedStore;

use std::fmt;
use thiserror::Error;
use tracing::warn;

/// Identifier of one configuration field, e.g. `motor.min_throttle`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FieldId(&'static str);

impl FieldId {
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// One pending write produced by a confirmed menu exit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldWrite {
    pub field: FieldId,
    pub value: i32,
}

/// Errors raised by a store when a field cannot be accessed or written
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("unknown configuration field '{field}'")]
    UnknownField { field: String },

    #[error("value {value} for field '{field}' is outside its storage range {min}..={max}")]
    OutOfRange {
        field: String,
        value: i32,
        min: i32,
        max: i32,
    },
}

/// Read and write access to configuration fields
pub trait ConfigStore {
    /// Current stored value of `field`, or `None` when the field does not exist
    fn read(&self, field: FieldId) -> Option<i32>;

    /// Write a single field
    fn write(&mut self, field: FieldId, value: i32) -> Result<(), StoreError>;

    /// Write every field or none of them.
    ///
    /// The default implementation snapshots all targets first, then writes in
    /// order and restores the snapshot if any write fails.
    fn commit(&mut self, writes: &[FieldWrite]) -> Result<(), StoreError> {
        let mut previous = Vec::with_capacity(writes.len());
        for write in writes {
            let old = self
                .read(write.field)
                .ok_or_else(|| StoreError::UnknownField {
                    field: write.field.to_string(),
                })?;
            previous.push((write.field, old));
        }

        for (applied, write) in writes.iter().enumerate() {
            if let Err(err) = self.write(write.field, write.value) {
                for (field, old) in previous[..applied].iter().rev() {
                    if let Err(restore_err) = self.write(*field, *old) {
                        warn!(field = %field, error = %restore_err, "Failed to restore field after aborted commit");
                    }
                }
                return Err(err);
            }
        }
        Ok(())
    }
}
