//! Per-visit staging record
//!
//! Owned by the navigation frame of the menu visit that created it and
//! dropped with that frame, so staged values cannot outlive the visit.

use crate::store::FieldId;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Staged {
    original: i32,
    current: i32,
}

/// Transient copies of configuration values, in display units
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Staging {
    staged: BTreeMap<FieldId, Staged>,
    live: BTreeMap<FieldId, i32>,
}

impl Staging {
    pub(crate) fn stage(&mut self, field: FieldId, value: i32) {
        self.staged.insert(
            field,
            Staged {
                original: value,
                current: value,
            },
        );
    }

    pub(crate) fn mirror(&mut self, field: FieldId, value: i32) {
        self.live.insert(field, value);
    }

    /// Staged value of `field`, falling back to its live mirror
    pub fn value(&self, field: FieldId) -> Option<i32> {
        self.staged
            .get(&field)
            .map(|s| s.current)
            .or_else(|| self.live.get(&field).copied())
    }

    /// Value of `field` as it was when the visit began
    pub fn original(&self, field: FieldId) -> Option<i32> {
        self.staged.get(&field).map(|s| s.original)
    }

    /// Overwrite a staged value. Returns `false` if `field` is not staged.
    ///
    /// No bounds are applied here; widgets clamp through [`Widget::edit`](crate::widget::Widget::edit).
    pub fn set(&mut self, field: FieldId, value: i32) -> bool {
        match self.staged.get_mut(&field) {
            Some(staged) => {
                staged.current = value;
                true
            }
            None => false,
        }
    }

    pub fn is_dirty(&self) -> bool {
        self.staged.values().any(|s| s.current != s.original)
    }

    /// Staged fields whose value differs from the one read at entry
    pub fn changed(&self) -> impl Iterator<Item = (FieldId, i32)> + '_ {
        self.staged
            .iter()
            .filter(|(_, s)| s.current != s.original)
            .map(|(field, s)| (*field, s.current))
    }
}
