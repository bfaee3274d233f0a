//! Menu entries
//!
//! One line of a menu: a static label, a navigation action, or a widget
//! bound to a configuration field.

use crate::error::CmsError;
use crate::menu::MenuId;
use crate::staging::Staging;
use crate::widget::{Bounded, EnumTable, Widget};
use std::ops::BitOr;

/// Callback run when an entry is activated. It only sees the current visit's staging.
pub type EntryCallback = fn(&mut Staging) -> Result<(), CmsError>;

#[derive(Debug, Clone, Copy)]
pub enum EntryAction {
    Submenu(MenuId),
    Callback(EntryCallback),
}

/// Entry flag set
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EntryFlags(u8);

impl EntryFlags {
    pub const NONE: Self = Self(0);
    /// Live mirror of its field: re-read every frame, never staged or committed
    pub const DYNAMIC: Self = Self(1 << 0);
    /// Displayed but never edited or committed
    pub const READ_ONLY: Self = Self(1 << 1);

    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for EntryFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

#[derive(Debug, Clone)]
pub struct Entry {
    pub label: String,
    pub widget: Widget,
    pub action: Option<EntryAction>,
    pub flags: EntryFlags,
}

impl Entry {
    fn new(label: impl Into<String>, widget: Widget) -> Self {
        Self {
            label: label.into(),
            widget,
            action: None,
            flags: EntryFlags::NONE,
        }
    }

    pub fn label(label: impl Into<String>) -> Self {
        Self::new(label, Widget::Label)
    }

    pub fn back() -> Self {
        Self::new("BACK", Widget::Back)
    }

    pub fn submenu(label: impl Into<String>, menu: MenuId) -> Self {
        let mut entry = Self::new(label, Widget::Submenu);
        entry.action = Some(EntryAction::Submenu(menu));
        entry
    }

    /// Label that runs `callback` when activated
    pub fn callback(label: impl Into<String>, callback: EntryCallback) -> Self {
        let mut entry = Self::new(label, Widget::Label);
        entry.action = Some(EntryAction::Callback(callback));
        entry
    }

    pub fn uint8(label: impl Into<String>, bounds: Bounded<u8>) -> Self {
        Self::new(label, Widget::UInt8(bounds))
    }

    pub fn int16(label: impl Into<String>, bounds: Bounded<i16>) -> Self {
        Self::new(label, Widget::Int16(bounds))
    }

    pub fn uint16(label: impl Into<String>, bounds: Bounded<u16>) -> Self {
        Self::new(label, Widget::UInt16(bounds))
    }

    pub fn enum_table(label: impl Into<String>, table: EnumTable) -> Self {
        Self::new(label, Widget::EnumTable(table))
    }

    pub fn with_flags(mut self, flags: EntryFlags) -> Self {
        self.flags = self.flags | flags;
        self
    }

    pub fn dynamic(self) -> Self {
        self.with_flags(EntryFlags::DYNAMIC)
    }

    pub fn read_only(self) -> Self {
        self.with_flags(EntryFlags::READ_ONLY)
    }

    pub fn is_dynamic(&self) -> bool {
        self.flags.contains(EntryFlags::DYNAMIC)
    }

    /// Whether the cursor may rest on this entry
    pub fn is_selectable(&self) -> bool {
        !matches!(self.widget, Widget::Label) || self.action.is_some()
    }

    pub fn is_editable(&self) -> bool {
        self.widget.is_editable()
            && !self.flags.contains(EntryFlags::DYNAMIC)
            && !self.flags.contains(EntryFlags::READ_ONLY)
    }
}
