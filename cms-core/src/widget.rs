//! Widget value model
//!
//! The closed set of value types a menu entry can show. Every editable
//! widget clamps its edits into its declared bounds; nothing wraps around.
//!
//! Staged values are carried as `i32` in *display* units. A [`Transform`]
//! converts between the stored representation and what the operator sees.

use crate::store::FieldId;
use std::fmt;

/// Conversion between the stored value of a field and its displayed value
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Transform {
    #[default]
    Identity,
    /// Stored value is `factor` times the displayed value
    Scale(u16),
}

impl Transform {
    /// Stored → displayed. Truncates values that are not a multiple of the factor.
    pub fn to_display(self, stored: i32) -> i32 {
        match self {
            Transform::Identity => stored,
            Transform::Scale(factor) => stored / i32::from(factor.max(1)),
        }
    }

    /// Displayed → stored. Exact inverse for every multiple of the factor.
    pub fn to_stored(self, display: i32) -> i32 {
        match self {
            Transform::Identity => display,
            Transform::Scale(factor) => display.saturating_mul(i32::from(factor.max(1))),
        }
    }
}

/// The configuration field a widget is bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRef {
    pub field: FieldId,
    pub transform: Transform,
}

impl FieldRef {
    pub const fn new(field: FieldId) -> Self {
        Self {
            field,
            transform: Transform::Identity,
        }
    }

    pub const fn scaled(field: FieldId, factor: u16) -> Self {
        Self {
            field,
            transform: Transform::Scale(factor),
        }
    }
}

/// Integer storage types a bounded widget can edit
pub trait IntegerValue: Copy + fmt::Debug + PartialOrd + Into<i32> {}

impl IntegerValue for u8 {}
impl IntegerValue for i16 {}
impl IntegerValue for u16 {}

/// Bounded integer widget: `(min, max, step)` in the field's own type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounded<T> {
    pub field: FieldRef,
    pub min: T,
    pub max: T,
    pub step: T,
}

impl<T: IntegerValue> Bounded<T> {
    pub fn new(field: FieldRef, min: T, max: T, step: T) -> Self {
        Self {
            field,
            min,
            max,
            step,
        }
    }

    pub fn is_valid(&self) -> bool {
        let step: i32 = self.step.into();
        self.min <= self.max && step > 0
    }

    /// Pull `value` into `[min, max]`
    pub fn clamp(&self, value: i32) -> i32 {
        let (lo, hi): (i32, i32) = (self.min.into(), self.max.into());
        value.max(lo).min(hi)
    }

    /// `clamp(current + delta * step, min, max)`
    pub fn edit(&self, current: i32, delta: i32) -> i32 {
        let step: i32 = self.step.into();
        let moved = i64::from(current) + i64::from(delta) * i64::from(step);
        let moved = moved.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32;
        self.clamp(moved)
    }
}

/// Enumerated widget: an index into a fixed name table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnumTable {
    pub field: FieldRef,
    pub max_index: usize,
    pub names: &'static [&'static str],
}

impl EnumTable {
    pub fn new(field: FieldRef, max_index: usize, names: &'static [&'static str]) -> Self {
        Self {
            field,
            max_index,
            names,
        }
    }

    /// Table covering every name in `names`
    pub fn from_names(field: FieldRef, names: &'static [&'static str]) -> Self {
        Self::new(field, names.len().saturating_sub(1), names)
    }

    pub fn is_valid(&self) -> bool {
        self.names.len() > self.max_index
    }

    pub fn edit(&self, current: i32, delta: i32) -> i32 {
        let max = i64::from(u32::try_from(self.max_index).unwrap_or(u32::MAX));
        let moved = i64::from(current) + i64::from(delta);
        moved.max(0).min(max).min(i64::from(i32::MAX)) as i32
    }

    pub fn name(&self, index: i32) -> Option<&'static str> {
        let index = usize::try_from(index).ok()?;
        if index > self.max_index {
            return None;
        }
        self.names.get(index).copied()
    }
}

/// The closed set of entry widgets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Widget {
    Label,
    Back,
    Submenu,
    UInt8(Bounded<u8>),
    Int16(Bounded<i16>),
    UInt16(Bounded<u16>),
    EnumTable(EnumTable),
}

impl Widget {
    /// Field this widget displays, if any
    pub fn field(&self) -> Option<&FieldRef> {
        match self {
            Widget::Label | Widget::Back | Widget::Submenu => None,
            Widget::UInt8(b) => Some(&b.field),
            Widget::Int16(b) => Some(&b.field),
            Widget::UInt16(b) => Some(&b.field),
            Widget::EnumTable(t) => Some(&t.field),
        }
    }

    pub fn is_editable(&self) -> bool {
        self.field().is_some()
    }

    /// Apply `delta` clicks to `current`. A no-op for non-value widgets.
    pub fn edit(&self, current: i32, delta: i32) -> i32 {
        match self {
            Widget::Label | Widget::Back | Widget::Submenu => current,
            Widget::UInt8(b) => b.edit(current, delta),
            Widget::Int16(b) => b.edit(current, delta),
            Widget::UInt16(b) => b.edit(current, delta),
            Widget::EnumTable(t) => t.edit(current, delta),
        }
    }

    /// Text shown next to the label for `value`.
    ///
    /// A stored enum index outside the table renders as `?<index>`; the first
    /// edit clamps it back into the table.
    pub fn display(&self, value: i32) -> Option<String> {
        match self {
            Widget::Label | Widget::Back | Widget::Submenu => None,
            Widget::UInt8(_) | Widget::Int16(_) | Widget::UInt16(_) => Some(value.to_string()),
            Widget::EnumTable(t) => Some(match t.name(value) {
                Some(name) => name.to_string(),
                None => format!("?{value}"),
            }),
        }
    }

    pub(crate) fn is_well_formed(&self) -> bool {
        match self {
            Widget::Label | Widget::Back | Widget::Submenu => true,
            Widget::UInt8(b) => b.is_valid(),
            Widget::Int16(b) => b.is_valid(),
            Widget::UInt16(b) => b.is_valid(),
            Widget::EnumTable(t) => t.is_valid(),
        }
    }
}
