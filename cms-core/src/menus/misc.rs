use super::fields::*;
use super::names::DEBUG_MODE_NAMES;
use crate::entry::Entry;
use crate::error::CmsError;
use crate::menu::{ExitPolicy, Menu, MenuId};
use crate::staging::Staging;
use crate::widget::{Bounded, EnumTable, FieldRef};

pub(super) const DEFAULT_MIN_THROTTLE: i32 = 1070;
pub(super) const DEFAULT_DIGITAL_IDLE_OFFSET: i32 = 550;

/// Live RC channel preview. Closes only through its own BACK entry.
pub(super) fn rc_preview() -> Menu {
    const LABELS: [&str; 8] = ["ROLL", "PITCH", "THR", "YAW", "AUX1", "AUX2", "AUX3", "AUX4"];

    Menu::new("RC PREV")
        .entry(Entry::label("-- RC PREV --"))
        .entries(LABELS.iter().zip(RC_CHANNELS).map(|(label, field)| {
            Entry::int16(*label, Bounded::new(FieldRef::new(field), 1, 2500, 1)).dynamic()
        }))
        .entry(Entry::back())
        .exit_policy(ExitPolicy::OwnBackOnly)
}

pub(super) fn misc(rc_preview: MenuId) -> Menu {
    Menu::new("MISC")
        .entry(Entry::label("-- MISC --"))
        .entry(Entry::uint16(
            "MIN THR",
            Bounded::new(FieldRef::new(MIN_THROTTLE), 1000, 2000, 1),
        ))
        .entry(Entry::uint8(
            "DIGITAL IDLE",
            Bounded::new(FieldRef::scaled(DIGITAL_IDLE_OFFSET, 10), 0, 200, 1),
        ))
        .entry(Entry::enum_table(
            "DEBUG MODE",
            EnumTable::from_names(FieldRef::new(DEBUG_MODE), DEBUG_MODE_NAMES),
        ))
        .entry(Entry::submenu("RC PREV", rc_preview))
        .entry(Entry::callback("DEFAULTS", restore_defaults))
        .entry(Entry::back())
}

/// Reset the staged motor values; nothing reaches the store until exit
fn restore_defaults(staging: &mut Staging) -> Result<(), CmsError> {
    let defaults = [
        (MIN_THROTTLE, DEFAULT_MIN_THROTTLE),
        (DIGITAL_IDLE_OFFSET, DEFAULT_DIGITAL_IDLE_OFFSET / 10),
        (DEBUG_MODE, 0),
    ];
    for (field, value) in defaults {
        if !staging.set(field, value) {
            return Err(CmsError::ActionFailed {
                entry: "DEFAULTS".to_string(),
                reason: format!("field '{field}' is not staged"),
            });
        }
    }
    Ok(())
}
