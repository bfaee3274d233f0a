//! Device menu topology
//!
//! The menus shipped with the flight controller: a root menu leading to
//! MISC (with its live RC preview) and POWER. Optional hardware entries are
//! decided here, once, from [`Features`].

pub mod fields;
pub mod names;

mod misc;
mod power;

use crate::config::Features;
use crate::entry::Entry;
use crate::error::CmsError;
use crate::menu::Menu;
use crate::store::MemoryStore;
use crate::tree::MenuTree;
use fields::*;

/// Build the full menu tree for the given hardware features
pub fn build_menu_tree(features: &Features) -> Result<MenuTree, CmsError> {
    let mut builder = MenuTree::builder();

    let rc_preview = builder.add(misc::rc_preview());
    let misc_menu = builder.add(misc::misc(rc_preview));
    let power_menu = builder.add(power::power(features));

    let root = builder.add(
        Menu::new("MAIN")
            .entry(Entry::label("-- MAIN --"))
            .entry(Entry::submenu("MISC", misc_menu))
            .entry(Entry::submenu("POWER", power_menu))
            .entry(Entry::back()),
    );

    builder.build(root)
}

/// Store seeded with factory defaults and the storage width of every field.
///
/// RC channels are live receiver input and are marked volatile.
pub fn default_store() -> MemoryStore {
    const U8: std::ops::RangeInclusive<i32> = 0..=255;
    const U16: std::ops::RangeInclusive<i32> = 0..=65535;
    const I16: std::ops::RangeInclusive<i32> = -32768..=32767;

    let mut store = MemoryStore::new()
        .with_field(MIN_THROTTLE, misc::DEFAULT_MIN_THROTTLE)
        .with_limit(MIN_THROTTLE, U16)
        .with_field(DIGITAL_IDLE_OFFSET, misc::DEFAULT_DIGITAL_IDLE_OFFSET)
        .with_limit(DIGITAL_IDLE_OFFSET, U16)
        .with_field(DEBUG_MODE, 0)
        .with_limit(DEBUG_MODE, 0..=(names::DEBUG_MODE_NAMES.len() as i32 - 1))
        .with_field(VOLTAGE_METER_SOURCE, 1)
        .with_limit(VOLTAGE_METER_SOURCE, 0..=(names::VOLTAGE_METER_SOURCE_NAMES.len() as i32 - 1))
        .with_field(CURRENT_METER_SOURCE, 1)
        .with_limit(CURRENT_METER_SOURCE, 0..=(names::CURRENT_METER_SOURCE_NAMES.len() as i32 - 1))
        .with_field(VBAT_MAX_CELL_VOLTAGE, 43)
        .with_limit(VBAT_MAX_CELL_VOLTAGE, U8)
        .with_field(VBAT_SCALE, 110)
        .with_limit(VBAT_SCALE, U8)
        .with_field(CURRENT_ADC_SCALE, 400)
        .with_limit(CURRENT_ADC_SCALE, I16)
        .with_field(CURRENT_ADC_OFFSET, 0)
        .with_limit(CURRENT_ADC_OFFSET, I16)
        .with_field(CURRENT_VIRTUAL_SCALE, 0)
        .with_limit(CURRENT_VIRTUAL_SCALE, I16)
        .with_field(CURRENT_VIRTUAL_OFFSET, 0)
        .with_limit(CURRENT_VIRTUAL_OFFSET, I16);

    for channel in RC_CHANNELS {
        let idle = if channel == RC_THROTTLE { 1000 } else { 1500 };
        store = store
            .with_field(channel, idle)
            .with_limit(channel, I16)
            .with_volatile(channel);
    }
    store
}
