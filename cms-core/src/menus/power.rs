use super::fields::*;
use super::names::{CURRENT_METER_SOURCE_NAMES, VOLTAGE_METER_SOURCE_NAMES};
use crate::config::Features;
use crate::entry::Entry;
use crate::menu::Menu;
use crate::store::FieldId;
use crate::widget::{Bounded, EnumTable, FieldRef};

const VBAT_SCALE_MIN: u8 = 0;
const VBAT_SCALE_MAX: u8 = 255;

fn current_sensor(label: &str, field: FieldId) -> Entry {
    Entry::int16(label, Bounded::new(FieldRef::new(field), -16000, 16000, 5))
}

pub(super) fn power(features: &Features) -> Menu {
    let mut menu = Menu::new("POWER")
        .entry(Entry::label("-- POWER --"))
        .entry(Entry::enum_table(
            "V METER",
            EnumTable::from_names(FieldRef::new(VOLTAGE_METER_SOURCE), VOLTAGE_METER_SOURCE_NAMES),
        ))
        .entry(Entry::enum_table(
            "I METER",
            EnumTable::from_names(FieldRef::new(CURRENT_METER_SOURCE), CURRENT_METER_SOURCE_NAMES),
        ))
        .entry(Entry::uint8(
            "VBAT CLMAX",
            Bounded::new(FieldRef::new(VBAT_MAX_CELL_VOLTAGE), 10, 50, 1),
        ))
        .entry(Entry::uint8(
            "VBAT SCALE",
            Bounded::new(FieldRef::new(VBAT_SCALE), VBAT_SCALE_MIN, VBAT_SCALE_MAX, 1),
        ))
        .entry(current_sensor("IBAT SCALE", CURRENT_ADC_SCALE))
        .entry(current_sensor("IBAT OFFSET", CURRENT_ADC_OFFSET));

    if features.virtual_current_meter {
        menu = menu
            .entry(current_sensor("IBAT VIRT SCALE", CURRENT_VIRTUAL_SCALE))
            .entry(current_sensor("IBAT VIRT OFFSET", CURRENT_VIRTUAL_OFFSET));
    }

    menu.entry(Entry::back())
}
