//! Configuration fields bound by the device menus

use crate::store::FieldId;

pub const MIN_THROTTLE: FieldId = FieldId::new("motor.min_throttle");
/// Stored in hundredths of a percent, shown in tenths
pub const DIGITAL_IDLE_OFFSET: FieldId = FieldId::new("motor.digital_idle_offset");
pub const DEBUG_MODE: FieldId = FieldId::new("system.debug_mode");

pub const RC_ROLL: FieldId = FieldId::new("rc.roll");
pub const RC_PITCH: FieldId = FieldId::new("rc.pitch");
pub const RC_THROTTLE: FieldId = FieldId::new("rc.throttle");
pub const RC_YAW: FieldId = FieldId::new("rc.yaw");
pub const RC_AUX1: FieldId = FieldId::new("rc.aux1");
pub const RC_AUX2: FieldId = FieldId::new("rc.aux2");
pub const RC_AUX3: FieldId = FieldId::new("rc.aux3");
pub const RC_AUX4: FieldId = FieldId::new("rc.aux4");

pub const RC_CHANNELS: [FieldId; 8] = [
    RC_ROLL,
    RC_PITCH,
    RC_THROTTLE,
    RC_YAW,
    RC_AUX1,
    RC_AUX2,
    RC_AUX3,
    RC_AUX4,
];

pub const VOLTAGE_METER_SOURCE: FieldId = FieldId::new("battery.voltage_meter_source");
pub const CURRENT_METER_SOURCE: FieldId = FieldId::new("battery.current_meter_source");
pub const VBAT_MAX_CELL_VOLTAGE: FieldId = FieldId::new("battery.vbat_max_cell_voltage");
pub const VBAT_SCALE: FieldId = FieldId::new("voltage_adc.vbat_scale");
pub const CURRENT_ADC_SCALE: FieldId = FieldId::new("current_adc.scale");
pub const CURRENT_ADC_OFFSET: FieldId = FieldId::new("current_adc.offset");
pub const CURRENT_VIRTUAL_SCALE: FieldId = FieldId::new("current_virtual.scale");
pub const CURRENT_VIRTUAL_OFFSET: FieldId = FieldId::new("current_virtual.offset");
