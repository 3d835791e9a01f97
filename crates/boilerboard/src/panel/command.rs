// SSD1677 command set used by the panel driver

// Initialization and reset
pub const SOFT_RESET: u8 = 0x12;
pub const BOOSTER_SOFT_START: u8 = 0x0C;
pub const DRIVER_OUTPUT_CONTROL: u8 = 0x01;
pub const BORDER_WAVEFORM: u8 = 0x3C;
pub const TEMP_SENSOR_CONTROL: u8 = 0x18;

// RAM windowing
pub const DATA_ENTRY_MODE: u8 = 0x11;
pub const SET_RAM_X_RANGE: u8 = 0x44;
pub const SET_RAM_Y_RANGE: u8 = 0x45;
pub const SET_RAM_X_COUNTER: u8 = 0x4E;
pub const SET_RAM_Y_COUNTER: u8 = 0x4F;
pub const WRITE_RAM_BW: u8 = 0x24;
pub const AUTO_WRITE_BW_RAM: u8 = 0x46;
pub const AUTO_WRITE_RED_RAM: u8 = 0x47;

// Refresh
pub const DISPLAY_UPDATE_CTRL1: u8 = 0x21;
pub const DISPLAY_UPDATE_CTRL2: u8 = 0x22;
pub const MASTER_ACTIVATION: u8 = 0x20;
pub const CTRL1_BYPASS_RED: u8 = 0x40; // treat RED RAM as 0 for a full refresh

// Power
pub const DEEP_SLEEP: u8 = 0x10;

// Parameter bytes
pub const DATA_ENTRY_X_INC_Y_DEC: u8 = 0x01; // gates are wired in reverse
pub const GATE_SCAN_DEFAULT: u8 = 0x02;
pub const AUTO_WRITE_WHITE: u8 = 0xF7;
pub const POWER_ON_BITS: u8 = 0xC0; // CLOCK_ON | ANALOG_ON
pub const FULL_REFRESH_BITS: u8 = 0x34; // TEMP_LOAD | LUT_LOAD | DISPLAY_START
pub const POWER_OFF_BITS: u8 = 0x03; // ANALOG_OFF | CLOCK_OFF
