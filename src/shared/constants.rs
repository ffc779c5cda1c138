pub const APP_NAME: &str = "pixelgrid";

pub const PIXELGRID_CONFIG_FILE: &str = "pixelgrid.config";
pub const ERROR_LOG_FILE: &str = "error.log";
pub const DEBUG_LOG_FILE: &str = "debug.log";

/// Side length of the LED matrix the firmware drives
pub const MATRIX_SIZE: usize = 16;

/// Each matrix row is sent as this many packets
pub const PACKETS_PER_ROW: usize = 4;
pub const BYTES_PER_PIXEL: usize = 4;

/// Drawn with the upper pixel as foreground, lower pixel as background
pub const HALF_BLOCK: char = '▀';
