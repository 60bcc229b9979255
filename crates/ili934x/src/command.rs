//! ILI9341 command definitions
//!
//! Command bytes are sent with the DC pin low; their parameters follow in a
//! separate transaction with the DC pin high. Multi-byte parameters are
//! big-endian.
//!
//! Only the subset needed for RGB565 framebuffer access and the power-on
//! configuration is defined here.

// System control

/// Undocumented vendor command (0xEF)
///
/// Not in the datasheet command table; sent first by the vendor power-on
/// sequence with three parameter bytes.
pub const VENDOR_INIT: u8 = 0xEF;

/// Sleep out (0x11)
///
/// Wakes the panel from sleep. The controller needs 120ms before the next
/// command that changes the display state.
pub const SLEEP_OUT: u8 = 0x11;

/// Gamma set (0x26)
pub const GAMMA_SET: u8 = 0x26;

/// Display on (0x29)
pub const DISPLAY_ON: u8 = 0x29;

// Addressing and memory access

/// Column address set (0x2A)
///
/// 4 bytes: start column (BE), end column (BE).
pub const COLUMN_ADDRESS_SET: u8 = 0x2A;

/// Page address set (0x2B)
///
/// 4 bytes: start row (BE), end row (BE).
pub const PAGE_ADDRESS_SET: u8 = 0x2B;

/// Memory write (0x2C)
///
/// Followed by RGB565 big-endian pixel data for the current window.
pub const MEMORY_WRITE: u8 = 0x2C;

/// Memory read (0x2E)
///
/// Returns 3 bytes per pixel for the current window.
pub const MEMORY_READ: u8 = 0x2E;

/// Memory access control (0x36)
pub const MEMORY_ACCESS_CONTROL: u8 = 0x36;

/// Vertical scrolling start address (0x37)
///
/// 2 bytes: line shown at the top of the scroll area (BE).
pub const VERTICAL_SCROLL_START: u8 = 0x37;

/// Pixel format set (0x3A)
pub const PIXEL_FORMAT_SET: u8 = 0x3A;

// Panel timing

/// Frame rate control, normal mode (0xB1)
pub const FRAME_RATE_CONTROL_1: u8 = 0xB1;

/// Display function control (0xB6)
pub const DISPLAY_FUNCTION_CONTROL: u8 = 0xB6;

// Power

/// Power control 1 (0xC0)
pub const POWER_CONTROL_1: u8 = 0xC0;

/// Power control 2 (0xC1)
pub const POWER_CONTROL_2: u8 = 0xC1;

/// VCOM control 1 (0xC5)
pub const VCOM_CONTROL_1: u8 = 0xC5;

/// VCOM control 2 (0xC7)
pub const VCOM_CONTROL_2: u8 = 0xC7;

/// Power control A (0xCB)
pub const POWER_CONTROL_A: u8 = 0xCB;

/// Power control B (0xCF)
pub const POWER_CONTROL_B: u8 = 0xCF;

/// Positive gamma correction (0xE0)
pub const POSITIVE_GAMMA_CORRECTION: u8 = 0xE0;

/// Negative gamma correction (0xE1)
pub const NEGATIVE_GAMMA_CORRECTION: u8 = 0xE1;

/// Driver timing control A (0xE8)
pub const DRIVER_TIMING_CONTROL_A: u8 = 0xE8;

/// Driver timing control B (0xEA)
pub const DRIVER_TIMING_CONTROL_B: u8 = 0xEA;

/// Power on sequence control (0xED)
pub const POWER_ON_SEQUENCE_CONTROL: u8 = 0xED;

/// Enable 3 gamma control (0xF2)
pub const ENABLE_3G: u8 = 0xF2;

/// Pump ratio control (0xF7)
pub const PUMP_RATIO_CONTROL: u8 = 0xF7;
