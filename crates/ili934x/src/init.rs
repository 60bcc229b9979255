//! Power-on configuration sequence
//!
//! The table is replayed in order, once, after the hardware reset. Each
//! entry is sent as a command transaction followed by a data transaction.
//! Later entries rely on state set by earlier ones, so the order is part of
//! the contract.

use crate::command::{
    DISPLAY_FUNCTION_CONTROL, DRIVER_TIMING_CONTROL_A, DRIVER_TIMING_CONTROL_B, ENABLE_3G,
    FRAME_RATE_CONTROL_1, GAMMA_SET, MEMORY_ACCESS_CONTROL, NEGATIVE_GAMMA_CORRECTION,
    PIXEL_FORMAT_SET, POSITIVE_GAMMA_CORRECTION, POWER_CONTROL_1, POWER_CONTROL_2,
    POWER_CONTROL_A, POWER_CONTROL_B, POWER_ON_SEQUENCE_CONTROL, PUMP_RATIO_CONTROL, VCOM_CONTROL_1,
    VCOM_CONTROL_2, VENDOR_INIT,
};

/// One `(command, parameters)` step of the initialization sequence
pub type InitStep = (u8, &'static [u8]);

/// MADCTL value used when the configuration does not override it
///
/// BGR subpixel order, no row/column exchange.
pub const DEFAULT_MEMORY_ACCESS_CONTROL: u8 = 0x08;

/// Pixel format 16 bits per pixel (RGB565) on both interfaces
pub const PIXEL_FORMAT_RGB565: u8 = 0x55;

/// Initialization table for ILI9341/ILI9340 panels
pub const INIT_SEQUENCE: [InitStep; 19] = [
    (VENDOR_INIT, &[0x03, 0x80, 0x02]),
    (POWER_CONTROL_B, &[0x00, 0xC1, 0x30]),
    (POWER_ON_SEQUENCE_CONTROL, &[0x64, 0x03, 0x12, 0x81]),
    (DRIVER_TIMING_CONTROL_A, &[0x85, 0x00, 0x78]),
    (POWER_CONTROL_A, &[0x39, 0x2C, 0x00, 0x34, 0x02]),
    (PUMP_RATIO_CONTROL, &[0x20]),
    (DRIVER_TIMING_CONTROL_B, &[0x00, 0x00]),
    (POWER_CONTROL_1, &[0x23]),
    (POWER_CONTROL_2, &[0x10]),
    (VCOM_CONTROL_1, &[0x3E, 0x28]),
    (VCOM_CONTROL_2, &[0x86]),
    (MEMORY_ACCESS_CONTROL, &[DEFAULT_MEMORY_ACCESS_CONTROL]),
    (PIXEL_FORMAT_SET, &[PIXEL_FORMAT_RGB565]),
    (FRAME_RATE_CONTROL_1, &[0x00, 0x18]),
    (DISPLAY_FUNCTION_CONTROL, &[0x08, 0x82, 0x27]),
    (ENABLE_3G, &[0x00]),
    (GAMMA_SET, &[0x01]),
    (
        POSITIVE_GAMMA_CORRECTION,
        &[
            0x0F, 0x31, 0x2B, 0x0C, 0x0E, 0x08, 0x4E, 0xF1, 0x37, 0x07, 0x10, 0x03, 0x0E, 0x09,
            0x00,
        ],
    ),
    (
        NEGATIVE_GAMMA_CORRECTION,
        &[
            0x00, 0x0E, 0x14, 0x03, 0x11, 0x07, 0x31, 0xC1, 0x48, 0x08, 0x0F, 0x0C, 0x31, 0x36,
            0x0F,
        ],
    ),
];
