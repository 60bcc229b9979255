//! RGB565 color helpers
//!
//! Colors are plain `u16` RGB565 values, sent big-endian on the wire. With
//! the `graphics` feature they convert to and from
//! [`Rgb565`](embedded_graphics_core::pixelcolor::Rgb565).

#[cfg(feature = "graphics")]
use embedded_graphics_core::pixelcolor::{IntoStorage, Rgb565, raw::RawU16};

/// Black
pub const BLACK: u16 = 0x0000;

/// White
pub const WHITE: u16 = 0xFFFF;

/// Pack 8-bit channels into RGB565
///
/// Only the high bits of each channel are kept: 5 of red, 6 of green and
/// 5 of blue.
///
/// ```
/// use ili934x::color565;
///
/// assert_eq!(color565(0xFF, 0x00, 0x00), 0xF800);
/// assert_eq!(color565(0x00, 0xFF, 0x00), 0x07E0);
/// assert_eq!(color565(0x00, 0x00, 0xFF), 0x001F);
/// ```
pub const fn color565(r: u8, g: u8, b: u8) -> u16 {
    ((r as u16 & 0xF8) << 8) | ((g as u16 & 0xFC) << 3) | (b as u16 >> 3)
}

/// Rebuild a color from one pixel of memory read-back
///
/// The controller returns each pixel as `[R, B, G]`; the second byte is
/// blue and the third is green.
pub const fn from_read_back(pixel: [u8; 3]) -> u16 {
    let [r, b, g] = pixel;
    color565(r, g, b)
}

/// Convert an embedded-graphics color to the raw wire value
#[cfg(feature = "graphics")]
pub fn from_rgb565(color: Rgb565) -> u16 {
    color.into_storage()
}

/// Convert a raw wire value to an embedded-graphics color
#[cfg(feature = "graphics")]
pub fn to_rgb565(raw: u16) -> Rgb565 {
    Rgb565::from(RawU16::new(raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primaries() {
        assert_eq!(color565(0xFF, 0x00, 0x00), 0xF800);
        assert_eq!(color565(0x00, 0xFF, 0x00), 0x07E0);
        assert_eq!(color565(0x00, 0x00, 0xFF), 0x001F);
        assert_eq!(color565(0xFF, 0xFF, 0xFF), WHITE);
        assert_eq!(color565(0x00, 0x00, 0x00), BLACK);
    }

    #[test]
    fn test_low_bits_dropped() {
        assert_eq!(color565(0x07, 0x03, 0x07), 0x0000);
        assert_eq!(color565(0xFF, 0x11, 0x22), color565(0xF8, 0x10, 0x20));
    }

    #[test]
    fn test_read_back_channel_order() {
        // [R, B, G]
        assert_eq!(from_read_back([0xFF, 0x00, 0x00]), 0xF800);
        assert_eq!(from_read_back([0x00, 0xFF, 0x00]), 0x001F);
        assert_eq!(from_read_back([0x00, 0x00, 0xFF]), 0x07E0);
    }

    #[cfg(feature = "graphics")]
    #[test]
    fn test_rgb565_conversion() {
        use embedded_graphics_core::pixelcolor::RgbColor;

        assert_eq!(from_rgb565(Rgb565::RED), 0xF800);
        assert_eq!(from_rgb565(Rgb565::GREEN), 0x07E0);
        assert_eq!(to_rgb565(0x001F), Rgb565::BLUE);
    }
}
