//! ILI9341 / ILI9340 TFT Display Driver
//!
//! A driver for the ILI9341 and ILI9340 RGB565 LCD controllers over a
//! 4-wire SPI bus (SCK/MOSI/MISO plus CS, D/C and RST lines).
//!
//! ## Features
//!
//! - `no_std` compatible (`std` feature links the standard library)
//! - `embedded-hal` v1.0 support
//! - `embedded-graphics` integration (with `graphics` feature)
//! - 8x8 bitmap text with wrapping and a scrolling console
//! - Glyphs from embedded-graphics mono fonts (with `mono-font` feature)
//! - Hardware vertical scrolling
//! - Frame memory read-back
//!
//! ## Usage
//!
//! ```rust,no_run
//! use core::convert::Infallible;
//! use embedded_hal::delay::DelayNs;
//! use embedded_hal::digital::OutputPin;
//! use embedded_hal::spi::SpiBus;
//! use ili934x::{Builder, Dimensions, Display, Interface, color565};
//!
//! # struct MockSpi;
//! # impl embedded_hal::spi::ErrorType for MockSpi { type Error = Infallible; }
//! # impl SpiBus for MockSpi {
//! #     fn read(&mut self, _words: &mut [u8]) -> Result<(), Self::Error> { Ok(()) }
//! #     fn write(&mut self, _words: &[u8]) -> Result<(), Self::Error> { Ok(()) }
//! #     fn transfer(&mut self, _read: &mut [u8], _write: &[u8]) -> Result<(), Self::Error> {
//! #         Ok(())
//! #     }
//! #     fn transfer_in_place(&mut self, _words: &mut [u8]) -> Result<(), Self::Error> { Ok(()) }
//! #     fn flush(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # struct MockPin;
//! # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
//! # impl OutputPin for MockPin {
//! #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # struct MockDelay;
//! # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
//! # let spi = MockSpi;
//! # let cs = MockPin;
//! # let dc = MockPin;
//! # let rst = MockPin;
//! # let mut delay = MockDelay;
//! let interface = Interface::new(spi, cs, dc, rst);
//! let dims = match Dimensions::new(320, 240) {
//!     Ok(dims) => dims,
//!     Err(_) => return,
//! };
//! let config = Builder::new().dimensions(dims).build();
//!
//! let mut display = match Display::new(interface, config, &mut delay) {
//!     Ok(display) => display,
//!     Err(_) => return,
//! };
//! let _ = display.fill(color565(0, 0, 64));
//! let _ = display.fill_rectangle(10, 10, 100, 50, color565(255, 128, 0));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(test)]
extern crate alloc;

/// RGB565 color helpers
pub mod color;
/// ILI9341 command definitions
pub mod command;
/// Display configuration types and builder
pub mod config;
/// Core display operations
pub mod display;
/// Error types for the driver
pub mod error;
/// Power-on initialization table
pub mod init;
/// Hardware interface abstraction
pub mod interface;
/// Bitmap text rendering
pub mod text;

/// Graphics support via embedded-graphics (requires `graphics` feature)
#[cfg(feature = "graphics")]
pub mod graphics;

/// Glyphs from embedded-graphics mono fonts (requires `mono-font` feature)
#[cfg(feature = "mono-font")]
pub mod mono_font;

pub use color::color565;
pub use config::{Builder, Config, Dimensions, MAX_COLUMNS, MAX_ROWS};
pub use display::{Display, FILL_CHUNK_PIXELS};
pub use error::{BuilderError, Error};
pub use interface::InterfaceError;
pub use interface::{DisplayInterface, Interface, RESET_PULSE_MS};
pub use text::{GlyphSource, TextStyle};

#[cfg(feature = "mono-font")]
pub use mono_font::MonoFontGlyphs;
