//! Error types for the driver
//!
//! This module defines error types for configuration building ([`BuilderError`])
//! and display operations ([`Error`]).
//!
//! ## Error Types
//!
//! - [`BuilderError`] - Errors during configuration construction
//! - [`Error`] - Runtime errors during display operations
//! - [`InterfaceError`](crate::interface::InterfaceError) - Low-level hardware communication errors
//!
//! Pixel-level contract violations are not errors: out-of-range writes are
//! dropped and rectangle fills are clamped.
//!
//! ## Example
//!
//! ```
//! use ili934x::{BuilderError, Dimensions};
//!
//! // Larger than the controller's frame memory
//! let result = Dimensions::new(320, 320);
//! assert!(matches!(result, Err(BuilderError::InvalidDimensions { .. })));
//! ```

use crate::interface::DisplayInterface;

/// Frame memory columns of the ILI9341 in its native orientation
pub const MAX_COLUMNS: u16 = 240;

/// Frame memory rows of the ILI9341 in its native orientation
pub const MAX_ROWS: u16 = 320;

/// Errors that can occur when interacting with the display
///
/// Generic over the interface type to preserve the specific error type.
pub enum Error<I: DisplayInterface> {
    /// Interface error (SPI/GPIO)
    ///
    /// Wraps the underlying hardware error from the [`DisplayInterface`] implementation.
    /// Chip select has been released; the controller's address window is unknown.
    Interface(I::Error),
    /// Pixel read outside the display surface
    OutOfBounds {
        /// Requested column
        x: i32,
        /// Requested row
        y: i32,
    },
    /// Read-back buffer does not match the window size
    ///
    /// A memory read returns 3 bytes per pixel.
    BufferSizeMismatch {
        /// Required buffer size in bytes
        required: usize,
        /// Provided buffer size in bytes
        provided: usize,
    },
}

impl<I: DisplayInterface> core::fmt::Debug for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::Interface(e) => f.debug_tuple("Interface").field(e).finish(),
            Error::OutOfBounds { x, y } => f
                .debug_struct("OutOfBounds")
                .field("x", x)
                .field("y", y)
                .finish(),
            Error::BufferSizeMismatch { required, provided } => f
                .debug_struct("BufferSizeMismatch")
                .field("required", required)
                .field("provided", provided)
                .finish(),
        }
    }
}

impl<I: DisplayInterface> PartialEq for Error<I>
where
    I::Error: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Error::Interface(a), Error::Interface(b)) => a == b,
            (Error::OutOfBounds { x: ax, y: ay }, Error::OutOfBounds { x: bx, y: by }) => {
                ax == bx && ay == by
            }
            (
                Error::BufferSizeMismatch {
                    required: ar,
                    provided: ap,
                },
                Error::BufferSizeMismatch {
                    required: br,
                    provided: bp,
                },
            ) => ar == br && ap == bp,
            _ => false,
        }
    }
}

impl<I: DisplayInterface> core::fmt::Display for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::Interface(e) => write!(f, "Interface error: {e:?}"),
            Error::OutOfBounds { x, y } => write!(f, "Pixel ({x}, {y}) is outside the display"),
            Error::BufferSizeMismatch { required, provided } => {
                write!(
                    f,
                    "Buffer size mismatch: required {required} bytes, provided {provided}"
                )
            }
        }
    }
}

impl<I: DisplayInterface> core::error::Error for Error<I> {}

/// Errors that can occur when building configuration
#[derive(Debug, PartialEq)]
pub enum BuilderError {
    /// Invalid dimensions provided
    ///
    /// See [`Dimensions::new()`](crate::config::Dimensions::new) for constraints.
    InvalidDimensions {
        /// Width in pixels requested
        width: u16,
        /// Height in pixels requested
        height: u16,
    },
}

impl core::fmt::Display for BuilderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BuilderError::InvalidDimensions { width, height } => write!(
                f,
                "Invalid dimensions {width}x{height} (must fit {MAX_COLUMNS}x{MAX_ROWS} in either orientation)"
            ),
        }
    }
}

impl core::error::Error for BuilderError {}
