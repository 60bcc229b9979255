//! Display configuration types and builder

use crate::init::DEFAULT_MEMORY_ACCESS_CONTROL;

pub use crate::error::{BuilderError, MAX_COLUMNS, MAX_ROWS};

/// Default logical width (landscape)
pub const DEFAULT_WIDTH: u16 = 320;

/// Default logical height (landscape)
pub const DEFAULT_HEIGHT: u16 = 240;

/// Display dimensions
///
/// Only [`Dimensions::new`] creates them, so both sides are always nonzero
/// and fit the frame memory.
///
/// ```compile_fail
/// use ili934x::Dimensions;
///
/// let dims = Dimensions { width: 0, height: 0 };
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dimensions {
    width: u16,
    height: u16,
}

impl Dimensions {
    /// Create new dimensions with validation
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::InvalidDimensions` if either side is zero, or
    /// the surface does not fit the 240x320 frame memory in portrait or
    /// landscape orientation.
    pub fn new(width: u16, height: u16) -> Result<Self, BuilderError> {
        let portrait = width <= MAX_COLUMNS && height <= MAX_ROWS;
        let landscape = width <= MAX_ROWS && height <= MAX_COLUMNS;
        if width == 0 || height == 0 || !(portrait || landscape) {
            return Err(BuilderError::InvalidDimensions { width, height });
        }
        Ok(Self { width, height })
    }

    /// Width in pixels (column addresses)
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Height in pixels (page addresses, also the scroll range)
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Number of pixels on the surface
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Whether `(x, y)` addresses a pixel on the surface
    pub fn contains(&self, x: i32, y: i32) -> bool {
        (0..i32::from(self.width)).contains(&x) && (0..i32::from(self.height)).contains(&y)
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

/// Display configuration
///
/// Use `Builder` to create a Config.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Display dimensions
    pub dimensions: Dimensions,
    /// Memory access control (MADCTL) byte sent during initialization
    pub memory_access_control: u8,
}

impl Default for Config {
    fn default() -> Self {
        Builder::new().build()
    }
}

/// Builder for constructing display configuration
///
/// # Example
///
/// ```
/// use ili934x::{Builder, Dimensions};
///
/// let config = Builder::new()
///     .dimensions(Dimensions::new(320, 240).expect("fits the panel"))
///     .memory_access_control(0x08)
///     .build();
/// assert_eq!(config.dimensions.width(), 320);
/// ```
pub struct Builder {
    /// Display dimensions
    dimensions: Dimensions,
    /// MADCTL byte
    memory_access_control: u8,
}

impl Default for Builder {
    fn default() -> Self {
        Builder {
            dimensions: Dimensions::default(),
            // BGR order, no exchange (value from the init table)
            memory_access_control: DEFAULT_MEMORY_ACCESS_CONTROL,
        }
    }
}

impl Builder {
    /// Create a new Builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set display dimensions
    pub fn dimensions(mut self, dims: Dimensions) -> Self {
        self.dimensions = dims;
        self
    }

    /// Set the MADCTL byte
    ///
    /// Controls scan direction, row/column exchange and RGB/BGR order. The
    /// dimensions must be set to match the resulting orientation.
    pub fn memory_access_control(mut self, value: u8) -> Self {
        self.memory_access_control = value;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Config {
        Config {
            dimensions: self.dimensions,
            memory_access_control: self.memory_access_control,
        }
    }
}
