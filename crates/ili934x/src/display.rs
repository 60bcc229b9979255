//! Core display operations

use embedded_hal::delay::DelayNs;

use crate::color::from_read_back;
use crate::command::{
    COLUMN_ADDRESS_SET, DISPLAY_ON, MEMORY_ACCESS_CONTROL, MEMORY_READ, MEMORY_WRITE,
    PAGE_ADDRESS_SET, SLEEP_OUT, VERTICAL_SCROLL_START,
};
use crate::config::{Config, Dimensions};
use crate::error::Error;
use crate::init::INIT_SEQUENCE;
use crate::interface::DisplayInterface;

type DisplayResult<I> = core::result::Result<(), Error<I>>;

/// Time the panel needs after sleep out before display on
pub const WAKE_DELAY_MS: u32 = 120;

/// Pixels per data transaction when streaming a solid fill
pub const FILL_CHUNK_PIXELS: usize = 512;

/// Bytes per pixel in memory read-back
pub const READ_BYTES_PER_PIXEL: usize = 3;

/// Core display driver for ILI9341/ILI9340
///
/// Owns the interface for its whole lifetime. Constructing it resets and
/// initializes the controller, so a `Display` always refers to an active
/// panel.
pub struct Display<I>
where
    I: DisplayInterface,
{
    /// Hardware interface
    interface: I,
    /// Display configuration
    config: Config,
    /// Vertical scroll offset, always in `0..height`
    scroll: u16,
}

impl<I> Display<I>
where
    I: DisplayInterface,
{
    /// Reset and initialize the controller
    ///
    /// Drives the reset pulse, replays the initialization table, wakes the
    /// panel, waits for it to settle and switches the display on. Nothing
    /// is written to frame memory.
    ///
    /// # Errors
    ///
    /// Any interface error aborts construction.
    pub fn new<D: DelayNs>(interface: I, config: Config, delay: &mut D) -> Result<Self, Error<I>> {
        let mut display = Self {
            interface,
            config,
            scroll: 0,
        };
        display.reset(delay)?;
        Ok(display)
    }

    /// Perform hardware reset and initialization
    fn reset<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        log::debug!("ili934x: hardware reset");
        self.interface.reset(delay).map_err(Error::Interface)?;
        self.init(delay)
    }

    /// Replay the initialization table, then wake and enable the panel
    fn init<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        log::debug!("ili934x: sending {} init commands", INIT_SEQUENCE.len());
        for (command, params) in INIT_SEQUENCE {
            if command == MEMORY_ACCESS_CONTROL {
                let madctl = self.config.memory_access_control;
                self.write_command(command, Some(&[madctl]))?;
            } else {
                self.write_command(command, Some(params))?;
            }
        }

        self.write_command(SLEEP_OUT, None)?;
        delay.delay_ms(WAKE_DELAY_MS);
        self.write_command(DISPLAY_ON, None)?;
        log::debug!("ili934x: display on");

        Ok(())
    }

    /// Send a command, followed by a data phase when `params` is `Some`
    ///
    /// `Some(&[])` still produces an (empty) data transaction.
    pub fn write_command(&mut self, command: u8, params: Option<&[u8]>) -> DisplayResult<I> {
        self.send_command(command)?;
        if let Some(params) = params {
            self.send_data(params)?;
        }
        Ok(())
    }

    /// Program the column and page address window, both bounds inclusive
    ///
    /// Callers must pass `x0 <= x1` and `y0 <= y1`; inverted ranges are
    /// sent as-is and the controller's behavior is undefined.
    pub fn set_window(&mut self, x0: u16, y0: u16, x1: u16, y1: u16) -> DisplayResult<I> {
        log::trace!("ili934x: window ({x0}, {y0})..=({x1}, {y1})");
        let [x0_hi, x0_lo] = x0.to_be_bytes();
        let [x1_hi, x1_lo] = x1.to_be_bytes();
        self.write_command(COLUMN_ADDRESS_SET, Some(&[x0_hi, x0_lo, x1_hi, x1_lo]))?;

        let [y0_hi, y0_lo] = y0.to_be_bytes();
        let [y1_hi, y1_lo] = y1.to_be_bytes();
        self.write_command(PAGE_ADDRESS_SET, Some(&[y0_hi, y0_lo, y1_hi, y1_lo]))
    }

    /// Write big-endian RGB565 pixel data to a window
    ///
    /// `data` goes out as a single data transaction, whatever its size, and
    /// should hold `2 * window_pixels(..)` bytes. To stream pixels instead,
    /// follow [`set_window`](Self::set_window) with a bare
    /// `write_command(MEMORY_WRITE, None)` and then
    /// [`write_pixels`](Self::write_pixels).
    pub fn write_window(
        &mut self,
        x0: u16,
        y0: u16,
        x1: u16,
        y1: u16,
        data: &[u8],
    ) -> DisplayResult<I> {
        self.set_window(x0, y0, x1, y1)?;
        self.write_command(MEMORY_WRITE, Some(data))
    }

    /// Read a window back from frame memory
    ///
    /// Fills `buf` with 3 bytes per pixel in `[R, B, G]` order; use
    /// [`from_read_back`](crate::color::from_read_back) to rebuild a color.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BufferSizeMismatch`] without touching the bus when
    /// `buf` is not exactly `3 * window_pixels(..)` bytes.
    pub fn read_window(
        &mut self,
        x0: u16,
        y0: u16,
        x1: u16,
        y1: u16,
        buf: &mut [u8],
    ) -> DisplayResult<I> {
        let required = window_pixels(x0, y0, x1, y1).saturating_mul(READ_BYTES_PER_PIXEL);
        if buf.len() != required {
            return Err(Error::BufferSizeMismatch {
                required,
                provided: buf.len(),
            });
        }

        self.set_window(x0, y0, x1, y1)?;
        self.interface
            .read(MEMORY_READ, buf)
            .map_err(Error::Interface)
    }

    /// Continue a memory write started by a `MEMORY_WRITE` command
    pub fn write_pixels(&mut self, data: &[u8]) -> DisplayResult<I> {
        self.send_data(data)
    }

    /// Read one pixel
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] for coordinates outside the display.
    pub fn read_pixel(&mut self, x: i32, y: i32) -> Result<u16, Error<I>> {
        if !self.in_bounds(x, y) {
            return Err(Error::OutOfBounds { x, y });
        }
        // in_bounds guarantees both fit in u16
        let (x, y) = (x as u16, y as u16);

        let mut pixel = [0u8; READ_BYTES_PER_PIXEL];
        self.read_window(x, y, x, y, &mut pixel)?;
        Ok(from_read_back(pixel))
    }

    /// Write one pixel
    ///
    /// Coordinates outside the display are ignored without any bus traffic.
    pub fn write_pixel(&mut self, x: i32, y: i32, color: u16) -> DisplayResult<I> {
        if !self.in_bounds(x, y) {
            return Ok(());
        }
        // in_bounds guarantees both fit in u16
        let (x, y) = (x as u16, y as u16);
        self.write_window(x, y, x, y, &color.to_be_bytes())
    }

    /// Fill a rectangle with a solid color
    ///
    /// The rectangle is clamped onto the display: the origin into the
    /// surface, and the size to at least 1x1 and at most what fits from the
    /// origin. A zero or negative size therefore fills one pixel.
    ///
    /// After a bare memory-write command, the color is streamed in
    /// transactions of [`FILL_CHUNK_PIXELS`] pixels followed by one
    /// transaction with the remainder, which may be empty.
    pub fn fill_rectangle(&mut self, x: i32, y: i32, w: i32, h: i32, color: u16) -> DisplayResult<I> {
        let width = i32::from(self.config.dimensions.width());
        let height = i32::from(self.config.dimensions.height());

        let x = x.clamp(0, width - 1);
        let y = y.clamp(0, height - 1);
        let w = w.max(1).min(width - x);
        let h = h.max(1).min(height - y);

        // All four are within 0..=width / 0..=height after clamping
        let (x, y, w, h) = (x as u16, y as u16, w as u16, h as u16);
        self.set_window(x, y, x + w - 1, y + h - 1)?;
        self.write_command(MEMORY_WRITE, None)?;

        let pixels = usize::from(w) * usize::from(h);
        let chunks = pixels / FILL_CHUNK_PIXELS;
        let rest = pixels % FILL_CHUNK_PIXELS;
        log::trace!("ili934x: fill {pixels} px as {chunks} chunks + {rest}");

        let mut chunk = [0u8; FILL_CHUNK_PIXELS * 2];
        for pixel in chunk.chunks_exact_mut(2) {
            pixel.copy_from_slice(&color.to_be_bytes());
        }
        for _ in 0..chunks {
            self.send_data(&chunk)?;
        }
        self.send_data(&chunk[..rest * 2])
    }

    /// Fill the whole display with a solid color
    pub fn fill(&mut self, color: u16) -> DisplayResult<I> {
        let dims = self.config.dimensions;
        self.fill_rectangle(0, 0, i32::from(dims.width()), i32::from(dims.height()), color)
    }

    /// Current vertical scroll offset, in `0..height`
    pub fn scroll_offset(&self) -> u16 {
        self.scroll
    }

    /// Move the vertical scroll offset by `dy` lines, wrapping at the height
    pub fn scroll(&mut self, dy: i32) -> DisplayResult<I> {
        let height = i32::from(self.config.dimensions.height());
        // Reduce the step first so the sum stays below 2 * height
        let offset = (i32::from(self.scroll) + dy.rem_euclid(height)) % height;
        self.write_scroll(offset as u16)
    }

    /// Set the vertical scroll offset, wrapping at the height
    pub fn set_scroll_offset(&mut self, offset: u16) -> DisplayResult<I> {
        self.write_scroll(offset % self.config.dimensions.height())
    }

    /// Write the scroll register, keeping the stored offset on failure
    fn write_scroll(&mut self, offset: u16) -> DisplayResult<I> {
        self.write_command(VERTICAL_SCROLL_START, Some(&offset.to_be_bytes()))?;
        self.scroll = offset;
        Ok(())
    }

    /// Send a command to the display controller
    fn send_command(&mut self, cmd: u8) -> DisplayResult<I> {
        self.interface.send_command(cmd).map_err(Error::Interface)
    }

    /// Send data to the display controller
    fn send_data(&mut self, data: &[u8]) -> DisplayResult<I> {
        self.interface.send_data(data).map_err(Error::Interface)
    }

    fn in_bounds(&self, x: i32, y: i32) -> bool {
        self.config.dimensions.contains(x, y)
    }

    /// Get display dimensions
    pub fn dimensions(&self) -> &Dimensions {
        &self.config.dimensions
    }

    /// Access the underlying configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Give the interface back
    ///
    /// The controller keeps its state; nothing is sent.
    pub fn release(self) -> I {
        self.interface
    }
}

/// Number of pixels in the inclusive window `(x0, y0)..=(x1, y1)`
pub fn window_pixels(x0: u16, y0: u16, x1: u16, y1: u16) -> usize {
    let columns = usize::from(x1.saturating_sub(x0)) + 1;
    let rows = usize::from(y1.saturating_sub(y0)) + 1;
    columns * rows
}
