//! 8x8 glyph and text rendering
//!
//! The driver does not carry a font. Glyph bitmaps come from a
//! [`GlyphSource`] supplied by the caller, and are expanded to RGB565 tiles
//! written through the window primitive.
//!
//! ## Example
//!
//! ```rust,ignore
//! use ili934x::TextStyle;
//!
//! // Any `Fn(char) -> [u8; 8]` is a glyph source
//! let font = |ch: char| if ch == ' ' { [0x00; 8] } else { [0xFF; 8] };
//!
//! display.draw_text(&font, "Hello\nworld", 0, 0, &TextStyle::default())?;
//! display.print(&font, "log line")?;
//! ```

use crate::display::Display;
use crate::error::Error;
use crate::interface::DisplayInterface;

/// Glyph cell size in pixels (both directions)
pub const GLYPH_SIZE: u16 = 8;

/// Bytes in one expanded glyph tile (8x8 pixels, 2 bytes each)
pub const GLYPH_TILE_BYTES: usize = 2 * 8 * 8;

/// Source of 8x8 monochrome glyph bitmaps
///
/// Byte `r` is row `r` from the top; bit `c` (LSB first) is column `c` from
/// the left. A set bit is foreground.
pub trait GlyphSource {
    /// Bitmap for `ch`
    fn glyph(&self, ch: char) -> [u8; 8];
}

impl<F> GlyphSource for F
where
    F: Fn(char) -> [u8; 8],
{
    fn glyph(&self, ch: char) -> [u8; 8] {
        self(ch)
    }
}

/// Text colors and wrapping
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    /// Foreground color
    pub color: u16,
    /// Background color
    pub background: u16,
    /// Column at which a line wraps; display width - 8 when `None`
    pub wrap: Option<u16>,
    /// Row at which the cursor returns to the first line; display height - 8
    /// when `None`
    pub vwrap: Option<u16>,
    /// Clear from the cursor to the wrap column at each line end
    pub clear_eol: bool,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            color: crate::color::WHITE,
            background: crate::color::BLACK,
            wrap: None,
            vwrap: None,
            clear_eol: false,
        }
    }
}

/// Expand a glyph bitmap to a big-endian RGB565 tile, row by row
pub fn expand_glyph(bitmap: &[u8; 8], color: u16, background: u16) -> [u8; GLYPH_TILE_BYTES] {
    let fg = color.to_be_bytes();
    let bg = background.to_be_bytes();
    let mut tile = [0u8; GLYPH_TILE_BYTES];

    for (bits, row) in bitmap.iter().zip(tile.chunks_exact_mut(16)) {
        for (col, pixel) in row.chunks_exact_mut(2).enumerate() {
            let on = bits & (1 << col) != 0;
            pixel.copy_from_slice(if on { &fg } else { &bg });
        }
    }

    tile
}

impl<I> Display<I>
where
    I: DisplayInterface,
{
    /// Draw one character cell with its top-left corner at `(x, y)`
    ///
    /// The cell is not clipped; it must lie inside the controller's address
    /// range.
    pub fn draw_char<G: GlyphSource + ?Sized>(
        &mut self,
        font: &G,
        ch: char,
        x: u16,
        y: u16,
        color: u16,
        background: u16,
    ) -> Result<(), Error<I>> {
        let tile = expand_glyph(&font.glyph(ch), color, background);
        let last = GLYPH_SIZE - 1;
        self.write_window(x, y, x.saturating_add(last), y.saturating_add(last), &tile)
    }

    /// Draw text starting at `(x, y)`
    ///
    /// `'\n'` starts a new line; a character that would start at or past
    /// the wrap column goes on a new line first. New lines return to column
    /// `x`, and to row `y` once the row reaches the vertical wrap.
    pub fn draw_text<G: GlyphSource + ?Sized>(
        &mut self,
        font: &G,
        text: &str,
        x: u16,
        y: u16,
        style: &TextStyle,
    ) -> Result<(), Error<I>> {
        let dims = *self.dimensions();
        let wrap = style
            .wrap
            .unwrap_or(dims.width().saturating_sub(GLYPH_SIZE));
        let vwrap = style
            .vwrap
            .unwrap_or(dims.height().saturating_sub(GLYPH_SIZE));

        let mut cursor = Cursor { x, y };
        for ch in text.chars() {
            if ch == '\n' {
                self.clear_to_eol(&cursor, wrap, style)?;
                cursor.new_line(x, y, vwrap);
            } else {
                if cursor.x >= wrap {
                    cursor.new_line(x, y, vwrap);
                }
                self.draw_char(font, ch, cursor.x, cursor.y, style.color, style.background)?;
                cursor.x = cursor.x.saturating_add(GLYPH_SIZE);
            }
        }
        self.clear_to_eol(&cursor, wrap, style)
    }

    /// Scroll up one text row and print `text` on the freed bottom row
    ///
    /// Lines are cleared to the end, so successive calls behave like a
    /// scrolling log.
    pub fn print<G: GlyphSource + ?Sized>(&mut self, font: &G, text: &str) -> Result<(), Error<I>> {
        self.scroll(i32::from(GLYPH_SIZE))?;

        // rem_euclid keeps the row in 0..height
        let height = i32::from(self.dimensions().height());
        let row = (height - i32::from(GLYPH_SIZE) + i32::from(self.scroll_offset())).rem_euclid(height);
        let style = TextStyle {
            clear_eol: true,
            ..TextStyle::default()
        };
        self.draw_text(font, text, 0, row as u16, &style)
    }

    fn clear_to_eol(&mut self, cursor: &Cursor, wrap: u16, style: &TextStyle) -> Result<(), Error<I>> {
        if !style.clear_eol || cursor.x >= wrap {
            return Ok(());
        }
        let width = i32::from(wrap - cursor.x) + i32::from(GLYPH_SIZE) - 1;
        self.fill_rectangle(
            i32::from(cursor.x),
            i32::from(cursor.y),
            width,
            i32::from(GLYPH_SIZE),
            style.background,
        )
    }
}

/// Text cursor, top-left corner of the next cell
struct Cursor {
    x: u16,
    y: u16,
}

impl Cursor {
    fn new_line(&mut self, x: u16, y: u16, vwrap: u16) {
        self.x = x;
        self.y = self.y.saturating_add(GLYPH_SIZE);
        if self.y >= vwrap {
            self.y = y;
        }
    }
}
