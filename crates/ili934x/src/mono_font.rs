//! Glyphs from embedded-graphics mono fonts
//!
//! [`MonoFontGlyphs`] renders characters of any
//! [`MonoFont`](embedded_graphics::mono_font::MonoFont) into the 8x8 cell
//! used by the text layer. Pixels past the cell are cut off, so fonts up to
//! 8x8 (e.g. `FONT_5X8`, `FONT_6X9` minus its last row) fit best.
//!
//! ```rust,ignore
//! use embedded_graphics::mono_font::ascii::FONT_5X8;
//! use ili934x::MonoFontGlyphs;
//!
//! let font = MonoFontGlyphs::new(&FONT_5X8);
//! display.print(&font, "booting")?;
//! ```

use core::convert::Infallible;

use embedded_graphics::{
    Drawable, Pixel,
    geometry::{OriginDimensions, Point, Size},
    mono_font::{MonoFont, MonoTextStyle},
    pixelcolor::BinaryColor,
    prelude::DrawTarget,
    text::{Baseline, Text},
};

use crate::text::{GLYPH_SIZE, GlyphSource};

/// [`GlyphSource`] backed by an embedded-graphics mono font
#[derive(Clone, Copy)]
pub struct MonoFontGlyphs<'a> {
    font: &'a MonoFont<'a>,
}

impl<'a> MonoFontGlyphs<'a> {
    /// Wrap a mono font
    pub fn new(font: &'a MonoFont<'a>) -> Self {
        Self { font }
    }
}

impl GlyphSource for MonoFontGlyphs<'_> {
    fn glyph(&self, ch: char) -> [u8; 8] {
        let mut cell = GlyphCell::default();
        let mut utf8 = [0u8; 4];
        let style = MonoTextStyle::new(self.font, BinaryColor::On);
        // Drawing into a GlyphCell cannot fail
        let _ = Text::with_baseline(ch.encode_utf8(&mut utf8), Point::zero(), style, Baseline::Top)
            .draw(&mut cell);
        cell.rows
    }
}

/// 8x8 one-bit canvas in the text layer's bitmap layout
#[derive(Default)]
struct GlyphCell {
    rows: [u8; 8],
}

impl DrawTarget for GlyphCell {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(Point { x, y }, color) in pixels {
            if !(0..8).contains(&x) {
                continue;
            }
            let Some(row) = usize::try_from(y).ok().and_then(|y| self.rows.get_mut(y)) else {
                continue;
            };
            match color {
                BinaryColor::On => *row |= 1 << x,
                BinaryColor::Off => *row &= !(1 << x),
            }
        }
        Ok(())
    }
}

impl OriginDimensions for GlyphCell {
    fn size(&self) -> Size {
        Size::new(u32::from(GLYPH_SIZE), u32::from(GLYPH_SIZE))
    }
}
