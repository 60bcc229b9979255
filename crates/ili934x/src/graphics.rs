//! Graphics support via embedded-graphics
//!
//! [`Display`] implements [`DrawTarget`] with [`Rgb565`] colors, drawing
//! straight to the controller's frame memory. There is no framebuffer:
//! single pixels cost one window write each, while solid and contiguous
//! fills go through the windowed fill path.
//!
//! ## Example
//!
//! ```rust,ignore
//! use embedded_graphics::{
//!     pixelcolor::Rgb565,
//!     prelude::*,
//!     primitives::{Circle, PrimitiveStyle, Rectangle},
//! };
//!
//! display.clear(Rgb565::BLACK)?;
//!
//! Rectangle::new(Point::new(10, 10), Size::new(50, 30))
//!     .into_styled(PrimitiveStyle::with_fill(Rgb565::RED))
//!     .draw(&mut display)?;
//!
//! Circle::new(Point::new(100, 50), 40)
//!     .into_styled(PrimitiveStyle::with_stroke(Rgb565::GREEN, 2))
//!     .draw(&mut display)?;
//! ```

use embedded_graphics_core::{
    draw_target::DrawTarget,
    geometry::{Dimensions as _, OriginDimensions, Point, Size},
    pixelcolor::Rgb565,
    prelude::Pixel,
    primitives::{PointsIter, Rectangle},
};

use crate::color::from_rgb565;
use crate::command::MEMORY_WRITE;
use crate::display::{Display, FILL_CHUNK_PIXELS};
use crate::error::Error;
use crate::interface::DisplayInterface;

impl<I> DrawTarget for Display<I>
where
    I: DisplayInterface,
{
    type Color = Rgb565;
    type Error = Error<I>;

    fn draw_iter<Iter>(&mut self, pixels: Iter) -> Result<(), Self::Error>
    where
        Iter: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(Point { x, y }, color) in pixels {
            self.write_pixel(x, y, from_rgb565(color))?;
        }

        Ok(())
    }

    fn fill_contiguous<Iter>(&mut self, area: &Rectangle, colors: Iter) -> Result<(), Self::Error>
    where
        Iter: IntoIterator<Item = Self::Color>,
    {
        let visible = area.intersection(&self.bounding_box());
        if visible != *area {
            // Partly off-screen: let write_pixel drop what doesn't fit
            return self.draw_iter(
                area.points()
                    .zip(colors)
                    .map(|(point, color)| Pixel(point, color)),
            );
        }
        let Some(bottom_right) = area.bottom_right() else {
            return Ok(());
        };

        // Fully visible, so all corners fit in u16
        self.set_window(
            area.top_left.x as u16,
            area.top_left.y as u16,
            bottom_right.x as u16,
            bottom_right.y as u16,
        )?;
        self.write_command(MEMORY_WRITE, None)?;

        let pixels = area.size.width as usize * area.size.height as usize;
        let mut colors = colors.into_iter().take(pixels);
        let mut chunk = [0u8; FILL_CHUNK_PIXELS * 2];
        loop {
            let mut len = 0;
            for (pixel, color) in chunk.chunks_exact_mut(2).zip(colors.by_ref()) {
                pixel.copy_from_slice(&from_rgb565(color).to_be_bytes());
                len += 2;
            }
            if len == 0 {
                return Ok(());
            }
            self.write_pixels(&chunk[..len])?;
        }
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        let area = area.intersection(&self.bounding_box());
        if area.is_zero_sized() {
            return Ok(());
        }

        // Clipped to the display, so the size fits in i32
        self.fill_rectangle(
            area.top_left.x,
            area.top_left.y,
            area.size.width as i32,
            area.size.height as i32,
            from_rgb565(color),
        )
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.fill(from_rgb565(color))
    }
}

impl<I> OriginDimensions for Display<I>
where
    I: DisplayInterface,
{
    fn size(&self) -> Size {
        let dims = self.dimensions();
        Size::new(u32::from(dims.width()), u32::from(dims.height()))
    }
}
