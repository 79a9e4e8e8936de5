use alloc::{vec, vec::Vec};
use core::convert::Infallible;
use embedded_graphics::{
    Pixel,
    draw_target::DrawTarget,
    geometry::{OriginDimensions, Point, Size},
    mono_font::MonoTextStyle,
    pixelcolor::BinaryColor,
    prelude::*,
    primitives::{PrimitiveStyle, PrimitiveStyleBuilder, StrokeAlignment},
    text::{Baseline, Text},
};
use log::debug;

use crate::font::FontBook;
use crate::scene::{Scene, Shape};

/// A 1-bit raster.
///
/// Rows are packed MSB first and padded to whole bytes. A set bit is white paper, a cleared
/// bit is black ink, so a fresh canvas is all `0xFF`. [`BinaryColor::On`] draws ink.
#[derive(Clone, PartialEq, Eq)]
pub struct Canvas {
    size: Size,
    bytes_per_row: usize,
    buffer: Vec<u8>,
}

impl Canvas {
    /// Creates a white canvas.
    pub fn new(size: Size) -> Self {
        let bytes_per_row = (size.width as usize).div_ceil(8);
        Canvas {
            size,
            bytes_per_row,
            buffer: vec![0xFF; bytes_per_row * size.height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.size.width
    }

    pub fn height(&self) -> u32 {
        self.size.height
    }

    pub fn bytes_per_row(&self) -> usize {
        self.bytes_per_row
    }

    /// Packed rows as they go to the panel.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    fn calculate_buffer_index(&self, point: Point) -> Option<(usize, u8)> {
        if point.x < 0
            || point.y < 0
            || point.x >= self.size.width as i32
            || point.y >= self.size.height as i32
        {
            return None;
        }
        let (x, y) = (point.x as usize, point.y as usize);
        Some((y * self.bytes_per_row + x / 8, 0x80 >> (x % 8)))
    }

    /// Color at `point`, `None` outside the canvas.
    pub fn pixel(&self, point: Point) -> Option<BinaryColor> {
        let (index, mask) = self.calculate_buffer_index(point)?;
        Some(if self.buffer[index] & mask == 0 {
            BinaryColor::On
        } else {
            BinaryColor::Off
        })
    }

    /// Sets one pixel. Points outside the canvas are ignored.
    pub fn set_pixel(&mut self, point: Point, color: BinaryColor) {
        if let Some((index, mask)) = self.calculate_buffer_index(point) {
            match color {
                BinaryColor::On => self.buffer[index] &= !mask,
                BinaryColor::Off => self.buffer[index] |= mask,
            }
        }
    }

    pub fn is_ink(&self, point: Point) -> bool {
        self.pixel(point) == Some(BinaryColor::On)
    }

    /// Number of black pixels.
    pub fn ink_count(&self) -> usize {
        let mut count = 0;
        for y in 0..self.size.height as i32 {
            for x in 0..self.size.width as i32 {
                if self.is_ink(Point::new(x, y)) {
                    count += 1;
                }
            }
        }
        count
    }

    /// Paints every command of `scene` in order.
    pub fn paint(&mut self, scene: &Scene, fonts: &FontBook) {
        for command in scene {
            match &command.shape {
                Shape::Text { origin, text, role } => {
                    let style = MonoTextStyle::new(fonts.font(*role), BinaryColor::On);
                    let Ok(_) = Text::with_baseline(text, *origin, style, Baseline::Top).draw(self);
                }
                Shape::Line { line, stroke } => {
                    let Ok(()) = line
                        .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, *stroke))
                        .draw(self);
                }
                Shape::Rect { rect, stroke } => {
                    let style = PrimitiveStyleBuilder::new()
                        .stroke_color(BinaryColor::On)
                        .stroke_width(*stroke)
                        .stroke_alignment(StrokeAlignment::Inside)
                        .build();
                    let Ok(()) = rect.into_styled(style).draw(self);
                }
            }
        }
        debug!(
            "painted {} commands onto {}x{} canvas",
            scene.len(),
            self.size.width,
            self.size.height
        );
    }
}

impl core::fmt::Debug for Canvas {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Canvas")
            .field("size", &self.size)
            .field("bytes", &self.buffer.len())
            .finish()
    }
}

impl OriginDimensions for Canvas {
    fn size(&self) -> Size {
        self.size
    }
}

impl DrawTarget for Canvas {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            self.set_pixel(point, color);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use embedded_graphics::primitives::{Line, Rectangle};

    use super::*;
    use crate::font::FontRole;
    use crate::geometry::Orientation;
    use crate::scene::Mark;

    fn string_to_canvas(size: Size, rows: &str) -> Canvas {
        let mut canvas = Canvas::new(size);
        let bits = rows.chars().filter(|&c| c == '0' || c == '1');
        for (i, bit) in bits.enumerate() {
            let point = Point::new((i % size.width as usize) as i32, (i / size.width as usize) as i32);
            if bit == '1' {
                canvas.set_pixel(point, BinaryColor::On);
            }
        }
        canvas
    }

    #[test]
    fn fresh_canvas_is_white() {
        let canvas = Canvas::new(Size::new(12, 2));
        assert_eq!(canvas.bytes_per_row(), 2);
        assert_eq!(canvas.as_bytes(), [0xFF; 4]);
        assert_eq!(canvas.ink_count(), 0);
    }

    #[test]
    fn ink_clears_bits_msb_first() {
        let mut canvas = Canvas::new(Size::new(12, 2));
        canvas.set_pixel(Point::new(0, 0), BinaryColor::On);
        canvas.set_pixel(Point::new(9, 1), BinaryColor::On);
        assert_eq!(canvas.as_bytes(), [0x7F, 0xFF, 0xFF, 0xBF]);

        canvas.set_pixel(Point::new(0, 0), BinaryColor::Off);
        assert_eq!(canvas.as_bytes()[0], 0xFF);
    }

    #[test]
    fn out_of_bounds_ignored() {
        let mut canvas = Canvas::new(Size::new(8, 1));
        canvas.set_pixel(Point::new(8, 0), BinaryColor::On);
        canvas.set_pixel(Point::new(-1, 0), BinaryColor::On);
        canvas.set_pixel(Point::new(0, 1), BinaryColor::On);
        assert_eq!(canvas.as_bytes(), [0xFF]);
        assert_eq!(canvas.pixel(Point::new(8, 0)), None);
    }

    #[test]
    fn paint_rect_and_line() {
        let mut scene = Scene::new();
        scene.rect(
            Mark::Checkbox,
            Rectangle::new(Point::new(0, 0), Size::new(3, 3)),
            1,
        );
        scene.line(Mark::Strike, Line::new(Point::new(4, 1), Point::new(7, 1)), 1);

        let mut canvas = Canvas::new(Size::new(8, 3));
        canvas.paint(&scene, &FontBook::for_orientation(Orientation::Landscape));

        let expected = string_to_canvas(
            Size::new(8, 3),
            "11100000 \
             10101111 \
             11100000",
        );
        assert_eq!(canvas, expected);
    }

    #[test]
    fn paint_text_leaves_ink() {
        let mut scene = Scene::new();
        scene.text(Mark::TaskText, Point::new(0, 0), "X", FontRole::Task);

        let mut canvas = Canvas::new(Size::new(16, 20));
        canvas.paint(&scene, &FontBook::for_orientation(Orientation::Landscape));
        assert!(canvas.ink_count() > 0);
    }
}
