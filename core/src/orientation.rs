//! Final rotation of the landscape surface for portrait-mounted panels.

use embedded_graphics::{
    geometry::{Point, Size},
    pixelcolor::BinaryColor,
};

use crate::canvas::Canvas;
use crate::geometry::Orientation;

/// Landscape is passed through untouched, portrait is rotated 90° counter-clockwise.
pub fn transform(canvas: Canvas, orientation: Orientation) -> Canvas {
    match orientation {
        Orientation::Landscape => canvas,
        Orientation::Portrait => rotate_ccw(&canvas),
    }
}

/// Rotates 90° counter-clockwise: the right edge of `canvas` becomes the top edge.
pub fn rotate_ccw(canvas: &Canvas) -> Canvas {
    let width = canvas.width() as i32;
    rotate_with(canvas, |x, y| Point::new(y, width - 1 - x))
}

/// Rotates 90° clockwise, the inverse of [`rotate_ccw`].
pub fn rotate_cw(canvas: &Canvas) -> Canvas {
    let height = canvas.height() as i32;
    rotate_with(canvas, |x, y| Point::new(height - 1 - y, x))
}

fn rotate_with(canvas: &Canvas, map: impl Fn(i32, i32) -> Point) -> Canvas {
    let mut rotated = Canvas::new(Size::new(canvas.height(), canvas.width()));
    for y in 0..canvas.height() as i32 {
        for x in 0..canvas.width() as i32 {
            if canvas.is_ink(Point::new(x, y)) {
                rotated.set_pixel(map(x, y), BinaryColor::On);
            }
        }
    }
    rotated
}
