//! PNG preview of the final buffer, for checking a board without a panel attached.

use std::fmt;
use std::path::{Path, PathBuf};

use embedded_graphics::geometry::Point;
use image::{GrayImage, Luma};
use todo_display_core::Canvas;

const PAPER: Luma<u8> = Luma([255]);
const INK: Luma<u8> = Luma([0]);

#[derive(Debug)]
pub enum PreviewError {
    Write {
        path: PathBuf,
        source: image::ImageError,
    },
}

impl fmt::Display for PreviewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PreviewError::Write { path, source } => {
                write!(f, "cannot write preview `{}`: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for PreviewError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PreviewError::Write { source, .. } => Some(source),
        }
    }
}

/// 8-bit grayscale copy of `canvas`: paper 255, ink 0.
pub fn to_gray_image(canvas: &Canvas) -> GrayImage {
    GrayImage::from_fn(canvas.width(), canvas.height(), |x, y| {
        if canvas.is_ink(Point::new(x as i32, y as i32)) {
            INK
        } else {
            PAPER
        }
    })
}

pub fn save_png(canvas: &Canvas, path: impl AsRef<Path>) -> Result<(), PreviewError> {
    let path = path.as_ref();
    to_gray_image(canvas)
        .save_with_format(path, image::ImageFormat::Png)
        .map_err(|source| PreviewError::Write {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::{geometry::Size, pixelcolor::BinaryColor};

    #[test]
    fn ink_maps_to_black() {
        let mut canvas = Canvas::new(Size::new(10, 3));
        canvas.set_pixel(Point::new(9, 2), BinaryColor::On);

        let image = to_gray_image(&canvas);
        assert_eq!(image.dimensions(), (10, 3));
        assert_eq!(image.get_pixel(9, 2), &INK);
        assert_eq!(image.get_pixel(0, 0), &PAPER);
        assert_eq!(image.pixels().filter(|p| **p == INK).count(), 1);
    }
}
