#![allow(dead_code)]

use todo_display_core::{FontMetrics, FontRole, Task};

/// Every glyph `GLYPH_WIDTH` wide, independent of role.
pub struct FixedMetrics;

pub const GLYPH_WIDTH: u32 = 7;

impl FontMetrics for FixedMetrics {
    fn advance_width(&self, text: &str, _role: FontRole) -> u32 {
        GLYPH_WIDTH * text.chars().count() as u32
    }

    fn line_height(&self, _role: FontRole) -> u32 {
        12
    }
}

pub fn numbered_tasks(n: usize) -> Vec<Task> {
    (0..n)
        .map(|i| Task::new(format!("task {i}"), i % 3 == 0))
        .collect()
}

/// Prints the canvas as rows of `#` and `.`, handy when a pixel assertion fails.
pub fn dump(canvas: &todo_display_core::Canvas) {
    use embedded_graphics::geometry::Point;
    for y in 0..canvas.height() as i32 {
        let row: String = (0..canvas.width() as i32)
            .map(|x| if canvas.is_ink(Point::new(x, y)) { '#' } else { '.' })
            .collect();
        println!("{row}");
    }
}
