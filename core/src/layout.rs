//! Row placement inside a single region.

use alloc::{string::String, vec::Vec};
use embedded_graphics::{
    geometry::{Point, Size},
    primitives::{Line, Rectangle},
};
use log::{debug, warn};

use crate::config::{LayoutConfig, OverflowPolicy};
use crate::font::{FontMetrics, FontRole};
use crate::region::Region;
use crate::task::Task;

/// Number of rows of `line_pitch` that fit into `available` pixels.
pub fn capacity(available: i32, line_pitch: u32) -> usize {
    if available <= 0 || line_pitch == 0 {
        return 0;
    }
    (available as u32 / line_pitch) as usize
}

/// Sizing chosen for one region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutPlan {
    pub line_pitch: u32,
    pub box_size: u32,
    pub text_gap: u32,
    pub stroke: u32,
    /// y of the first row, below the region header if there is one.
    pub first_row_y: i32,
    pub capacity: usize,
}

/// Owner label and separator rule drawn at the top of a dual-mode region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionHeader {
    pub label: String,
    pub label_origin: Point,
    pub rule: Line,
}

/// Geometry of one drawn task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRow {
    pub checkbox: Rectangle,
    /// The two diagonals of the completion mark.
    pub cross: Option<[Line; 2]>,
    pub text: String,
    pub text_origin: Point,
    pub strike: Option<Line>,
}

/// Everything needed to draw one list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListLayout {
    pub plan: LayoutPlan,
    pub header: Option<RegionHeader>,
    pub rows: Vec<TaskRow>,
    /// Origin of the "No tasks" line, set only for empty lists.
    pub placeholder: Option<Point>,
    /// Tasks that were given a row.
    pub rendered: usize,
    /// Tasks handed in, including the ones that did not fit.
    pub total: usize,
}

impl ListLayout {
    pub fn dropped(&self) -> usize {
        self.total - self.rendered
    }
}

/// Computes row geometry for task lists.
pub struct ListLayoutEngine<'a, M: FontMetrics> {
    config: &'a LayoutConfig,
    metrics: &'a M,
}

impl<'a, M: FontMetrics> ListLayoutEngine<'a, M> {
    pub fn new(config: &'a LayoutConfig, metrics: &'a M) -> Self {
        ListLayoutEngine { config, metrics }
    }

    /// Lays out `tasks` inside `region`, with an owner header when `label` is given.
    pub fn layout(&self, region: &Region, label: Option<&str>, tasks: &[Task]) -> ListLayout {
        let config = self.config;
        let first_row_y = match label {
            Some(_) => region.top_y + config.region_header_height as i32,
            None => region.top_y,
        };
        let available = region.bottom_y - first_row_y - config.bottom_margin as i32;
        // a region without room for rows draws nothing, not even its header
        let header = label
            .filter(|_| available > 0)
            .map(|label| self.header(region, label));

        let line_pitch = self.line_pitch(available, tasks.len());
        let plan = LayoutPlan {
            line_pitch,
            box_size: config.box_size,
            text_gap: config.text_gap,
            stroke: config.stroke,
            first_row_y,
            capacity: capacity(available, line_pitch),
        };

        let mut layout = ListLayout {
            plan,
            header,
            rows: Vec::new(),
            placeholder: None,
            rendered: 0,
            total: tasks.len(),
        };

        if tasks.is_empty() {
            if available > 0 {
                layout.placeholder = Some(Point::new(region.left_x, first_row_y));
            }
            return layout;
        }

        let mut cursor_y = first_row_y;
        for task in tasks.iter().take(plan.capacity) {
            layout.rows.push(self.row(region.left_x, cursor_y, task));
            cursor_y += plan.line_pitch as i32;
        }
        layout.rendered = layout.rows.len();

        if layout.dropped() > 0 {
            warn!(
                "{} of {} task(s) do not fit{}",
                layout.dropped(),
                layout.total,
                label.map(|l| alloc::format!(" in {l}'s list")).unwrap_or_default()
            );
        }
        debug!(
            "list laid out: pitch={} capacity={} rendered={}",
            plan.line_pitch, plan.capacity, layout.rendered
        );

        layout
    }

    fn line_pitch(&self, available: i32, task_count: usize) -> u32 {
        let pitch = self.config.line_pitch;
        match self.config.overflow {
            OverflowPolicy::Truncate => pitch,
            OverflowPolicy::ShrinkToFit => {
                if task_count <= capacity(available, pitch) || available <= 0 {
                    return pitch;
                }
                let min_pitch = self.config.box_size + self.config.stroke;
                (available as u32 / task_count as u32)
                    .max(min_pitch)
                    .min(pitch)
            }
        }
    }

    fn header(&self, region: &Region, label: &str) -> RegionHeader {
        let rule_y = region.top_y + self.config.region_rule_offset as i32;
        RegionHeader {
            label: String::from(label),
            label_origin: Point::new(region.left_x, region.top_y),
            rule: Line::new(
                Point::new(region.left_x, rule_y),
                Point::new(region.right_x, rule_y),
            ),
        }
    }

    fn row(&self, left_x: i32, y: i32, task: &Task) -> TaskRow {
        let box_size = self.config.box_size as i32;
        let checkbox = Rectangle::new(Point::new(left_x, y), Size::new_equal(box_size as u32));
        let text_origin = Point::new(left_x + box_size + self.config.text_gap as i32, y);

        let (cross, strike) = if task.is_completed() {
            let near = self.config.cross_inset as i32;
            let far = box_size - 1 - near;
            let cross = [
                Line::new(Point::new(left_x + near, y + near), Point::new(left_x + far, y + far)),
                Line::new(Point::new(left_x + near, y + far), Point::new(left_x + far, y + near)),
            ];

            let width = self.metrics.advance_width(task.text(), FontRole::Task) as i32;
            let strike_y = y + box_size / 2;
            let strike = Line::new(
                Point::new(text_origin.x, strike_y),
                Point::new(text_origin.x + width - 1, strike_y),
            );
            (Some(cross), Some(strike))
        } else {
            (None, None)
        };

        TaskRow {
            checkbox,
            cross,
            text: String::from(task.text()),
            text_origin,
            strike,
        }
    }
}
