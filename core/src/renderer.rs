//! Composition of the whole board into a [`Scene`], and the one-call render entry point.

use alloc::{format, string::String};
use embedded_graphics::{geometry::Point, primitives::Line};
use log::debug;

use crate::canvas::Canvas;
use crate::config::{LayoutConfig, PLACEHOLDER, TIMESTAMP_PREFIX, TITLE};
use crate::font::{FontBook, FontMetrics, FontRole};
use crate::geometry::{CanvasGeometry, GeometryError, ListMode};
use crate::layout::{ListLayout, ListLayoutEngine};
use crate::orientation;
use crate::region::{MAX_REGIONS, RegionAllocator};
use crate::scene::{Mark, Scene};
use crate::task::Task;

/// The lists to show on one board.
#[derive(Debug, Clone, Copy)]
pub enum BoardContent<'a> {
    /// Every task in one list.
    Single(&'a [Task]),
    /// Two owner lists, top and bottom.
    Dual {
        first: (&'a str, &'a [Task]),
        second: (&'a str, &'a [Task]),
    },
}

impl BoardContent<'_> {
    pub fn mode(&self) -> ListMode {
        match self {
            BoardContent::Single(_) => ListMode::Single,
            BoardContent::Dual { .. } => ListMode::Dual,
        }
    }
}

/// Counts reported for one list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListSummary {
    /// Owner label, `None` in single mode.
    pub label: Option<String>,
    pub rendered: usize,
    pub total: usize,
}

/// A composed board, not yet painted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Composition {
    pub scene: Scene,
    pub lists: heapless::Vec<ListSummary, MAX_REGIONS>,
}

/// A finished board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    /// Final buffer, orientation already applied.
    pub canvas: Canvas,
    pub scene: Scene,
    pub lists: heapless::Vec<ListSummary, MAX_REGIONS>,
}

/// Footer text for the given list summaries.
pub fn footer_text(lists: &[ListSummary]) -> String {
    match lists {
        [ListSummary { label: None, total, .. }] => format!("Total tasks: {total}"),
        _ => {
            let mut footer = String::new();
            for (i, list) in lists.iter().enumerate() {
                if i > 0 {
                    footer.push_str(" | ");
                }
                footer.push_str(&format!(
                    "{}: {}",
                    list.label.as_deref().unwrap_or("Tasks"),
                    list.total
                ));
            }
            footer
        }
    }
}

/// Turns board content into a [`Scene`].
pub struct Renderer<'a, M: FontMetrics> {
    config: &'a LayoutConfig,
    metrics: &'a M,
}

impl<'a, M: FontMetrics> Renderer<'a, M> {
    pub fn new(config: &'a LayoutConfig, metrics: &'a M) -> Self {
        Renderer { config, metrics }
    }

    /// Draw order: title, timestamp, header rule, then each list (a divider between the
    /// two dual-mode lists), then the footer.
    pub fn compose(
        &self,
        geometry: &CanvasGeometry,
        content: BoardContent<'_>,
        timestamp: &str,
    ) -> Result<Composition, GeometryError> {
        let config = self.config;
        let allocation = RegionAllocator::new(config).allocate(geometry, content.mode())?;
        let engine = ListLayoutEngine::new(config, self.metrics);
        let surface = geometry.surface_size();

        let mut scene = Scene::new();
        scene.text(Mark::Title, config.title_origin, TITLE, FontRole::Title);
        scene.text(
            Mark::Timestamp,
            Point::new(config.margin as i32, config.timestamp_y()),
            format!("{TIMESTAMP_PREFIX}{timestamp}"),
            FontRole::Small,
        );
        scene.line(
            Mark::HeaderRule,
            Line::new(
                Point::new(config.margin as i32, config.header_rule_y),
                Point::new(
                    surface.width as i32 - config.margin as i32,
                    config.header_rule_y,
                ),
            ),
            config.stroke,
        );

        let none: &[Task] = &[];
        let lists: [(Option<&str>, &[Task]); MAX_REGIONS] = match content {
            BoardContent::Single(tasks) => [(None, tasks), (None, none)],
            BoardContent::Dual { first, second } => {
                [(Some(first.0), first.1), (Some(second.0), second.1)]
            }
        };

        let mut summaries: heapless::Vec<ListSummary, MAX_REGIONS> = heapless::Vec::new();
        for (i, (region, (label, tasks))) in allocation.regions.iter().zip(lists).enumerate() {
            if i > 0 {
                if let Some(divider_y) = allocation.divider_y {
                    scene.line(
                        Mark::Divider,
                        Line::new(
                            Point::new(region.left_x, divider_y),
                            Point::new(region.right_x, divider_y),
                        ),
                        config.stroke,
                    );
                }
            }

            let layout = engine.layout(region, label, tasks);
            self.push_list(&mut scene, &layout);
            summaries
                .push(ListSummary {
                    label: label.map(String::from),
                    rendered: layout.rendered,
                    total: layout.total,
                })
                .expect("one summary per allocated region");
        }

        scene.text(
            Mark::Footer,
            Point::new(config.margin as i32, config.footer_y(surface.height)),
            footer_text(&summaries),
            FontRole::Small,
        );

        debug!("composed {} draw commands", scene.len());

        Ok(Composition {
            scene,
            lists: summaries,
        })
    }

    fn push_list(&self, scene: &mut Scene, layout: &ListLayout) {
        let stroke = layout.plan.stroke;

        if let Some(header) = &layout.header {
            scene.text(
                Mark::RegionLabel,
                header.label_origin,
                header.label.as_str(),
                FontRole::Task,
            );
            scene.line(Mark::RegionRule, header.rule, 1);
        }

        if let Some(origin) = layout.placeholder {
            scene.text(Mark::Placeholder, origin, PLACEHOLDER, FontRole::Task);
        }

        for row in &layout.rows {
            scene.rect(Mark::Checkbox, row.checkbox, stroke);
            if let Some(cross) = row.cross {
                for diagonal in cross {
                    scene.line(Mark::Cross, diagonal, stroke);
                }
            }
            scene.text(
                Mark::TaskText,
                row.text_origin,
                row.text.as_str(),
                FontRole::Task,
            );
            if let Some(strike) = row.strike {
                scene.line(Mark::Strike, strike, stroke);
            }
        }
    }
}

/// Composes, paints and orients a board in one go.
pub fn render(
    geometry: &CanvasGeometry,
    content: BoardContent<'_>,
    timestamp: &str,
    config: &LayoutConfig,
    fonts: &FontBook,
) -> Result<Rendered, GeometryError> {
    let Composition { scene, lists } =
        Renderer::new(config, fonts).compose(geometry, content, timestamp)?;

    let mut canvas = Canvas::new(geometry.surface_size());
    canvas.paint(&scene, fonts);
    let canvas = orientation::transform(canvas, geometry.orientation());

    Ok(Rendered {
        canvas,
        scene,
        lists,
    })
}
