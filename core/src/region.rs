//! Partitioning of the drawing surface into list regions.

use embedded_graphics::{geometry::Size, primitives::Rectangle};
use log::debug;

use crate::config::LayoutConfig;
use crate::geometry::{CanvasGeometry, GeometryError, ListMode};

/// Maximum number of lists on one board.
pub const MAX_REGIONS: usize = 2;

/// A band of the surface assigned to exactly one task list.
///
/// Edges are inclusive surface coordinates. `bottom_y` may lie above `top_y` on surfaces too
/// short for the layout, such a region simply has no room for rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub top_y: i32,
    pub bottom_y: i32,
    pub left_x: i32,
    pub right_x: i32,
}

impl Region {
    pub fn height(&self) -> i32 {
        self.bottom_y - self.top_y
    }

    pub fn width(&self) -> i32 {
        self.right_x - self.left_x
    }

    /// Whether `rect` lies fully inside the region.
    pub fn contains_rect(&self, rect: &Rectangle) -> bool {
        let Some(bottom_right) = rect.bottom_right() else {
            return true;
        };
        rect.top_left.x >= self.left_x
            && rect.top_left.y >= self.top_y
            && bottom_right.x <= self.right_x
            && bottom_right.y <= self.bottom_y
    }
}

/// The result of partitioning a surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Allocation {
    pub regions: heapless::Vec<Region, MAX_REGIONS>,
    /// y of the divider line between the two dual-mode regions.
    pub divider_y: Option<i32>,
}

/// Splits the content band of a surface into list regions.
#[derive(Debug, Clone, Copy)]
pub struct RegionAllocator<'a> {
    config: &'a LayoutConfig,
}

impl<'a> RegionAllocator<'a> {
    pub fn new(config: &'a LayoutConfig) -> Self {
        RegionAllocator { config }
    }

    fn check_geometry_ok(&self, geometry: &CanvasGeometry) -> Result<Size, GeometryError> {
        let surface = geometry.surface_size();
        if surface.width == 0 || surface.height == 0 {
            return Err(GeometryError::EmptyCanvas);
        }

        let margins = 2 * self.config.margin;
        if surface.width <= margins {
            return Err(GeometryError::TooNarrow {
                surface_width: surface.width,
                margins,
            });
        }

        Ok(surface)
    }

    /// Returns one region in single mode, two stacked regions in dual mode.
    pub fn allocate(
        &self,
        geometry: &CanvasGeometry,
        mode: ListMode,
    ) -> Result<Allocation, GeometryError> {
        let surface = self.check_geometry_ok(geometry)?;

        let left_x = self.config.margin as i32;
        let right_x = surface.width as i32 - self.config.margin as i32;
        let content_start = self.config.content_start();
        let content_end = self.config.content_end(surface.height);

        let band = |top_y, bottom_y| Region {
            top_y,
            bottom_y,
            left_x,
            right_x,
        };
        let (regions, divider_y) = match mode {
            ListMode::Single => (
                heapless::Vec::<Region, MAX_REGIONS>::from_slice(&[band(
                    content_start,
                    content_end,
                )]),
                None,
            ),
            ListMode::Dual => {
                let half = (content_end - content_start) / 2;
                let gap = self.config.region_gap as i32;
                let divider_y = content_start + half;
                (
                    heapless::Vec::from_slice(&[
                        band(content_start, divider_y - gap),
                        band(divider_y + gap, content_end),
                    ]),
                    Some(divider_y),
                )
            }
        };
        let regions = regions.expect("a board has at most MAX_REGIONS regions");

        debug!(
            "allocated {} region(s) on {}x{} surface, divider at {:?}",
            regions.len(),
            surface.width,
            surface.height,
            divider_y
        );

        Ok(Allocation { regions, divider_y })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Orientation;
    use embedded_graphics::geometry::Point;

    #[test]
    fn single_region_spans_content_band() {
        let config = LayoutConfig::LANDSCAPE;
        let geometry = CanvasGeometry::new(800, 480, Orientation::Landscape).unwrap();
        let allocation = RegionAllocator::new(&config)
            .allocate(&geometry, ListMode::Single)
            .unwrap();

        assert_eq!(allocation.divider_y, None);
        assert_eq!(
            allocation.regions.as_slice(),
            [Region {
                top_y: 115,
                bottom_y: 450,
                left_x: 20,
                right_x: 780
            }]
        );
    }

    #[test]
    fn dual_regions_leave_gap_around_divider() {
        let config = LayoutConfig::PORTRAIT;
        let geometry = CanvasGeometry::new(480, 800, Orientation::Portrait).unwrap();
        let allocation = RegionAllocator::new(&config)
            .allocate(&geometry, ListMode::Dual)
            .unwrap();

        // surface is 800x480, content band is 100..=450
        assert_eq!(allocation.divider_y, Some(275));
        let [first, second] = allocation.regions.as_slice() else {
            panic!("expected two regions");
        };
        assert_eq!((first.top_y, first.bottom_y), (100, 270));
        assert_eq!((second.top_y, second.bottom_y), (280, 450));
        assert_eq!((first.left_x, first.right_x), (20, 780));
    }

    #[test]
    fn short_surface_gives_degenerate_regions() {
        let config = LayoutConfig::LANDSCAPE;
        let geometry = CanvasGeometry::new(800, 100, Orientation::Landscape).unwrap();
        let allocation = RegionAllocator::new(&config)
            .allocate(&geometry, ListMode::Dual)
            .unwrap();

        for region in &allocation.regions {
            assert!(region.height() <= 0);
        }
    }

    #[test]
    fn narrow_surface_rejected() {
        let config = LayoutConfig::LANDSCAPE;
        let geometry = CanvasGeometry::new(40, 480, Orientation::Landscape).unwrap();
        assert_eq!(
            RegionAllocator::new(&config)
                .allocate(&geometry, ListMode::Single)
                .unwrap_err(),
            GeometryError::TooNarrow {
                surface_width: 40,
                margins: 40
            }
        );
    }

    #[test]
    fn contains_rect() {
        let region = Region {
            top_y: 10,
            bottom_y: 50,
            left_x: 0,
            right_x: 100,
        };
        assert!(region.contains_rect(&Rectangle::new(Point::new(0, 10), Size::new(10, 41))));
        assert!(!region.contains_rect(&Rectangle::new(Point::new(0, 10), Size::new(10, 42))));
        assert!(!region.contains_rect(&Rectangle::new(Point::new(0, 9), Size::new(10, 10))));
    }
}
