use embedded_graphics::geometry::Point;

use crate::geometry::Orientation;

pub const TITLE: &str = "TO-DO LIST";
pub const TIMESTAMP_PREFIX: &str = "Updated: ";
pub const PLACEHOLDER: &str = "No tasks";

/// What happens when a list holds more tasks than its region can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum OverflowPolicy {
    /// Keep the line pitch and drop every task past the region's capacity.
    #[default]
    Truncate,
    /// Tighten the line pitch (down to checkbox height plus stroke) before dropping tasks.
    ShrinkToFit,
}

/// Layout constants for one orientation.
///
/// Portrait and landscape each get a fixed preset; nothing is interpolated between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutConfig {
    /// Left and right margin band.
    pub margin: u32,
    pub title_origin: Point,
    /// y of the rule under the title.
    pub header_rule_y: i32,
    /// Distance from the header rule down to the timestamp.
    pub timestamp_offset: i32,
    /// Distance from the timestamp down to the first task row.
    pub content_offset: i32,
    /// Height reserved for the footer at the bottom of the surface.
    pub footer_band: u32,
    /// Distance of the footer text from the bottom edge.
    pub footer_offset: u32,
    pub line_pitch: u32,
    pub box_size: u32,
    /// Horizontal space between checkbox and task text.
    pub text_gap: u32,
    /// Inset of the completion cross inside the checkbox.
    pub cross_inset: u32,
    /// Stroke width for rules, checkbox outlines, crosses and strike-throughs.
    pub stroke: u32,
    /// Owner label plus separator above each list in dual mode.
    pub region_header_height: u32,
    /// Offset of the owner separator rule from the region top.
    pub region_rule_offset: u32,
    /// Half of the spacing around the divider between the two dual-mode regions.
    pub region_gap: u32,
    /// Space kept free below the last row of a region.
    pub bottom_margin: u32,
    pub overflow: OverflowPolicy,
}

impl LayoutConfig {
    pub const LANDSCAPE: LayoutConfig = LayoutConfig {
        margin: 20,
        title_origin: Point::new(20, 15),
        header_rule_y: 70,
        timestamp_offset: 10,
        content_offset: 35,
        footer_band: 30,
        footer_offset: 25,
        line_pitch: 40,
        box_size: 20,
        text_gap: 12,
        cross_inset: 4,
        stroke: 2,
        region_header_height: 32,
        region_rule_offset: 26,
        region_gap: 5,
        bottom_margin: 0,
        overflow: OverflowPolicy::Truncate,
    };

    pub const PORTRAIT: LayoutConfig = LayoutConfig {
        margin: 20,
        title_origin: Point::new(20, 15),
        header_rule_y: 55,
        timestamp_offset: 10,
        content_offset: 35,
        footer_band: 30,
        footer_offset: 25,
        line_pitch: 35,
        box_size: 18,
        text_gap: 12,
        cross_inset: 4,
        stroke: 2,
        region_header_height: 28,
        region_rule_offset: 22,
        region_gap: 5,
        bottom_margin: 0,
        overflow: OverflowPolicy::Truncate,
    };

    pub const fn for_orientation(orientation: Orientation) -> Self {
        match orientation {
            Orientation::Portrait => Self::PORTRAIT,
            Orientation::Landscape => Self::LANDSCAPE,
        }
    }

    pub const fn with_overflow(mut self, overflow: OverflowPolicy) -> Self {
        self.overflow = overflow;
        self
    }

    pub fn timestamp_y(&self) -> i32 {
        self.header_rule_y + self.timestamp_offset
    }

    /// First y available to task lists.
    pub fn content_start(&self) -> i32 {
        self.timestamp_y() + self.content_offset
    }

    /// Last y available to task lists on a surface of the given height.
    pub fn content_end(&self, surface_height: u32) -> i32 {
        surface_height as i32 - self.footer_band as i32
    }

    pub fn footer_y(&self, surface_height: u32) -> i32 {
        surface_height as i32 - self.footer_offset as i32
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self::LANDSCAPE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn portrait_preset_is_tighter() {
        let portrait = LayoutConfig::for_orientation(Orientation::Portrait);
        let landscape = LayoutConfig::for_orientation(Orientation::Landscape);
        assert!(portrait.line_pitch < landscape.line_pitch);
        assert!(portrait.box_size < landscape.box_size);
        assert!(portrait.content_start() < landscape.content_start());
    }

    #[test]
    fn landscape_content_band() {
        let config = LayoutConfig::LANDSCAPE;
        assert_eq!(config.timestamp_y(), 80);
        assert_eq!(config.content_start(), 115);
        assert_eq!(config.content_end(480), 450);
        assert_eq!(config.footer_y(480), 455);
    }
}
