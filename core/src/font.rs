//! Text measurement and the built-in mono font book.

use embedded_graphics::{
    mono_font::{
        MonoFont, MonoTextStyle,
        ascii::{
            FONT_6X10, FONT_6X13, FONT_6X13_BOLD, FONT_7X13, FONT_7X13_BOLD, FONT_7X14,
            FONT_8X13, FONT_8X13_BOLD, FONT_9X15, FONT_9X15_BOLD, FONT_9X18, FONT_9X18_BOLD,
            FONT_10X20,
        },
    },
    pixelcolor::BinaryColor,
    prelude::*,
    text::{Baseline, renderer::TextRenderer},
};
use log::warn;

use crate::geometry::Orientation;

/// Which of the three text styles a draw uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontRole {
    Title,
    Task,
    Small,
}

/// Measures text for the layout engine.
///
/// Implementations must be total: every string gets a width, every role a height.
pub trait FontMetrics {
    /// Horizontal extent in pixels of `text` rendered with `role`.
    fn advance_width(&self, text: &str, role: FontRole) -> u32;

    /// Glyph cell height of `role`.
    fn line_height(&self, role: FontRole) -> u32;
}

/// Name of the font used whenever a lookup fails.
pub const DEFAULT_FONT_NAME: &str = "6x10";

const NAMED_FONTS: &[(&str, &MonoFont<'static>)] = &[
    ("6x10", &FONT_6X10),
    ("6x13", &FONT_6X13),
    ("6x13_bold", &FONT_6X13_BOLD),
    ("7x13", &FONT_7X13),
    ("7x13_bold", &FONT_7X13_BOLD),
    ("7x14", &FONT_7X14),
    ("8x13", &FONT_8X13),
    ("8x13_bold", &FONT_8X13_BOLD),
    ("9x15", &FONT_9X15),
    ("9x15_bold", &FONT_9X15_BOLD),
    ("9x18", &FONT_9X18),
    ("9x18_bold", &FONT_9X18_BOLD),
    ("10x20", &FONT_10X20),
];

/// A resolved font together with the name it is known by.
#[derive(Clone, Copy)]
pub struct FontHandle {
    name: &'static str,
    font: &'static MonoFont<'static>,
}

impl FontHandle {
    /// Looks a font up by name, falling back to [`FontHandle::default_font`] for unknown names.
    pub fn named(name: &str) -> Self {
        match Self::lookup(name) {
            Some(handle) => handle,
            None => {
                warn!("unknown font `{name}`, using `{DEFAULT_FONT_NAME}`");
                Self::default_font()
            }
        }
    }

    /// Strict lookup, `None` for unknown names.
    pub fn lookup(name: &str) -> Option<Self> {
        NAMED_FONTS
            .iter()
            .find(|(known, _)| known.eq_ignore_ascii_case(name))
            .map(|&(name, font)| FontHandle { name, font })
    }

    pub fn default_font() -> Self {
        let (name, font) = NAMED_FONTS[0];
        FontHandle { name, font }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn font(&self) -> &'static MonoFont<'static> {
        self.font
    }

    fn width_of(&self, text: &str) -> u32 {
        MonoTextStyle::new(self.font, BinaryColor::On)
            .measure_string(text, Point::zero(), Baseline::Top)
            .bounding_box
            .size
            .width
    }
}

impl core::fmt::Debug for FontHandle {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("FontHandle").field(&self.name).finish()
    }
}

impl PartialEq for FontHandle {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for FontHandle {}

/// The fonts used for the three roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontBook {
    pub title: FontHandle,
    pub task: FontHandle,
    pub small: FontHandle,
}

impl FontBook {
    /// Portrait picks the smaller faces.
    pub fn for_orientation(orientation: Orientation) -> Self {
        match orientation {
            Orientation::Landscape => FontBook {
                title: FontHandle::named("10x20"),
                task: FontHandle::named("9x18"),
                small: FontHandle::named("7x13"),
            },
            Orientation::Portrait => FontBook {
                title: FontHandle::named("9x18_bold"),
                task: FontHandle::named("8x13"),
                small: FontHandle::named("6x10"),
            },
        }
    }

    pub fn handle(&self, role: FontRole) -> FontHandle {
        match role {
            FontRole::Title => self.title,
            FontRole::Task => self.task,
            FontRole::Small => self.small,
        }
    }

    pub fn font(&self, role: FontRole) -> &'static MonoFont<'static> {
        self.handle(role).font()
    }

    pub fn with_role(mut self, role: FontRole, handle: FontHandle) -> Self {
        match role {
            FontRole::Title => self.title = handle,
            FontRole::Task => self.task = handle,
            FontRole::Small => self.small = handle,
        }
        self
    }
}

impl FontMetrics for FontBook {
    fn advance_width(&self, text: &str, role: FontRole) -> u32 {
        self.handle(role).width_of(text)
    }

    fn line_height(&self, role: FontRole) -> u32 {
        self.font(role).character_size.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_name_falls_back_to_default() {
        let handle = FontHandle::named("comic-sans-48");
        assert_eq!(handle.name(), DEFAULT_FONT_NAME);
        assert!(FontHandle::lookup("comic-sans-48").is_none());
        assert_eq!(FontHandle::named("9X18").name(), "9x18");
    }

    #[test]
    fn mono_width_is_per_character() {
        let book = FontBook::for_orientation(Orientation::Landscape);
        // 9x18 has no extra character spacing
        assert_eq!(book.advance_width("Walk dog", FontRole::Task), 8 * 9);
        assert_eq!(book.advance_width("", FontRole::Task), 0);
        assert_eq!(book.line_height(FontRole::Title), 20);
    }
}
