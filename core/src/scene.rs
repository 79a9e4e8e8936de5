//! Draw list produced by the renderer, consumed by [`Canvas::paint`](crate::Canvas::paint).

use alloc::{string::String, vec::Vec};
use embedded_graphics::{
    geometry::Point,
    primitives::{Line, Rectangle},
};

use crate::font::FontRole;

/// What a draw command stands for on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Title,
    Timestamp,
    HeaderRule,
    RegionLabel,
    RegionRule,
    Checkbox,
    Cross,
    TaskText,
    Strike,
    Placeholder,
    Divider,
    Footer,
}

/// A primitive in surface coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shape {
    /// Text with its top-left corner at `origin`.
    Text {
        origin: Point,
        text: String,
        role: FontRole,
    },
    Line { line: Line, stroke: u32 },
    /// Rectangle outline, stroke drawn inside the bounds.
    Rect { rect: Rectangle, stroke: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawCommand {
    pub mark: Mark,
    pub shape: Shape,
}

/// Ordered list of draw commands.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scene {
    commands: Vec<DrawCommand>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, mark: Mark, shape: Shape) {
        self.commands.push(DrawCommand { mark, shape });
    }

    pub fn text(&mut self, mark: Mark, origin: Point, text: impl Into<String>, role: FontRole) {
        self.push(
            mark,
            Shape::Text {
                origin,
                text: text.into(),
                role,
            },
        );
    }

    pub fn line(&mut self, mark: Mark, line: Line, stroke: u32) {
        self.push(mark, Shape::Line { line, stroke });
    }

    pub fn rect(&mut self, mark: Mark, rect: Rectangle, stroke: u32) {
        self.push(mark, Shape::Rect { rect, stroke });
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn iter(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands.iter()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Commands carrying `mark`, in draw order.
    pub fn marked(&self, mark: Mark) -> impl Iterator<Item = &Shape> {
        self.commands
            .iter()
            .filter(move |command| command.mark == mark)
            .map(|command| &command.shape)
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.marked(mark).count()
    }

    /// Strings of the text commands carrying `mark`.
    pub fn texts(&self, mark: Mark) -> impl Iterator<Item = &str> {
        self.marked(mark).filter_map(|shape| match shape {
            Shape::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    /// Sequence of marks, useful to check draw order.
    pub fn marks(&self) -> impl Iterator<Item = Mark> + '_ {
        self.commands.iter().map(|command| command.mark)
    }
}

impl<'a> IntoIterator for &'a Scene {
    type Item = &'a DrawCommand;
    type IntoIter = core::slice::Iter<'a, DrawCommand>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.iter()
    }
}
