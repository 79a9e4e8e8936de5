use core::fmt;
use embedded_graphics::geometry::Size;

/// Physical mounting of the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Orientation {
    Portrait,
    #[default]
    Landscape,
}

/// Whether the board shows one list or two owner lists stacked on top of each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ListMode {
    #[default]
    Single,
    Dual,
}

/// Error type for geometry the renderer cannot represent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryError {
    /// Width or height is zero.
    EmptyCanvas,
    /// The drawing surface is not wider than both side margins.
    TooNarrow { surface_width: u32, margins: u32 },
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometryError::EmptyCanvas => write!(f, "canvas width and height must be positive"),
            GeometryError::TooNarrow {
                surface_width,
                margins,
            } => write!(
                f,
                "surface width {surface_width}px leaves no room inside {margins}px of margins"
            ),
        }
    }
}

impl core::error::Error for GeometryError {}

/// Dimensions of the image handed to the display sink, plus how the panel is mounted.
///
/// All layout happens on the *surface*: the landscape-shaped buffer that exists before the
/// orientation transform. In portrait the surface has width and height swapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasGeometry {
    width: u32,
    height: u32,
    orientation: Orientation,
}

impl CanvasGeometry {
    /// Creates a geometry, rejecting zero-sized canvases.
    pub fn new(width: u32, height: u32, orientation: Orientation) -> Result<Self, GeometryError> {
        if width == 0 || height == 0 {
            return Err(GeometryError::EmptyCanvas);
        }
        Ok(Self {
            width,
            height,
            orientation,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Size of the final, post-rotation buffer.
    pub fn output_size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Size of the pre-rotation drawing surface.
    pub fn surface_size(&self) -> Size {
        match self.orientation {
            Orientation::Landscape => Size::new(self.width, self.height),
            Orientation::Portrait => Size::new(self.height, self.width),
        }
    }
}
