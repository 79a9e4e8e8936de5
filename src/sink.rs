//! Panels that show a finished canvas.

use std::fmt;

use embedded_graphics::geometry::Size;
use log::debug;
use todo_display_core::Canvas;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkError {
    /// The canvas does not match the panel resolution.
    SizeMismatch { expected: Size, actual: Size },
    Device(String),
}

impl fmt::Display for SinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SinkError::SizeMismatch { expected, actual } => write!(
                f,
                "canvas is {}x{} but the panel is {}x{}",
                actual.width, actual.height, expected.width, expected.height
            ),
            SinkError::Device(reason) => write!(f, "display device error: {reason}"),
        }
    }
}

impl std::error::Error for SinkError {}

/// An e-paper panel driven through its power sequence.
pub trait DisplaySink {
    fn init(&mut self) -> Result<(), SinkError>;

    /// Blanks the panel to white.
    fn clear(&mut self) -> Result<(), SinkError>;

    fn display(&mut self, canvas: &Canvas) -> Result<(), SinkError>;

    fn sleep(&mut self) -> Result<(), SinkError>;

    /// Runs a full refresh: init, clear, display, sleep.
    fn show(&mut self, canvas: &Canvas) -> Result<(), SinkError> {
        self.init()?;
        self.clear()?;
        self.display(canvas)?;
        debug!("canvas sent to panel, putting it to sleep");
        self.sleep()
    }
}

/// One step of the power sequence, as seen by [`MemorySink`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkEvent {
    Init,
    Clear,
    Display,
    Sleep,
}

/// Keeps every shown canvas in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    size: Option<Size>,
    events: Vec<SinkEvent>,
    frames: Vec<Canvas>,
}

impl MemorySink {
    /// Accepts canvases of any size.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rejects canvases that are not `width` x `height`.
    pub fn with_size(width: u32, height: u32) -> Self {
        MemorySink {
            size: Some(Size::new(width, height)),
            ..Self::default()
        }
    }

    pub fn events(&self) -> &[SinkEvent] {
        &self.events
    }

    pub fn frames(&self) -> &[Canvas] {
        &self.frames
    }

    pub fn last_frame(&self) -> Option<&Canvas> {
        self.frames.last()
    }
}

impl DisplaySink for MemorySink {
    fn init(&mut self) -> Result<(), SinkError> {
        self.events.push(SinkEvent::Init);
        Ok(())
    }

    fn clear(&mut self) -> Result<(), SinkError> {
        self.events.push(SinkEvent::Clear);
        Ok(())
    }

    fn display(&mut self, canvas: &Canvas) -> Result<(), SinkError> {
        let actual = Size::new(canvas.width(), canvas.height());
        if let Some(expected) = self.size {
            if expected != actual {
                return Err(SinkError::SizeMismatch { expected, actual });
            }
        }
        self.events.push(SinkEvent::Display);
        self.frames.push(canvas.clone());
        Ok(())
    }

    fn sleep(&mut self) -> Result<(), SinkError> {
        self.events.push(SinkEvent::Sleep);
        Ok(())
    }
}
