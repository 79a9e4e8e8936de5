//! E-paper task board: configuration, task sources, display sinks and the refresh cycle
//! around the [`todo_display_core`] layout engine.
//!
//! ```no_run
//! use todo_display::{Board, BoardConfig, MemorySink, StaticSource, TaskRecord, init_logging};
//!
//! # fn main() -> todo_display::Result<()> {
//! init_logging("info", None)?;
//! let board = Board::new(BoardConfig::load("board.toml")?)?;
//! let mut source = StaticSource::new([TaskRecord::new("Buy milk", "")]);
//! let mut sink = MemorySink::new();
//! board.refresh(&mut source, &mut sink, &chrono::Local::now())?;
//! # Ok(())
//! # }
//! ```

pub mod board;
pub mod config;
pub mod error;
pub mod logging;
pub mod preview;
pub mod sink;
pub mod source;

pub use board::{Board, CycleReport, TIMESTAMP_FORMAT, format_timestamp};
pub use config::{BoardConfig, ConfigError, DisplaySection, FontsSection, OwnersSection};
pub use error::{Error, Result};
pub use logging::{LoggingError, init_logging, logging_status};
pub use preview::{PreviewError, save_png, to_gray_image};
pub use sink::{DisplaySink, MemorySink, SinkError, SinkEvent};
pub use source::{SourceError, StaticSource, TaskRecord, TaskSource, collect_tasks};
pub use todo_display_core;
