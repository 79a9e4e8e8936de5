//! Layout and rendering engine for e-paper task boards.
//!
//! Tasks go in, a 1-bit [`Canvas`] comes out. The pipeline is
//! [`RegionAllocator`] → [`ListLayoutEngine`] → [`Renderer`] (a [`Scene`] of draw commands)
//! → [`Canvas::paint`] → [`orientation::transform`].
//!
//! All coordinates are on the landscape-shaped surface; only the final transform knows about
//! portrait mounting.

#![no_std]

extern crate alloc;

pub mod canvas;
pub mod config;
pub mod font;
pub mod geometry;
pub mod layout;
pub mod orientation;
pub mod region;
pub mod renderer;
pub mod scene;
pub mod task;

pub use canvas::Canvas;
pub use config::{LayoutConfig, OverflowPolicy};
pub use font::{FontBook, FontHandle, FontMetrics, FontRole};
pub use geometry::{CanvasGeometry, GeometryError, ListMode, Orientation};
pub use layout::{ListLayout, ListLayoutEngine, TaskRow};
pub use region::{Allocation, Region, RegionAllocator};
pub use renderer::{BoardContent, Composition, ListSummary, Rendered, Renderer, render};
pub use scene::{DrawCommand, Mark, Scene, Shape};
pub use task::{GroupKey, Task, TaskGroups};
