//! swl engine crate.
//!
//! The platform layer under the widget toolkit: integer geometry, colors,
//! a software rasterizer with off-screen targets and fontdue text, and the
//! winit/wgpu runtime that shows the rasterized frame in a window.

pub mod core;
pub mod device;
pub mod input;
pub mod time;
pub mod window;

pub mod coords;
pub mod logging;
pub mod paint;
pub mod raster;
pub mod text;
