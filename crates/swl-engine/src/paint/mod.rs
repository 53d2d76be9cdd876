//! Color representation shared between the toolkit and the rasterizer.
//!
//! Geometry types remain in `coords`.

pub mod color;
pub mod palette;

pub use color::Color;
pub use palette::{Colors, Themes};
