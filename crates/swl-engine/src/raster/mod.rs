//! Software rasterizer.
//!
//! Everything the toolkit draws lands in a [`Pixmap`]: either the renderer's
//! screen buffer or an off-screen [`Texture`] selected as the current target.
//! The runtime uploads the screen buffer to the window surface once per frame.

mod alignment;
mod pixmap;
mod renderer;
mod texture;

pub use alignment::Alignment;
pub use pixmap::Pixmap;
pub use renderer::{Renderer, TargetGuard};
pub use texture::{BlendMode, Texture};
