//! Integer geometry shared by the rasterizer and the widget toolkit.
//!
//! Canonical space:
//! - Logical pixels
//! - Origin top-left
//! - +X right, +Y down
//!
//! Widgets store bounds in parent-local coordinates; the owning canvas
//! translates events before forwarding them.

mod margins;
mod point;
mod rect;

pub use margins::Margins;
pub use point::{Point, Size};
pub use rect::Rect;
