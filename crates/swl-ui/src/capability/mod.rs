//! Reusable widget capabilities.
//!
//! A concrete widget owns one [`WidgetItem`](crate::widget::WidgetItem) plus
//! whichever capabilities it needs, so no widget state is duplicated.

mod clickable;
mod fill;
mod text;

pub use clickable::{ButtonHandlers, MouseCallback};
pub use fill::Fill;
pub use text::TextContent;
