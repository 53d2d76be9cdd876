//! Widgets that draw a scrollable window of a model's rows.

pub mod dataview;
pub mod listview;
pub mod menuview;

pub use dataview::{DataView, IndexCallback, RowContext, RowPainter, ScrollCallback};
pub use listview::{ListColumns, ListView};
pub use menuview::{MenuRows, MenuView};
