//! swl UI: a retained widget tree on top of `swl-engine`.
//!
//! Widgets live in [`Canvas`]es, which own them, translate events into their
//! local frame and cache their drawing in a texture. Models hold row data and
//! views draw a scrollable window of it. [`Application`] ties a root canvas,
//! fonts and scenes to a window.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use swl_ui::prelude::*;
//!
//! #[derive(Clone, Copy, PartialEq, Eq, Hash)]
//! enum Scene { Main }
//!
//! let mut app = Application::new(AppConfig::new("hello", 400, 300));
//! let font = app.add_font("font.ttf", 24.0, Colors::WHITE)?;
//! let handle = app.handle();
//!
//! let mut main = Canvas::with_texture(Rect::new(0, 0, 400, 300), app.renderer());
//! main.add_item("quit", TextButton::new(Rect::new(150, 120, 100, 40), "Quit", font, Colors::RED)
//!     .on_left_clicked(move |_| handle.quit()));
//! let main = app.root_mut().add_canvas("main", main);
//!
//! app.add_scene(Scene::Main, move |root| root.show(main));
//! app.set_scene(Scene::Main);
//! app.run()?;
//! ```
//!
//! # Custom widgets
//!
//! Implement [`Widget`] for any type holding a [`WidgetItem`]:
//!
//! ```rust,ignore
//! struct Swatch { item: WidgetItem, color: Color }
//!
//! impl Widget for Swatch {
//!     fn item(&self) -> &WidgetItem { &self.item }
//!     fn item_mut(&mut self) -> &mut WidgetItem { &mut self.item }
//!     fn render(&self, r: &mut Renderer) { r.fill_rect(self.item.bounds(), self.color) }
//! }
//! ```

pub mod app;
pub mod capability;
pub mod error;
pub mod event;
pub mod models;
pub mod statemachine;
pub mod theme;
pub mod views;
pub mod widget;
pub mod widgets;

#[cfg(test)]
mod testing;

pub use app::{AppConfig, AppHandle, Application};
pub use error::{Error, Result};
pub use widget::{Widget, WidgetId, WidgetItem};
pub use widgets::Canvas;

/// Everything needed to build a UI, in one import.
pub mod prelude {
    pub use crate::app::{AppConfig, AppHandle, Application};
    pub use crate::capability::{ButtonHandlers, Fill, TextContent};
    pub use crate::event::{KeyEvent, MouseEvent, MouseEventKind, UiEvent, WheelEvent};
    pub use crate::models::{DataModel, ListItem, ListModel, MenuModel, MenuNode, SharedModel};
    pub use crate::statemachine::StateMachine;
    pub use crate::theme::Theme;
    pub use crate::views::{DataView, ListColumns, ListView, MenuRows, MenuView, RowContext, RowPainter};
    pub use crate::widget::{Widget, WidgetId, WidgetItem};
    pub use crate::widgets::{Button, Canvas, CanvasHandle, ChildFilter, ImageItem, RectItem, TextButton, TextItem};

    // Engine primitives every UI file touches.
    pub use swl_engine::coords::{Margins, Point, Rect, Size};
    pub use swl_engine::input::{Key, MouseButton};
    pub use swl_engine::paint::{Color, Colors, Themes};
    pub use swl_engine::raster::{Alignment, BlendMode, Renderer};
    pub use swl_engine::text::{FontRef, SharedFont};
}
