use swl_engine::coords::Rect;
use swl_engine::paint::Color;
use swl_engine::raster::{Alignment, Renderer};
use swl_engine::text::FontRef;

use crate::capability::{ButtonHandlers, Fill, TextContent};
use crate::event::MouseEvent;
use crate::theme::Theme;
use crate::widget::{Widget, WidgetItem};

/// A button with a centered label. Draws its background, then the text.
/// Invisible without a live font.
pub struct TextButton {
    item: WidgetItem,
    fill: Fill,
    handlers: ButtonHandlers,
    text: TextContent,
}

impl TextButton {
    pub fn new(bounds: Rect, text: impl Into<String>, font: FontRef, color: Color) -> Self {
        Self {
            item: WidgetItem::new(bounds),
            fill: Fill::new(color),
            handlers: ButtonHandlers::default(),
            text: TextContent::new(text, font, Alignment::CENTER),
        }
    }

    pub fn themed(bounds: Rect, text: impl Into<String>, theme: &Theme) -> Self {
        Self::new(bounds, text, theme.font.clone(), theme.primary)
    }

    pub fn background(mut self, color: Color) -> Self {
        self.fill.color = color;
        self
    }

    pub fn align(mut self, alignment: Alignment) -> Self {
        self.text.alignment = alignment;
        self
    }

    pub fn on_clicked(mut self, f: impl FnMut(&MouseEvent) + 'static) -> Self {
        self.handlers.set_clicked(f);
        self
    }

    pub fn on_left_clicked(mut self, f: impl FnMut(&MouseEvent) + 'static) -> Self {
        self.handlers.set_left_clicked(f);
        self
    }

    pub fn on_right_clicked(mut self, f: impl FnMut(&MouseEvent) + 'static) -> Self {
        self.handlers.set_right_clicked(f);
        self
    }

    pub fn on_pressed(mut self, f: impl FnMut(&MouseEvent) + 'static) -> Self {
        self.handlers.set_pressed(f);
        self
    }

    pub fn on_hovered(mut self, f: impl FnMut(&MouseEvent) + 'static) -> Self {
        self.handlers.set_hovered(f);
        self
    }

    pub fn handlers_mut(&mut self) -> &mut ButtonHandlers {
        &mut self.handlers
    }

    pub fn text(&self) -> &str {
        &self.text.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text.text = text.into();
    }

    pub fn set_font(&mut self, font: FontRef) {
        self.text.set_font(font);
    }

    pub fn set_background(&mut self, color: Color) {
        self.fill.color = color;
    }
}

impl Widget for TextButton {
    fn item(&self) -> &WidgetItem {
        &self.item
    }

    fn item_mut(&mut self) -> &mut WidgetItem {
        &mut self.item
    }

    fn is_visible(&self) -> bool {
        self.text.is_drawable()
    }

    fn handle_mouse_event(&mut self, event: &MouseEvent) -> bool {
        if !(self.is_visible() && self.item.accepts(event.pos)) {
            return false;
        }
        self.handlers.dispatch(event);
        true
    }

    fn render(&self, renderer: &mut Renderer) {
        let bounds = self.item.bounds();
        self.fill.render(renderer, bounds, self.item.is_enabled());
        self.text.render(renderer, bounds);
    }
}
