use swl_engine::coords::Rect;
use swl_engine::raster::{Alignment, Renderer};
use swl_engine::text::FontRef;

use crate::capability::TextContent;
use crate::theme::Theme;
use crate::widget::{Widget, WidgetItem};

/// A line of text. Invisible without a live font.
pub struct TextItem {
    item: WidgetItem,
    text: TextContent,
}

impl TextItem {
    pub fn new(bounds: Rect, text: impl Into<String>, font: FontRef) -> Self {
        Self {
            item: WidgetItem::new(bounds),
            text: TextContent::new(text, font, Alignment::TOP_LEFT),
        }
    }

    pub fn themed(bounds: Rect, text: impl Into<String>, theme: &Theme) -> Self {
        Self::new(bounds, text, theme.font.clone())
    }

    pub fn align(mut self, alignment: Alignment) -> Self {
        self.text.alignment = alignment;
        self
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

    pub fn set_alignment(&mut self, alignment: Alignment) {
        self.text.alignment = alignment;
    }
}

impl Widget for TextItem {
    fn item(&self) -> &WidgetItem {
        &self.item
    }

    fn item_mut(&mut self) -> &mut WidgetItem {
        &mut self.item
    }

    fn is_visible(&self) -> bool {
        self.text.is_drawable()
    }

    fn render(&self, renderer: &mut Renderer) {
        self.text.render(renderer, self.item.bounds());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::MouseEvent;
    use std::rc::Weak;

    #[test]
    fn fontless_text_is_invisible_and_ignores_events() {
        let mut t = TextItem::new(Rect::new(0, 0, 50, 20), "hi", Weak::new());
        assert!(!t.is_visible());
        assert!(!t.handle_mouse_event(&MouseEvent::motion(5, 5)));
    }

    #[test]
    fn expired_font_is_not_adopted() {
        let mut t = TextItem::new(Rect::new(0, 0, 50, 20), "hi", Weak::new());
        t.set_font(Weak::new());
        assert!(!t.is_visible());
        t.set_text("bye");
        assert_eq!(t.text(), "bye");
    }
}
