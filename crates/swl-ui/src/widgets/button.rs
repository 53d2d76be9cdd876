use swl_engine::coords::Rect;
use swl_engine::paint::Color;
use swl_engine::raster::Renderer;

use crate::capability::{ButtonHandlers, Fill};
use crate::event::MouseEvent;
use crate::theme::Theme;
use crate::widget::{Widget, WidgetItem};

/// A filled rectangle that reacts to clicks.
///
/// # Example
/// ```rust,ignore
/// let quit = Button::new(Rect::new(10, 10, 120, 40), Colors::RED)
///     .on_left_clicked(move |_| handle.quit());
/// ```
pub struct Button {
    item: WidgetItem,
    fill: Fill,
    handlers: ButtonHandlers,
}

impl Button {
    pub fn new(bounds: Rect, color: Color) -> Self {
        Self {
            item: WidgetItem::new(bounds),
            fill: Fill::new(color),
            handlers: ButtonHandlers::default(),
        }
    }

    pub fn themed(bounds: Rect, theme: &Theme) -> Self {
        Self::new(bounds, theme.primary)
    }

    pub fn background(mut self, color: Color) -> Self {
        self.fill.color = color;
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

    pub fn set_background(&mut self, color: Color) {
        self.fill.color = color;
    }
}

impl Widget for Button {
    fn item(&self) -> &WidgetItem {
        &self.item
    }

    fn item_mut(&mut self) -> &mut WidgetItem {
        &mut self.item
    }

    fn handle_mouse_event(&mut self, event: &MouseEvent) -> bool {
        if !(self.is_visible() && self.item.accepts(event.pos)) {
            return false;
        }
        self.handlers.dispatch(event);
        true
    }

    fn render(&self, renderer: &mut Renderer) {
        self.fill.render(renderer, self.item.bounds(), self.item.is_enabled());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;
    use swl_engine::input::MouseButton;
    use swl_engine::paint::Colors;

    fn counting_button() -> (Rc<Cell<u32>>, Button) {
        let hits = Rc::new(Cell::new(0));
        let h = hits.clone();
        let b = Button::new(Rect::new(10, 10, 20, 20), Colors::BLUE).on_clicked(move |_| h.set(h.get() + 1));
        (hits, b)
    }

    #[test]
    fn click_inside_fires() {
        let (hits, mut b) = counting_button();
        assert!(b.handle_mouse_event(&MouseEvent::up(MouseButton::Left, 30, 30)));
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn click_outside_ignored() {
        let (hits, mut b) = counting_button();
        assert!(!b.handle_mouse_event(&MouseEvent::up(MouseButton::Left, 31, 30)));
        assert_eq!(hits.get(), 0);
    }

    #[test]
    fn disabled_button_ignores_clicks() {
        let (hits, mut b) = counting_button();
        b.item_mut().disable();
        assert!(!b.handle_mouse_event(&MouseEvent::up(MouseButton::Left, 15, 15)));
        assert_eq!(hits.get(), 0);
    }
}
