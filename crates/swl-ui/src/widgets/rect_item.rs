use swl_engine::coords::Rect;
use swl_engine::paint::Color;
use swl_engine::raster::Renderer;

use crate::capability::Fill;
use crate::theme::Theme;
use crate::widget::{Widget, WidgetItem};

/// A filled rectangle. Darkened when disabled.
pub struct RectItem {
    item: WidgetItem,
    fill: Fill,
}

impl RectItem {
    pub fn new(bounds: Rect, color: Color) -> Self {
        Self { item: WidgetItem::new(bounds), fill: Fill::new(color) }
    }

    pub fn themed(bounds: Rect, theme: &Theme) -> Self {
        Self::new(bounds, theme.primary)
    }

    pub fn background(mut self, color: Color) -> Self {
        self.fill.color = color;
        self
    }

    pub fn set_background(&mut self, color: Color) {
        self.fill.color = color;
    }

    pub fn background_color(&self) -> Color {
        self.fill.color
    }
}

impl Widget for RectItem {
    fn item(&self) -> &WidgetItem {
        &self.item
    }

    fn item_mut(&mut self) -> &mut WidgetItem {
        &mut self.item
    }

    fn render(&self, renderer: &mut Renderer) {
        self.fill.render(renderer, self.item.bounds(), self.item.is_enabled());
    }
}
