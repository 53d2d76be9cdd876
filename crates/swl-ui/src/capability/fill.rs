use swl_engine::coords::Rect;
use swl_engine::paint::Color;
use swl_engine::raster::Renderer;

/// How much a disabled widget's background is darkened.
pub const DISABLED_DARKEN: f32 = 0.5;

/// Solid background color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fill {
    pub color: Color,
}

impl Fill {
    pub fn new(color: Color) -> Self {
        Self { color }
    }

    /// Color actually drawn for the given enabled state.
    pub fn effective(&self, enabled: bool) -> Color {
        if enabled { self.color } else { self.color.darken(DISABLED_DARKEN) }
    }

    pub fn render(&self, renderer: &mut Renderer, bounds: Rect, enabled: bool) {
        renderer.fill_rect(bounds, self.effective(enabled));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use swl_engine::paint::Colors;

    #[test]
    fn disabled_is_darkened_by_half() {
        let fill = Fill::new(Color::rgb(200, 100, 50));
        assert_eq!(fill.effective(true), Color::rgb(200, 100, 50));
        assert_eq!(fill.effective(false), Color::rgb(100, 50, 25));
    }

    #[test]
    fn render_fills_bounds() {
        let mut r = Renderer::new(8, 8);
        Fill::new(Colors::RED).render(&mut r, Rect::new(2, 2, 3, 3), true);
        assert_eq!(r.screen().pixel(3, 3), Some(Colors::RED));
        assert_eq!(r.screen().pixel(0, 0), Some(Colors::TRANSPARENT));
    }
}
