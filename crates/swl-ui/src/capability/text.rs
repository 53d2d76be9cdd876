use swl_engine::coords::Rect;
use swl_engine::raster::{Alignment, Renderer};
use swl_engine::text::FontRef;

/// A string, the font to draw it with and where it sits inside the bounds.
///
/// The font is a weak reference: once the owner drops it the text is no
/// longer drawable and [`is_drawable`](Self::is_drawable) turns false.
#[derive(Debug, Clone, Default)]
pub struct TextContent {
    pub text: String,
    font: FontRef,
    pub alignment: Alignment,
}

impl TextContent {
    pub fn new(text: impl Into<String>, font: FontRef, alignment: Alignment) -> Self {
        Self { text: text.into(), font, alignment }
    }

    pub fn font(&self) -> &FontRef {
        &self.font
    }

    /// Replaces the font unless `font` is already expired.
    pub fn set_font(&mut self, font: FontRef) {
        if font.strong_count() > 0 {
            self.font = font;
        }
    }

    pub fn is_drawable(&self) -> bool {
        self.font.strong_count() > 0
    }

    pub fn render(&self, renderer: &mut Renderer, bounds: Rect) {
        if let Some(font) = self.font.upgrade() {
            renderer.draw_text(&font, &self.text, bounds, self.alignment);
        }
    }
}
