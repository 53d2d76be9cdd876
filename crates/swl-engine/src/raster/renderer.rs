use std::ops::{Deref, DerefMut};

use crate::coords::{Rect, Size};
use crate::paint::Color;
use crate::text::Font;

use super::{Alignment, BlendMode, Pixmap, Texture};

/// Immediate-mode drawing onto the screen buffer or an off-screen texture.
///
/// The screen buffer has the application's logical size; the runtime scales it
/// to the physical surface on present.
#[derive(Debug)]
pub struct Renderer {
    screen: Pixmap,
    target: Option<Texture>,
}

impl Renderer {
    pub fn new(width: u32, height: u32) -> Self {
        Self { screen: Pixmap::new(width, height), target: None }
    }

    /// Resizes the screen buffer. Existing contents are discarded.
    pub fn set_logical_size(&mut self, width: u32, height: u32) {
        if self.screen.width() != width || self.screen.height() != height {
            self.screen = Pixmap::new(width, height);
        }
    }

    pub fn logical_size(&self) -> Size {
        Size::new(self.screen.width() as i32, self.screen.height() as i32)
    }

    /// The screen buffer as last drawn.
    pub fn screen(&self) -> &Pixmap {
        &self.screen
    }

    // ── targets ───────────────────────────────────────────────────────────

    /// Current off-screen target, or `None` when drawing to the screen.
    pub fn target(&self) -> Option<Texture> {
        self.target.clone()
    }

    pub fn set_target(&mut self, target: Option<Texture>) {
        self.target = target;
    }

    /// Makes `texture` the target until the returned guard is dropped, then
    /// restores whatever target was active before.
    pub fn push_target(&mut self, texture: Texture) -> TargetGuard<'_> {
        let previous = self.target.replace(texture);
        TargetGuard { renderer: self, previous }
    }

    /// Allocates a transparent texture usable as a render target.
    pub fn create_target(&self, width: u32, height: u32) -> Texture {
        Texture::new(width.max(1), height.max(1))
    }

    /// Wraps decoded RGBA8 pixels in a texture. `None` if the length is wrong.
    pub fn texture_from_rgba(&self, width: u32, height: u32, rgba: Vec<u8>) -> Option<Texture> {
        let texture = Texture::from_pixmap(Pixmap::from_rgba(width, height, rgba)?);
        texture.set_blend_mode(BlendMode::Blend);
        Some(texture)
    }

    fn with_target<R>(&mut self, f: impl FnOnce(&mut Pixmap) -> R) -> R {
        match &self.target {
            Some(texture) => f(&mut texture.pixels_mut()),
            None => f(&mut self.screen),
        }
    }

    // ── drawing ───────────────────────────────────────────────────────────

    pub fn clear(&mut self, color: Color) {
        self.with_target(|p| p.fill(color));
    }

    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.with_target(|p| p.fill_rect(rect, color));
    }

    /// One-pixel outline along the inside of `rect`.
    pub fn draw_rect(&mut self, rect: Rect, color: Color) {
        if rect.is_empty() {
            return;
        }
        self.with_target(|p| {
            p.fill_rect(Rect::new(rect.x, rect.y, rect.w, 1), color);
            p.fill_rect(Rect::new(rect.x, rect.bottom() - 1, rect.w, 1), color);
            p.fill_rect(Rect::new(rect.x, rect.y, 1, rect.h), color);
            p.fill_rect(Rect::new(rect.right() - 1, rect.y, 1, rect.h), color);
        });
    }

    /// Copies `texture` into `dst` on the current target, scaling if needed.
    pub fn copy(&mut self, texture: &Texture, dst: Rect) {
        if self.target.as_ref().is_some_and(|t| t.ptr_eq(texture)) {
            log::warn!("copy: texture is the current render target; skipped");
            return;
        }
        let blend = texture.blend_mode() == BlendMode::Blend;
        let src = texture.pixels();
        self.with_target(|p| p.draw_pixmap(&src, dst, blend));
    }

    /// Size of `text` when drawn with `font`.
    pub fn text_size(&self, font: &Font, text: &str) -> Size {
        font.text_size(text)
    }

    /// Draws one line of `text` in the font's color, placed inside `bounds`
    /// according to `alignment` and clipped to `bounds`.
    pub fn draw_text(&mut self, font: &Font, text: &str, bounds: Rect, alignment: Alignment) {
        if text.is_empty() || bounds.is_empty() {
            return;
        }
        let (glyphs, size) = font.layout(text);
        let (ox, oy) = alignment.place(size, bounds);
        let color = font.color();

        self.with_target(|p| {
            let Some(clip) = bounds.intersect(p.bounds()) else { return };
            for g in &glyphs {
                if g.width == 0 || g.height == 0 {
                    continue;
                }
                let raster = font.glyph(g.key);
                let coverage = &raster.1;
                for row in 0..g.height {
                    let y = oy + g.y + row as i32;
                    if y < clip.y || y >= clip.bottom() {
                        continue;
                    }
                    for col in 0..g.width {
                        let x = ox + g.x + col as i32;
                        if x < clip.x || x >= clip.right() {
                            continue;
                        }
                        let a = coverage.get(row * g.width + col).copied().unwrap_or(0);
                        p.blend(x, y, color, a);
                    }
                }
            }
        });
    }
}

/// Scoped render-target switch returned by [`Renderer::push_target`].
///
/// Dereferences to the renderer; the previous target is restored on drop,
/// including on early return.
pub struct TargetGuard<'a> {
    renderer: &'a mut Renderer,
    previous: Option<Texture>,
}

impl Deref for TargetGuard<'_> {
    type Target = Renderer;

    fn deref(&self) -> &Renderer {
        &*self.renderer
    }
}

impl DerefMut for TargetGuard<'_> {
    fn deref_mut(&mut self) -> &mut Renderer {
        &mut *self.renderer
    }
}

impl Drop for TargetGuard<'_> {
    fn drop(&mut self) {
        self.renderer.target = self.previous.take();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::Colors;

    // ── targets ───────────────────────────────────────────────────────────

    #[test]
    fn guard_restores_previous_target() {
        let mut r = Renderer::new(8, 8);
        let outer = r.create_target(4, 4);
        r.set_target(Some(outer.clone()));
        {
            let inner = r.create_target(2, 2);
            let mut g = r.push_target(inner.clone());
            assert!(g.target().unwrap().ptr_eq(&inner));
            g.clear(Colors::RED);
        }
        assert!(r.target().unwrap().ptr_eq(&outer));
    }

    #[test]
    fn guard_restores_screen() {
        let mut r = Renderer::new(8, 8);
        {
            let t = r.create_target(2, 2);
            let _g = r.push_target(t);
        }
        assert!(r.target().is_none());
    }

    // ── drawing ───────────────────────────────────────────────────────────

    #[test]
    fn fill_goes_to_current_target_only() {
        let mut r = Renderer::new(4, 4);
        let t = r.create_target(4, 4);
        {
            let mut g = r.push_target(t.clone());
            g.fill_rect(Rect::new(0, 0, 2, 2), Colors::GREEN);
        }
        assert_eq!(t.pixels().pixel(1, 1), Some(Colors::GREEN));
        assert_eq!(r.screen().pixel(1, 1), Some(Colors::TRANSPARENT));
    }

    #[test]
    fn copy_places_texture_at_bounds() {
        let mut r = Renderer::new(10, 10);
        let t = r.create_target(2, 2);
        t.pixels_mut().fill(Colors::BLUE);
        r.clear(Colors::BLACK);
        r.copy(&t, Rect::new(5, 5, 2, 2));
        assert_eq!(r.screen().pixel(5, 5), Some(Colors::BLUE));
        assert_eq!(r.screen().pixel(4, 4), Some(Colors::BLACK));
    }

    #[test]
    fn copy_onto_itself_is_skipped() {
        let mut r = Renderer::new(4, 4);
        let t = r.create_target(2, 2);
        let mut g = r.push_target(t.clone());
        g.copy(&t, Rect::new(0, 0, 2, 2));
    }

    #[test]
    fn draw_rect_leaves_interior() {
        let mut r = Renderer::new(5, 5);
        r.draw_rect(Rect::new(0, 0, 5, 5), Colors::WHITE);
        assert_eq!(r.screen().pixel(0, 2), Some(Colors::WHITE));
        assert_eq!(r.screen().pixel(4, 4), Some(Colors::WHITE));
        assert_eq!(r.screen().pixel(2, 2), Some(Colors::TRANSPARENT));
    }
}
