use std::path::Path;

use swl_engine::coords::Rect;
use swl_engine::raster::{Renderer, Texture};

use crate::error::{Error, Result};
use crate::widget::{Widget, WidgetItem};

/// A picture loaded from disk and stretched to the widget's bounds.
/// Invisible until an image is loaded.
#[derive(Default)]
pub struct ImageItem {
    item: WidgetItem,
    texture: Option<Texture>,
}

impl ImageItem {
    pub fn new(bounds: Rect) -> Self {
        Self { item: WidgetItem::new(bounds), texture: None }
    }

    /// Loads `path` into a new image. An empty `bounds` size is replaced by
    /// the image's own size.
    pub fn open(renderer: &Renderer, path: impl AsRef<Path>, bounds: Rect) -> Result<Self> {
        let mut image = Self::new(bounds);
        image.load(renderer, path)?;
        Ok(image)
    }

    /// Replaces the texture with the decoded contents of `path`.
    /// On failure the previous texture is kept.
    pub fn load(&mut self, renderer: &Renderer, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let decoded = image::open(path)
            .map_err(|source| Error::Image { path: path.to_path_buf(), source })?
            .to_rgba8();
        let (w, h) = decoded.dimensions();
        self.install(renderer, path, w, h, decoded.into_raw())
    }

    fn install(&mut self, renderer: &Renderer, path: &Path, width: u32, height: u32, rgba: Vec<u8>) -> Result<()> {
        let texture = renderer.texture_from_rgba(width, height, rgba).ok_or_else(|| Error::ImageBuffer {
            path: path.to_path_buf(),
            width,
            height,
        })?;
        if self.item.bounds().is_empty() {
            self.item.set_size(width as i32, height as i32);
        }
        log::info!("loaded image {} ({width}x{height})", path.display());
        self.texture = Some(texture);
        Ok(())
    }

    pub fn set_texture(&mut self, texture: Texture) {
        self.texture = Some(texture);
    }

    pub fn texture(&self) -> Option<&Texture> {
        self.texture.as_ref()
    }
}

impl Widget for ImageItem {
    fn item(&self) -> &WidgetItem {
        &self.item
    }

    fn item_mut(&mut self) -> &mut WidgetItem {
        &mut self.item
    }

    fn is_visible(&self) -> bool {
        self.texture.is_some()
    }

    fn render(&self, renderer: &mut Renderer) {
        if let Some(texture) = &self.texture {
            renderer.copy(texture, self.item.bounds());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use swl_engine::paint::Colors;

    #[test]
    fn no_texture_is_invisible() {
        assert!(!ImageItem::new(Rect::new(0, 0, 4, 4)).is_visible());
    }

    #[test]
    fn renders_texture_into_bounds() {
        let mut r = Renderer::new(8, 8);
        let t = r.create_target(1, 1);
        t.pixels_mut().fill(Colors::ORANGE);
        let mut img = ImageItem::new(Rect::new(2, 2, 4, 4));
        img.set_texture(t);
        img.render(&mut r);
        assert_eq!(r.screen().pixel(5, 5), Some(Colors::ORANGE));
        assert_eq!(r.screen().pixel(1, 1), Some(Colors::TRANSPARENT));
    }

    #[test]
    fn missing_file_is_an_error() {
        let r = Renderer::new(1, 1);
        let err = ImageItem::open(&r, "/nonexistent/swl.png", Rect::default());
        assert!(matches!(err, Err(Error::Image { .. })));
    }

    #[test]
    fn malformed_buffer_is_an_error() {
        let r = Renderer::new(1, 1);
        let mut img = ImageItem::new(Rect::new(0, 0, 4, 4));
        let err = img.install(&r, Path::new("bad.png"), 2, 2, vec![0; 5]);
        assert!(matches!(err, Err(Error::ImageBuffer { width: 2, height: 2, .. })));
        assert!(img.texture().is_none());
        assert!(!img.is_visible());
    }

    #[test]
    fn empty_bounds_take_image_size() {
        let r = Renderer::new(1, 1);
        let mut img = ImageItem::new(Rect::new(3, 4, 0, 0));
        img.install(&r, Path::new("dot.png"), 2, 3, vec![255; 2 * 3 * 4]).unwrap();
        assert_eq!(img.item().bounds(), Rect::new(3, 4, 2, 3));
        assert!(img.is_visible());
    }
}
