use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

use crate::coords::Size;

use super::Pixmap;

/// How a texture is composited when copied onto a target.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum BlendMode {
    /// Source pixels replace the destination.
    #[default]
    None,
    /// Source-over alpha blending.
    Blend,
}

#[derive(Debug)]
struct TextureInner {
    pixels: Pixmap,
    blend: BlendMode,
}

/// Shared handle to an off-screen pixel buffer.
///
/// Cloning is cheap and yields a handle to the same pixels, so a texture can
/// be both the renderer's current target and owned by a widget.
#[derive(Debug, Clone)]
pub struct Texture(Rc<RefCell<TextureInner>>);

impl Texture {
    pub fn new(width: u32, height: u32) -> Self {
        Self::from_pixmap(Pixmap::new(width, height))
    }

    pub fn from_pixmap(pixels: Pixmap) -> Self {
        Self(Rc::new(RefCell::new(TextureInner { pixels, blend: BlendMode::None })))
    }

    pub fn size(&self) -> Size {
        let inner = self.0.borrow();
        Size::new(inner.pixels.width() as i32, inner.pixels.height() as i32)
    }

    pub fn blend_mode(&self) -> BlendMode {
        self.0.borrow().blend
    }

    pub fn set_blend_mode(&self, mode: BlendMode) {
        self.0.borrow_mut().blend = mode;
    }

    pub fn pixels(&self) -> Ref<'_, Pixmap> {
        Ref::map(self.0.borrow(), |t| &t.pixels)
    }

    pub fn pixels_mut(&self) -> RefMut<'_, Pixmap> {
        RefMut::map(self.0.borrow_mut(), |t| &mut t.pixels)
    }

    /// `true` when both handles refer to the same pixels.
    pub fn ptr_eq(&self, other: &Texture) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}
