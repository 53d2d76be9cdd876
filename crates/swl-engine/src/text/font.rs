use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::rc::{Rc, Weak};

use fontdue::layout::{CoordinateSystem, GlyphRasterConfig, Layout, LayoutSettings, TextStyle};
use fontdue::Metrics;

use crate::coords::Size;
use crate::paint::Color;

/// Error returned by [`Font::from_file`] and [`Font::from_bytes`].
#[derive(Debug)]
pub enum FontLoadError {
    Io { path: PathBuf, source: std::io::Error },
    Parse(String),
}

impl fmt::Display for FontLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontLoadError::Io { path, source } => {
                write!(f, "font load error: cannot read {}: {source}", path.display())
            }
            FontLoadError::Parse(msg) => write!(f, "font load error: {msg}"),
        }
    }
}

impl std::error::Error for FontLoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FontLoadError::Io { source, .. } => Some(source),
            FontLoadError::Parse(_) => None,
        }
    }
}

/// Canonical owner of a loaded font. The application keeps these alive.
pub type SharedFont = Rc<Font>;

/// Non-owning font handle held by widgets. An expired handle means
/// "no font", and text-bearing widgets treat themselves as invisible.
pub type FontRef = Weak<Font>;

/// A single positioned glyph produced by [`Font::layout`], relative to the
/// top-left corner of the laid-out text.
#[derive(Debug, Clone, Copy)]
pub struct PlacedGlyph {
    pub key: GlyphRasterConfig,
    pub x: i32,
    pub y: i32,
    pub width: usize,
    pub height: usize,
}

/// A TrueType/OpenType face bound to a point size and a text color.
///
/// Glyph bitmaps are rasterized on first use and cached for the font's
/// lifetime, keyed by `GlyphRasterConfig`.
pub struct Font {
    face: fontdue::Font,
    size: f32,
    color: Color,
    source: Option<PathBuf>,
    layout: RefCell<Layout<()>>,
    glyphs: RefCell<HashMap<GlyphRasterConfig, Rc<(Metrics, Vec<u8>)>>>,
}

impl Font {
    /// Loads a font file from `path`.
    pub fn from_file(path: impl AsRef<Path>, size: f32, color: Color) -> Result<Self, FontLoadError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| FontLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut font = Self::from_bytes(&bytes, size, color)?;
        font.source = Some(path.to_path_buf());
        log::info!("loaded font {} at {size}pt", path.display());
        Ok(font)
    }

    /// Parses a font from raw bytes.
    pub fn from_bytes(bytes: &[u8], size: f32, color: Color) -> Result<Self, FontLoadError> {
        let settings = fontdue::FontSettings { scale: size.max(1.0), ..Default::default() };
        let face = fontdue::Font::from_bytes(bytes, settings).map_err(|e| FontLoadError::Parse(e.to_string()))?;
        Ok(Self {
            face,
            size: size.max(1.0),
            color,
            source: None,
            layout: RefCell::new(Layout::new(CoordinateSystem::PositiveYDown)),
            glyphs: RefCell::new(HashMap::new()),
        })
    }

    #[inline]
    pub fn size(&self) -> f32 {
        self.size
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Path the font was loaded from, if any.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Lays out a single line of text.
    pub fn layout(&self, text: &str) -> (Vec<PlacedGlyph>, Size) {
        let mut layout = self.layout.borrow_mut();
        layout.reset(&LayoutSettings::default());
        layout.append(&[&self.face], &TextStyle::new(text, self.size, 0));

        let placed: Vec<PlacedGlyph> = layout
            .glyphs()
            .iter()
            .filter(|g| !g.parent.is_control())
            .map(|g| PlacedGlyph {
                key: g.key,
                x: g.x.round() as i32,
                y: g.y.round() as i32,
                width: g.width,
                height: g.height,
            })
            .collect();

        // Pen position after each glyph, so trailing spaces count toward the width.
        let width = layout
            .glyphs()
            .iter()
            .map(|g| {
                let m = self.face.metrics_indexed(g.key.glyph_index, self.size);
                g.x - m.xmin as f32 + m.advance_width
            })
            .fold(0.0f32, f32::max);
        let height = layout.height().max(self.size);

        (placed, Size::new(width.ceil() as i32, height.ceil() as i32))
    }

    /// Width and height of `text` in logical pixels.
    pub fn text_size(&self, text: &str) -> Size {
        self.layout(text).1
    }

    /// Coverage bitmap for one glyph (one byte per pixel).
    pub fn glyph(&self, key: GlyphRasterConfig) -> Rc<(Metrics, Vec<u8>)> {
        if let Some(hit) = self.glyphs.borrow().get(&key) {
            return Rc::clone(hit);
        }
        let raster = Rc::new(self.face.rasterize_config(key));
        self.glyphs.borrow_mut().insert(key, Rc::clone(&raster));
        raster
    }
}

impl fmt::Debug for Font {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Font")
            .field("size", &self.size)
            .field("color", &self.color)
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}
