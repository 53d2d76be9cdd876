//! Fixtures shared by unit tests.

use std::rc::Rc;

use swl_engine::coords::Rect;
use swl_engine::paint::Color;
use swl_engine::raster::Pixmap;
use swl_engine::text::{Font, SharedFont};

const FONT_BYTES: &[u8] = include_bytes!("../testdata/DejaVuSans.ttf");

pub(crate) fn font(size: f32, color: Color) -> SharedFont {
    Rc::new(Font::from_bytes(FONT_BYTES, size, color).expect("bundled test font parses"))
}

/// Pixels inside `area` that differ from `background`, i.e. were drawn over.
pub(crate) fn inked(pixels: &Pixmap, area: Rect, background: Color) -> usize {
    (area.y..area.bottom())
        .flat_map(|y| (area.x..area.right()).map(move |x| (x, y)))
        .filter(|&(x, y)| pixels.pixel(x, y).is_some_and(|c| c != background))
        .count()
}
