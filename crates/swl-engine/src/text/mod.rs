//! Font loading and single-line text layout (fontdue).

mod font;

pub use font::{Font, FontLoadError, FontRef, PlacedGlyph, SharedFont};
