use std::rc::Weak;

use swl_engine::paint::{Color, Themes};
use swl_engine::text::FontRef;

/// Defaults handed to widget constructors instead of global state.
///
/// [`Application::theme`](crate::Application::theme) returns one whose font
/// is the first font registered with the application.
#[derive(Debug, Clone)]
pub struct Theme {
    pub font: FontRef,
    pub background: Color,
    pub primary: Color,
    pub secondary: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            font: Weak::new(),
            background: Themes::BACKGROUND,
            primary: Themes::PRIMARY,
            secondary: Themes::SECONDARY,
        }
    }
}

impl Theme {
    pub fn with_font(mut self, font: FontRef) -> Self {
        self.font = font;
        self
    }
}
