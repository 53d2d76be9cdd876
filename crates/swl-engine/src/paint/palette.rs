use super::Color;

/// Named colors.
pub struct Colors;

impl Colors {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const CYAN: Color = Color::rgb(0, 255, 255);
    pub const GREEN: Color = Color::rgb(0, 128, 0);
    pub const LIGHT_BLUE: Color = Color::rgb(0, 162, 232);
    pub const LIGHT_GREEN: Color = Color::rgb(0, 255, 0);
    pub const LIGHT_GREY: Color = Color::rgb(204, 204, 204);
    pub const MAGENTA: Color = Color::rgb(255, 0, 255);
    pub const ORANGE: Color = Color::rgb(230, 98, 10);
    pub const PURPLE: Color = Color::rgb(128, 0, 128);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const TRANSPARENT: Color = Color::transparent();
}

/// Default role colors used when a widget is built without explicit colors.
pub struct Themes;

impl Themes {
    pub const BACKGROUND: Color = Colors::BLACK;
    pub const PRIMARY: Color = Colors::BLUE;
    pub const SECONDARY: Color = Colors::YELLOW;
}
