/// Straight-alpha sRGB color, one byte per channel.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Fully opaque color.
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    #[inline]
    pub const fn transparent() -> Self {
        Self { r: 0, g: 0, b: 0, a: 0 }
    }

    #[inline]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    #[inline]
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Scales RGB towards black. `factor` is clamped to `[0, 1]`; `1.0` yields black.
    /// Alpha is preserved.
    #[inline]
    pub fn darken(self, factor: f32) -> Self {
        let keep = 1.0 - factor.clamp(0.0, 1.0);
        let ch = |c: u8| (c as f32 * keep) as u8;
        Self { r: ch(self.r), g: ch(self.g), b: ch(self.b), a: self.a }
    }

    /// Moves RGB towards white. `factor` is clamped to `[0, 1]`; `1.0` yields white.
    /// Alpha is preserved.
    #[inline]
    pub fn lighten(self, factor: f32) -> Self {
        let f = factor.clamp(0.0, 1.0);
        let ch = |c: u8| (c as f32 + (255 - c) as f32 * f) as u8;
        Self { r: ch(self.r), g: ch(self.g), b: ch(self.b), a: self.a }
    }
}

impl From<[u8; 4]> for Color {
    #[inline]
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self { r, g, b, a }
    }
}
