/// Insets applied inside a widget's bounds (logical pixels).
///
/// Field order in [`Margins::new`] is top, bottom, left, right.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Margins {
    pub top: i32,
    pub bottom: i32,
    pub left: i32,
    pub right: i32,
}

impl Margins {
    #[inline]
    pub const fn new(top: i32, bottom: i32, left: i32, right: i32) -> Self {
        Self { top, bottom, left, right }
    }

    /// Same inset on all four sides.
    #[inline]
    pub const fn all(n: i32) -> Self {
        Self { top: n, bottom: n, left: n, right: n }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self::all(0)
    }

    #[inline]
    pub const fn horizontal(self) -> i32 {
        self.left + self.right
    }

    #[inline]
    pub const fn vertical(self) -> i32 {
        self.top + self.bottom
    }
}
