use crate::coords::{Rect, Size};

bitflags::bitflags! {
    /// Placement of content inside a box. Combine one horizontal flag with one
    /// vertical flag; a missing axis falls back to `LEFT` / `TOP`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Alignment: u8 {
        const LEFT    = 1 << 0;
        const HCENTER = 1 << 1;
        const RIGHT   = 1 << 2;
        const TOP     = 1 << 3;
        const VCENTER = 1 << 4;
        const BOTTOM  = 1 << 5;

        const TOP_LEFT = Self::LEFT.bits() | Self::TOP.bits();
        const CENTER   = Self::HCENTER.bits() | Self::VCENTER.bits();
    }
}

impl Default for Alignment {
    fn default() -> Self {
        Alignment::TOP_LEFT
    }
}

impl Alignment {
    /// Top-left corner at which content of `size` lands inside `bounds`.
    pub fn place(self, size: Size, bounds: Rect) -> (i32, i32) {
        let x = if self.contains(Alignment::RIGHT) {
            bounds.right() - size.w
        } else if self.contains(Alignment::HCENTER) {
            bounds.x + (bounds.w - size.w) / 2
        } else {
            bounds.x
        };
        let y = if self.contains(Alignment::BOTTOM) {
            bounds.bottom() - size.h
        } else if self.contains(Alignment::VCENTER) {
            bounds.y + (bounds.h - size.h) / 2
        } else {
            bounds.y
        };
        (x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_places_in_middle() {
        let at = Alignment::CENTER.place(Size::new(10, 4), Rect::new(0, 0, 30, 20));
        assert_eq!(at, (10, 8));
    }

    #[test]
    fn right_bottom_hugs_far_edges() {
        let at = (Alignment::RIGHT | Alignment::BOTTOM).place(Size::new(10, 4), Rect::new(5, 5, 30, 20));
        assert_eq!(at, (25, 21));
    }

    #[test]
    fn missing_axis_defaults_to_left_top() {
        assert_eq!(Alignment::VCENTER.place(Size::new(10, 10), Rect::new(3, 0, 50, 30)), (3, 10));
        assert_eq!(Alignment::HCENTER.place(Size::new(10, 10), Rect::new(0, 7, 30, 50)), (10, 7));
    }
}
