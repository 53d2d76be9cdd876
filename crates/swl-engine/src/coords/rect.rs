use super::{Margins, Point, Size};

/// Axis-aligned rectangle in logical pixels (top-left origin).
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    #[inline]
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    #[inline]
    pub const fn from_pos_size(pos: Point, size: Size) -> Self {
        Self { x: pos.x, y: pos.y, w: size.w, h: size.h }
    }

    #[inline]
    pub const fn pos(self) -> Point {
        Point::new(self.x, self.y)
    }

    #[inline]
    pub const fn size(self) -> Size {
        Size::new(self.w, self.h)
    }

    #[inline]
    pub const fn right(self) -> i32 {
        self.x + self.w
    }

    #[inline]
    pub const fn bottom(self) -> i32 {
        self.y + self.h
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.w <= 0 || self.h <= 0
    }

    /// Inclusive containment: both the min and the max edge belong to the rect.
    ///
    /// A 10×10 rect at the origin therefore accepts `(10, 10)`.
    #[inline]
    pub fn contains(self, p: Point) -> bool {
        p.x >= self.x && p.x <= self.right() && p.y >= self.y && p.y <= self.bottom()
    }

    /// Returns the rect translated by `(-dx, -dy)`, i.e. expressed in a frame
    /// whose origin sits at `(dx, dy)`.
    #[inline]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self { x: self.x - dx, y: self.y - dy, w: self.w, h: self.h }
    }

    #[inline]
    pub const fn translate(self, dx: i32, dy: i32) -> Self {
        Self { x: self.x + dx, y: self.y + dy, w: self.w, h: self.h }
    }

    /// Shrinks the rect by `m`. Width and height never go negative.
    #[inline]
    pub fn inset(self, m: Margins) -> Self {
        Self {
            x: self.x + m.left,
            y: self.y + m.top,
            w: (self.w - m.horizontal()).max(0),
            h: (self.h - m.vertical()).max(0),
        }
    }

    /// Overlapping area of two rects, or `None` when they do not overlap
    /// by at least one pixel.
    #[inline]
    pub fn intersect(self, other: Rect) -> Option<Rect> {
        let x0 = self.x.max(other.x);
        let y0 = self.y.max(other.y);
        let x1 = self.right().min(other.right());
        let y1 = self.bottom().min(other.bottom());

        let w = x1 - x0;
        let h = y1 - y0;

        if w <= 0 || h <= 0 {
            None
        } else {
            Some(Rect::new(x0, y0, w, h))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x: i32, y: i32, w: i32, h: i32) -> Rect { Rect::new(x, y, w, h) }

    // ── contains ──────────────────────────────────────────────────────────

    #[test]
    fn contains_interior_point() {
        assert!(r(0, 0, 10, 10).contains(Point::new(5, 5)));
    }

    #[test]
    fn contains_top_left_inclusive() {
        assert!(r(0, 0, 10, 10).contains(Point::new(0, 0)));
    }

    #[test]
    fn contains_bottom_right_inclusive() {
        assert!(r(0, 0, 10, 10).contains(Point::new(10, 10)));
        assert!(!r(0, 0, 10, 10).contains(Point::new(11, 10)));
    }

    #[test]
    fn contains_outside() {
        assert!(!r(0, 0, 10, 10).contains(Point::new(-1, 5)));
        assert!(!r(0, 0, 10, 10).contains(Point::new(5, -1)));
    }

    // ── offset / inset ────────────────────────────────────────────────────

    #[test]
    fn offset_moves_into_local_frame() {
        assert_eq!(r(30, 40, 5, 5).offset(10, 20), r(20, 20, 5, 5));
    }

    #[test]
    fn inset_applies_each_side() {
        let m = Margins::new(1, 2, 3, 4);
        assert_eq!(r(0, 0, 100, 50).inset(m), r(3, 1, 93, 47));
    }

    #[test]
    fn inset_never_negative() {
        assert_eq!(r(0, 0, 4, 4).inset(Margins::all(10)).size(), Size::new(0, 0));
    }

    // ── intersect ─────────────────────────────────────────────────────────

    #[test]
    fn intersect_overlapping() {
        let a = r(0, 0, 10, 10);
        let b = r(5, 5, 10, 10);
        assert_eq!(a.intersect(b).unwrap(), r(5, 5, 5, 5));
    }

    #[test]
    fn intersect_touching_edge_returns_none() {
        let a = r(0, 0, 10, 10);
        let b = r(10, 0, 10, 10);
        assert!(a.intersect(b).is_none());
    }

    #[test]
    fn intersect_disjoint_returns_none() {
        assert!(r(0, 0, 5, 5).intersect(r(20, 20, 5, 5)).is_none());
    }
}
