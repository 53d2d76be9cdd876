use crate::coords::Rect;
use crate::paint::Color;

/// Straight-alpha RGBA8 pixel buffer, row-major, top-left origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pixmap {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Pixmap {
    /// Transparent pixmap of the given size.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height, data: vec![0; width as usize * height as usize * 4] }
    }

    /// Wraps existing RGBA8 bytes. Returns `None` if the length does not match.
    pub fn from_rgba(width: u32, height: u32, data: Vec<u8>) -> Option<Self> {
        (data.len() == width as usize * height as usize * 4).then_some(Self { width, height, data })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.width as i32, self.height as i32)
    }

    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some((y as usize * self.width as usize + x as usize) * 4)
    }

    /// Color at `(x, y)`, or `None` outside the buffer.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        let i = self.index(x, y)?;
        Some(Color::rgba(self.data[i], self.data[i + 1], self.data[i + 2], self.data[i + 3]))
    }

    /// Overwrites one pixel.
    #[inline]
    pub fn put(&mut self, x: i32, y: i32, c: Color) {
        if let Some(i) = self.index(x, y) {
            self.data[i..i + 4].copy_from_slice(&c.to_array());
        }
    }

    /// Source-over blend of `c` scaled by `coverage` (0–255) onto one pixel.
    pub fn blend(&mut self, x: i32, y: i32, c: Color, coverage: u8) {
        let Some(i) = self.index(x, y) else { return };
        let sa = c.a as u32 * coverage as u32 / 255;
        if sa == 0 {
            return;
        }
        if sa == 255 {
            self.data[i..i + 4].copy_from_slice(&[c.r, c.g, c.b, 255]);
            return;
        }
        let inv = 255 - sa;
        let dst = &mut self.data[i..i + 4];
        let da = dst[3] as u32;
        let out_a = sa + da * inv / 255;
        if out_a == 0 {
            return;
        }
        for (d, s) in dst[..3].iter_mut().zip([c.r, c.g, c.b]) {
            let num = s as u32 * sa + *d as u32 * da * inv / 255;
            *d = (num / out_a).min(255) as u8;
        }
        dst[3] = out_a.min(255) as u8;
    }

    /// Replaces every pixel with `c`.
    pub fn fill(&mut self, c: Color) {
        let px = c.to_array();
        for chunk in self.data.chunks_exact_mut(4) {
            chunk.copy_from_slice(&px);
        }
    }

    /// Blends `c` over the part of `rect` that lies inside the buffer.
    pub fn fill_rect(&mut self, rect: Rect, c: Color) {
        let Some(clip) = rect.intersect(self.bounds()) else { return };
        for y in clip.y..clip.bottom() {
            for x in clip.x..clip.right() {
                self.blend(x, y, c, 255);
            }
        }
    }

    /// Copies `src` scaled (nearest neighbour) into `dst`.
    /// With `blend == false` the destination pixels are replaced.
    pub fn draw_pixmap(&mut self, src: &Pixmap, dst: Rect, blend: bool) {
        if dst.is_empty() || src.width == 0 || src.height == 0 {
            return;
        }
        let Some(clip) = dst.intersect(self.bounds()) else { return };
        for y in clip.y..clip.bottom() {
            let sy = ((y - dst.y) as i64 * src.height as i64 / dst.h as i64) as i32;
            for x in clip.x..clip.right() {
                let sx = ((x - dst.x) as i64 * src.width as i64 / dst.w as i64) as i32;
                let Some(c) = src.pixel(sx, sy) else { continue };
                if blend {
                    self.blend(x, y, c, 255);
                } else {
                    self.put(x, y, c);
                }
            }
        }
    }

    /// Resamples the buffer to `width × height` and returns the bytes in
    /// RGBA or BGRA channel order, ready for a texture upload.
    pub fn to_surface_bytes(&self, width: u32, height: u32, bgra: bool) -> Vec<u8> {
        let mut out = Vec::with_capacity(width as usize * height as usize * 4);
        for y in 0..height {
            let sy = if height == 0 { 0 } else { (y as u64 * self.height as u64 / height as u64) as i32 };
            for x in 0..width {
                let sx = if width == 0 { 0 } else { (x as u64 * self.width as u64 / width as u64) as i32 };
                let c = self.pixel(sx, sy).unwrap_or_default();
                if bgra {
                    out.extend_from_slice(&[c.b, c.g, c.r, 255]);
                } else {
                    out.extend_from_slice(&[c.r, c.g, c.b, 255]);
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::Colors;

    #[test]
    fn new_is_transparent() {
        let p = Pixmap::new(2, 2);
        assert_eq!(p.pixel(1, 1), Some(Colors::TRANSPARENT));
        assert_eq!(p.pixel(2, 0), None);
    }

    #[test]
    fn from_rgba_checks_length() {
        assert!(Pixmap::from_rgba(2, 2, vec![0; 15]).is_none());
        assert!(Pixmap::from_rgba(2, 2, vec![0; 16]).is_some());
    }

    #[test]
    fn fill_rect_clips_to_buffer() {
        let mut p = Pixmap::new(4, 4);
        p.fill_rect(Rect::new(2, 2, 10, 10), Colors::RED);
        assert_eq!(p.pixel(3, 3), Some(Colors::RED));
        assert_eq!(p.pixel(1, 1), Some(Colors::TRANSPARENT));
    }

    #[test]
    fn half_alpha_blends_over_opaque() {
        let mut p = Pixmap::new(1, 1);
        p.fill(Colors::BLACK);
        p.blend(0, 0, Colors::WHITE.with_alpha(128), 255);
        let c = p.pixel(0, 0).unwrap();
        assert!((127..=129).contains(&c.r));
        assert_eq!(c.a, 255);
    }

    #[test]
    fn draw_pixmap_scales_up() {
        let mut src = Pixmap::new(1, 1);
        src.put(0, 0, Colors::BLUE);
        let mut dst = Pixmap::new(4, 4);
        dst.draw_pixmap(&src, Rect::new(1, 1, 2, 2), false);
        assert_eq!(dst.pixel(1, 1), Some(Colors::BLUE));
        assert_eq!(dst.pixel(2, 2), Some(Colors::BLUE));
        assert_eq!(dst.pixel(3, 3), Some(Colors::TRANSPARENT));
    }

    #[test]
    fn surface_bytes_swizzle() {
        let mut p = Pixmap::new(1, 1);
        p.put(0, 0, Color::rgb(1, 2, 3));
        assert_eq!(p.to_surface_bytes(1, 1, true), vec![3, 2, 1, 255]);
        assert_eq!(p.to_surface_bytes(2, 1, false), vec![1, 2, 3, 255, 1, 2, 3, 255]);
    }
}
