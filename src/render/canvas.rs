use image::RgbaImage;

use crate::foundation::{
    core::{IRect, Point, Rgba8},
    math::{mul_div255, trunc_i32},
};

/// RGBA8 raster surface with integer-grid drawing primitives.
///
/// Pixels are straight (non-premultiplied) RGBA. Writes outside the surface are clipped.
#[derive(Clone, Debug, PartialEq)]
pub struct Canvas {
    img: RgbaImage,
}

impl Canvas {
    /// Fully transparent surface.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            img: RgbaImage::new(width, height),
        }
    }

    pub fn width(&self) -> u32 {
        self.img.width()
    }

    pub fn height(&self) -> u32 {
        self.img.height()
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba8> {
        self.img.get_pixel_checked(x, y).map(|p| Rgba8::from_array(p.0))
    }

    pub fn as_image(&self) -> &RgbaImage {
        &self.img
    }

    pub fn into_image(self) -> RgbaImage {
        self.img
    }

    pub fn as_raw(&self) -> &[u8] {
        self.img.as_raw()
    }

    fn put(&mut self, x: i32, y: i32, c: Rgba8) {
        let (Ok(x), Ok(y)) = (u32::try_from(x), u32::try_from(y)) else {
            return;
        };
        if let Some(p) = self.img.get_pixel_mut_checked(x, y) {
            p.0 = c.to_array();
        }
    }

    /// Fill the whole box, then paint a 1px border in `outline`.
    pub fn fill_rect(&mut self, rect: IRect, fill: Rgba8, outline: Option<Rgba8>) {
        for y in rect.y0..=rect.y1 {
            for x in rect.x0..=rect.x1 {
                let border = x == rect.x0 || x == rect.x1 || y == rect.y0 || y == rect.y1;
                match outline {
                    Some(o) if border => self.put(x, y, o),
                    _ => self.put(x, y, fill),
                }
            }
        }
    }

    /// Ellipse inscribed in `rect`.
    ///
    /// A pixel belongs to the ellipse when its center is inside it. Member pixels with a
    /// 4-neighbour outside form the outline ring.
    pub fn fill_ellipse(&mut self, rect: IRect, fill: Rgba8, outline: Option<Rgba8>) {
        if rect.is_empty() {
            return;
        }
        let cx = f64::from(rect.x0 + rect.x1 + 1) / 2.0;
        let cy = f64::from(rect.y0 + rect.y1 + 1) / 2.0;
        let rx = f64::from(rect.width()) / 2.0;
        let ry = f64::from(rect.height()) / 2.0;
        let inside = |x: i32, y: i32| {
            let dx = (f64::from(x) + 0.5 - cx) / rx;
            let dy = (f64::from(y) + 0.5 - cy) / ry;
            dx * dx + dy * dy <= 1.0
        };

        for y in rect.y0..=rect.y1 {
            for x in rect.x0..=rect.x1 {
                if !inside(x, y) {
                    continue;
                }
                let edge = !inside(x - 1, y)
                    || !inside(x + 1, y)
                    || !inside(x, y - 1)
                    || !inside(x, y + 1);
                match outline {
                    Some(o) if edge => self.put(x, y, o),
                    _ => self.put(x, y, fill),
                }
            }
        }
    }

    /// Even-odd scanline fill followed by the closed boundary traced in `outline`
    /// (or `fill` when there is no outline), so every vertex is covered.
    pub fn fill_polygon(&mut self, points: &[Point], fill: Rgba8, outline: Option<Rgba8>) {
        if points.is_empty() {
            return;
        }
        let pts: Vec<(i32, i32)> = points
            .iter()
            .map(|p| (trunc_i32(p.x), trunc_i32(p.y)))
            .collect();

        let y_min = pts.iter().map(|p| p.1).min().unwrap_or(0);
        let y_max = pts.iter().map(|p| p.1).max().unwrap_or(0);
        let mut xs = Vec::with_capacity(pts.len());
        for y in y_min..=y_max {
            xs.clear();
            let yf = f64::from(y);
            for (i, &(ax, ay)) in pts.iter().enumerate() {
                let (bx, by) = pts[(i + 1) % pts.len()];
                if ay == by {
                    continue;
                }
                let (lo, hi) = if ay < by { (ay, by) } else { (by, ay) };
                if y < lo || y >= hi {
                    continue;
                }
                let s = (yf - f64::from(ay)) / f64::from(by - ay);
                xs.push(f64::from(ax) + s * f64::from(bx - ax));
            }
            xs.sort_by(f64::total_cmp);
            for pair in xs.chunks_exact(2) {
                let start = pair[0].ceil() as i32;
                let end = pair[1].floor() as i32;
                for x in start..=end {
                    self.put(x, y, fill);
                }
            }
        }

        let ink = outline.unwrap_or(fill);
        for (i, &a) in pts.iter().enumerate() {
            let b = pts[(i + 1) % pts.len()];
            self.line(a, b, ink);
        }
    }

    fn line(&mut self, (mut x0, mut y0): (i32, i32), (x1, y1): (i32, i32), c: Rgba8) {
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        loop {
            self.put(x0, y0, c);
            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x0 += sx;
            }
            if e2 <= dx {
                err += dx;
                y0 += sy;
            }
        }
    }

    /// Composite `src` at `(x, y)` using its own alpha as the mask:
    /// `dst = src * a + dst * (1 - a)` on every channel, alpha included.
    pub fn paste_masked(&mut self, src: &Canvas, x: i32, y: i32) {
        for (sx, sy, s) in src.img.enumerate_pixels() {
            let a = s.0[3];
            if a == 0 {
                continue;
            }
            let (Ok(dx), Ok(dy)) = (
                u32::try_from(x + sx as i32),
                u32::try_from(y + sy as i32),
            ) else {
                continue;
            };
            let Some(d) = self.img.get_pixel_mut_checked(dx, dy) else {
                continue;
            };
            if a == 255 {
                d.0 = s.0;
                continue;
            }
            let inv = 255 - u16::from(a);
            for i in 0..4 {
                let sc = mul_div255(u16::from(s.0[i]), u16::from(a));
                let dc = mul_div255(u16::from(d.0[i]), inv);
                d.0[i] = sc.saturating_add(dc);
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/canvas.rs"]
mod tests;
