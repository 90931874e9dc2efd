pub use kurbo::Point;

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u32);

/// Straight (non-premultiplied) RGBA8.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const fn transparent() -> Self {
        Self {
            r: 0,
            g: 0,
            b: 0,
            a: 0,
        }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub fn is_opaque(self) -> bool {
        self.a == 255
    }

    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    pub fn from_array([r, g, b, a]: [u8; 4]) -> Self {
        Self { r, g, b, a }
    }
}

/// Integer bounding box with inclusive corners.
///
/// `IRect::new(7, 12, 25, 24)` covers 19x13 pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct IRect {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl IRect {
    pub const fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Box of `w x h` pixels whose top-left pixel is `(x, y)`.
    pub const fn from_origin_size(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self {
            x0: x,
            y0: y,
            x1: x + w - 1,
            y1: y + h - 1,
        }
    }

    /// Box spanning `center - radius ..= center + radius` on both axes.
    pub const fn around(cx: i32, cy: i32, radius: i32) -> Self {
        Self {
            x0: cx - radius,
            y0: cy - radius,
            x1: cx + radius,
            y1: cy + radius,
        }
    }

    pub fn width(self) -> i32 {
        self.x1 - self.x0 + 1
    }

    pub fn height(self) -> i32 {
        self.y1 - self.y0 + 1
    }

    pub fn is_empty(self) -> bool {
        self.x1 < self.x0 || self.y1 < self.y0
    }

    pub fn contains(self, x: i32, y: i32) -> bool {
        self.x0 <= x && x <= self.x1 && self.y0 <= y && y <= self.y1
    }

    pub fn inset(self, left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            x0: self.x0 + left,
            y0: self.y0 + top,
            x1: self.x1 - right,
            y1: self.y1 - bottom,
        }
    }

    pub fn translate(self, dx: i32, dy: i32) -> Self {
        Self {
            x0: self.x0 + dx,
            y0: self.y0 + dy,
            x1: self.x1 + dx,
            y1: self.y1 + dy,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
