use std::f64::consts::PI;

use crate::{
    foundation::error::{SpriteError, SpriteResult},
    foundation::math::trunc_i32,
    sprite::palette::Palette,
};

/// Per-side inset applied to a bounding box, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Insets {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Insets {
    pub const fn uniform(v: i32) -> Self {
        Self {
            left: v,
            top: v,
            right: v,
            bottom: v,
        }
    }
}

/// Every fixed offset and size the cat figure is built from.
///
/// Box extents follow the inclusive-corner convention of [`crate::IRect`]: a leg of
/// `leg_size = (3, 6)` spans `x..=x+3`, `y..=y+6`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CatGeometry {
    /// Body ellipse width/height.
    pub body_size: (i32, i32),
    /// Body box sits this far below the centered position.
    pub body_drop: i32,
    pub belly_inset: Insets,
    pub head_radius: i32,
    /// Head center sits this far above the frame center.
    pub head_rise: i32,
    pub face_inset: i32,
    /// Horizontal distance from head center to the outer corner of each ear.
    pub ear_spread: i32,
    /// Horizontal distance from head center to each ear apex.
    pub ear_apex_dx: i32,
    pub ear_height: i32,
    pub left_eye: (i32, i32),
    pub right_eye: (i32, i32),
    pub eye_size: i32,
    /// Nose triangle, relative to head center.
    pub nose: [(i32, i32); 3],
    pub leg_size: (i32, i32),
    pub front_leg_x: [i32; 2],
    pub front_leg_drop: i32,
    pub back_leg_x: [i32; 2],
    pub back_leg_drop: i32,
    /// Tail endpoint relative to the anchor, before the wag offset is added.
    pub tail_reach: (i32, i32),
    pub tail_segments: u32,
    pub tail_segment_size: (i32, i32),
}

impl Default for CatGeometry {
    fn default() -> Self {
        Self {
            body_size: (18, 12),
            body_drop: 2,
            belly_inset: Insets {
                left: 2,
                top: 3,
                right: 2,
                bottom: 2,
            },
            head_radius: 6,
            head_rise: 4,
            face_inset: 2,
            ear_spread: 4,
            ear_apex_dx: 2,
            ear_height: 4,
            left_eye: (-3, -1),
            right_eye: (1, -1),
            eye_size: 2,
            nose: [(0, 1), (-1, 3), (1, 3)],
            leg_size: (3, 6),
            front_leg_x: [-6, 3],
            front_leg_drop: 4,
            back_leg_x: [-7, 4],
            back_leg_drop: 5,
            tail_reach: (6, -4),
            tail_segments: 4,
            tail_segment_size: (2, 3),
        }
    }
}

/// `amplitude * sin(t * frequency + phase)`, truncated toward zero.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Wave {
    pub amplitude: f64,
    pub frequency: f64,
    pub phase: f64,
}

impl Wave {
    pub const fn new(amplitude: f64, frequency: f64, phase: f64) -> Self {
        Self {
            amplitude,
            frequency,
            phase,
        }
    }

    pub fn sample(self, t: f64) -> i32 {
        trunc_i32(self.amplitude * (t * self.frequency + self.phase).sin())
    }
}

/// Oscillators driving the per-frame pose offsets.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MotionParams {
    pub body_bounce: Wave,
    pub front_legs: Wave,
    pub back_legs: Wave,
    pub tail_wag: Wave,
}

impl Default for MotionParams {
    fn default() -> Self {
        Self {
            body_bounce: Wave::new(3.0, 2.0, 0.0),
            front_legs: Wave::new(4.0, 1.0, 0.0),
            back_legs: Wave::new(4.0, 1.0, PI),
            tail_wag: Wave::new(8.0, 1.5, 0.0),
        }
    }
}

/// Immutable description of a whole sprite sheet.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SheetConfig {
    pub frame_width: u32,
    pub frame_height: u32,
    pub frame_count: u32,
    pub cycle_length: u32,
    pub palette: Palette,
    pub geometry: CatGeometry,
    pub motion: MotionParams,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            frame_width: 32,
            frame_height: 32,
            frame_count: 16,
            cycle_length: 16,
            palette: Palette::default(),
            geometry: CatGeometry::default(),
            motion: MotionParams::default(),
        }
    }
}

impl SheetConfig {
    pub fn validate(&self) -> SpriteResult<()> {
        if self.frame_width == 0 || self.frame_height == 0 {
            return Err(SpriteError::validation("frame dimensions must be > 0"));
        }
        if self.frame_count == 0 {
            return Err(SpriteError::validation("frame_count must be > 0"));
        }
        if self.cycle_length == 0 {
            return Err(SpriteError::validation("cycle_length must be > 0"));
        }
        if self.frame_count > self.cycle_length {
            return Err(SpriteError::validation(
                "frame_count must not exceed cycle_length",
            ));
        }
        if self.frame_width.checked_mul(self.frame_count).is_none() {
            return Err(SpriteError::validation("sheet width overflows u32"));
        }
        if self.geometry.tail_segments < 2 {
            return Err(SpriteError::validation("tail needs at least 2 segments"));
        }
        self.palette.validate()
    }

    pub fn sheet_width(&self) -> u32 {
        self.frame_width * self.frame_count
    }

    pub fn sheet_height(&self) -> u32 {
        self.frame_height
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sprite/config.rs"]
mod tests;
