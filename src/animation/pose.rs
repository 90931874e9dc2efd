use std::f64::consts::PI;

use crate::{foundation::core::FrameIndex, sprite::config::MotionParams};

/// Position within the animation cycle, in radians.
///
/// Indices past the cycle are accepted and simply continue the sine phase.
pub fn phase_angle(frame: FrameIndex, cycle_length: u32) -> f64 {
    f64::from(frame.0) / f64::from(cycle_length) * 2.0 * PI
}

/// Integer displacements for one frame, all derived from [`phase_angle`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Pose {
    pub body_y_offset: i32,
    pub front_leg_offset: i32,
    pub back_leg_offset: i32,
    pub tail_angle_offset: i32,
}

impl Pose {
    pub fn at(frame: FrameIndex, cycle_length: u32, motion: &MotionParams) -> Self {
        let t = phase_angle(frame, cycle_length);
        Self {
            body_y_offset: motion.body_bounce.sample(t),
            front_leg_offset: motion.front_legs.sample(t),
            back_leg_offset: motion.back_legs.sample(t),
            tail_angle_offset: motion.tail_wag.sample(t),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/pose.rs"]
mod tests;
