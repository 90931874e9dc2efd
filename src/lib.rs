//! catsprite procedurally draws a running-cat pixel-art animation and packs it into a sprite sheet.
//!
//! # Pipeline overview
//!
//! 1. **Pose**: `FrameIndex -> Pose` (sine-driven integer offsets for body, legs and tail)
//! 2. **Plan**: `SheetConfig + FrameIndex -> FramePlan` (ordered draw ops, back to front)
//! 3. **Render**: `FramePlan -> Canvas` (integer-grid rasterizer, no anti-aliasing)
//! 4. **Compose**: all frames pasted left to right into one sheet canvas
//! 5. **Encode**: the sheet is written as an RGBA8 PNG
//!
//! Every step is deterministic: the same [`SheetConfig`] always produces byte-identical output.
#![forbid(unsafe_code)]

mod animation;
mod encode;
mod foundation;
mod render;
mod sprite;

pub use animation::pose::{Pose, phase_angle};
pub use encode::png::{DEFAULT_OUTPUT, encode_png, save_png};
pub use foundation::core::{FrameIndex, IRect, Point, Rgba8};
pub use foundation::error::{SpriteError, SpriteResult};
pub use render::canvas::Canvas;
pub use render::frame::{render, render_frame};
pub use render::plan::{DrawOp, FramePlan, Part, Shape, execute_plan, plan_frame};
pub use render::sheet::{ComposeOpts, compose, compose_with};
pub use sprite::config::{CatGeometry, Insets, MotionParams, SheetConfig, Wave};
pub use sprite::palette::{ColorRole, Palette};
