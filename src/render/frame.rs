use crate::{
    foundation::core::FrameIndex,
    foundation::error::{SpriteError, SpriteResult},
    render::canvas::Canvas,
    render::plan::{execute_plan, plan_frame},
    sprite::config::SheetConfig,
};

/// Draw the cat for `frame` onto `canvas`.
///
/// `canvas` is expected to be transparent and at least `frame_width x frame_height`; anything
/// outside it is clipped.
#[tracing::instrument(skip_all, fields(frame = frame.0))]
pub fn render(canvas: &mut Canvas, frame: FrameIndex, config: &SheetConfig) -> SpriteResult<()> {
    if frame.0 >= config.cycle_length {
        return Err(SpriteError::validation(format!(
            "frame {} is outside the {}-frame cycle",
            frame.0, config.cycle_length
        )));
    }
    let plan = plan_frame(config, frame);
    tracing::debug!(pose = ?plan.pose, ops = plan.ops.len(), "planned frame");
    execute_plan(canvas, &plan, &config.palette);
    Ok(())
}

/// Render `frame` onto a fresh `frame_width x frame_height` canvas.
pub fn render_frame(config: &SheetConfig, frame: FrameIndex) -> SpriteResult<Canvas> {
    let mut canvas = Canvas::new(config.frame_width, config.frame_height);
    render(&mut canvas, frame, config)?;
    Ok(canvas)
}

#[cfg(test)]
#[path = "../../tests/unit/render/frame.rs"]
mod tests;
