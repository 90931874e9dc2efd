use rayon::prelude::*;

use crate::{
    foundation::core::FrameIndex,
    foundation::error::{SpriteError, SpriteResult},
    render::canvas::Canvas,
    render::frame::render_frame,
    sprite::config::SheetConfig,
};

/// Frame-level parallelism options for [`compose_with`].
#[derive(Clone, Debug, Default)]
pub struct ComposeOpts {
    pub parallel: bool,
    pub threads: Option<usize>,
}

/// Render every frame and lay them out left to right.
///
/// This is the sequential path; see [`compose_with`] for the parallel one.
pub fn compose(config: &SheetConfig) -> SpriteResult<Canvas> {
    compose_with(config, &ComposeOpts::default())
}

/// Like [`compose`], optionally rendering frames on a dedicated rayon pool.
///
/// Frames are always pasted in ascending index order, so the output is identical either way.
#[tracing::instrument(skip_all, fields(frames = config.frame_count, parallel = opts.parallel))]
pub fn compose_with(config: &SheetConfig, opts: &ComposeOpts) -> SpriteResult<Canvas> {
    config.validate()?;

    let frames = if opts.parallel {
        let pool = build_thread_pool(opts.threads)?;
        pool.install(|| {
            (0..config.frame_count)
                .into_par_iter()
                .map(|i| render_frame(config, FrameIndex(i)))
                .collect::<SpriteResult<Vec<_>>>()
        })?
    } else {
        (0..config.frame_count)
            .map(|i| render_frame(config, FrameIndex(i)))
            .collect::<SpriteResult<Vec<_>>>()?
    };

    let mut sheet = Canvas::new(config.sheet_width(), config.sheet_height());
    for (i, frame) in frames.iter().enumerate() {
        let x_offset = i32::try_from(i as u64 * u64::from(config.frame_width))
            .map_err(|_| SpriteError::render("frame offset exceeds i32"))?;
        sheet.paste_masked(frame, x_offset, 0);
    }
    tracing::debug!(
        width = sheet.width(),
        height = sheet.height(),
        "composed sprite sheet"
    );
    Ok(sheet)
}

fn build_thread_pool(threads: Option<usize>) -> SpriteResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(SpriteError::validation(
            "compose 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| SpriteError::render(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/render/sheet.rs"]
mod tests;
