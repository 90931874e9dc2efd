use std::{io::Cursor, path::Path};

use crate::{
    foundation::error::{SpriteError, SpriteResult},
    render::canvas::Canvas,
};

/// File name used when no output path is given.
pub const DEFAULT_OUTPUT: &str = "cat_running_spritesheet.png";

/// Encode `canvas` as an RGBA8 PNG in memory.
pub fn encode_png(canvas: &Canvas) -> SpriteResult<Vec<u8>> {
    let mut bytes = Vec::new();
    canvas
        .as_image()
        .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
        .map_err(|e| SpriteError::encode(format!("png encode failed: {e}")))?;
    Ok(bytes)
}

/// Write `canvas` to `path` as an RGBA8 PNG, replacing any existing file.
///
/// Missing parent directories are created.
pub fn save_png(canvas: &Canvas, path: &Path) -> SpriteResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| {
            SpriteError::encode(format!(
                "create output dir '{}' failed: {e}",
                parent.display()
            ))
        })?;
    }

    image::save_buffer_with_format(
        path,
        canvas.as_raw(),
        canvas.width(),
        canvas.height(),
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .map_err(|e| SpriteError::encode(format!("write png '{}' failed: {e}", path.display())))?;

    tracing::info!(
        path = %path.display(),
        width = canvas.width(),
        height = canvas.height(),
        "wrote sprite sheet"
    );
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/encode/png.rs"]
mod tests;
