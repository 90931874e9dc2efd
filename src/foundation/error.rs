/// Convenience result type used across catsprite.
pub type SpriteResult<T> = Result<T, SpriteError>;

/// Top-level error taxonomy used by the library APIs.
#[derive(thiserror::Error, Debug)]
pub enum SpriteError {
    /// Invalid configuration, geometry, or frame index.
    #[error("validation error: {0}")]
    Validation(String),

    /// Failures while rasterizing or composing frames.
    #[error("render error: {0}")]
    Render(String),

    /// Failures while encoding or writing the output image.
    #[error("encode error: {0}")]
    Encode(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SpriteError {
    /// Build a [`SpriteError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`SpriteError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`SpriteError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
