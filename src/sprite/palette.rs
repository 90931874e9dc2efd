use crate::foundation::{
    core::Rgba8,
    error::{SpriteError, SpriteResult},
};

/// Semantic color slot used by draw operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorRole {
    Background,
    Shadow,
    Body,
    Highlight,
    Accent,
}

impl ColorRole {
    pub const ALL: [ColorRole; 5] = [
        ColorRole::Background,
        ColorRole::Shadow,
        ColorRole::Body,
        ColorRole::Highlight,
        ColorRole::Accent,
    ];
}

/// Fixed role -> color mapping shared read-only by every frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Palette {
    pub background: Rgba8,
    pub shadow: Rgba8,
    pub body: Rgba8,
    pub highlight: Rgba8,
    pub accent: Rgba8,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Rgba8::transparent(),
            shadow: Rgba8::opaque(64, 48, 96),
            body: Rgba8::opaque(128, 96, 160),
            highlight: Rgba8::opaque(192, 160, 192),
            accent: Rgba8::opaque(255, 224, 192),
        }
    }
}

impl Palette {
    pub fn get(&self, role: ColorRole) -> Rgba8 {
        match role {
            ColorRole::Background => self.background,
            ColorRole::Shadow => self.shadow,
            ColorRole::Body => self.body,
            ColorRole::Highlight => self.highlight,
            ColorRole::Accent => self.accent,
        }
    }

    /// Background must be fully transparent, every other role fully opaque.
    pub fn validate(&self) -> SpriteResult<()> {
        if self.background.a != 0 {
            return Err(SpriteError::validation(
                "palette background must be fully transparent",
            ));
        }
        for role in ColorRole::ALL {
            if role == ColorRole::Background {
                continue;
            }
            if !self.get(role).is_opaque() {
                return Err(SpriteError::validation(format!(
                    "palette role {role:?} must be fully opaque"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sprite/palette.rs"]
mod tests;
