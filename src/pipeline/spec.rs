use crate::foundation::error::{ForgeError, ForgeResult};

/// What kind of image an item becomes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductKind {
    /// Square, circular-masked, saved as RGBA.
    Avatar,
    /// Tall rectangle, opaque, saved as RGB.
    Placeholder,
}

impl ProductKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Avatar => "avatar",
            Self::Placeholder => "placeholder",
        }
    }

    /// `avatar_<id>.png` for avatars, `<id>.png` for placeholders.
    pub fn file_name(self, identifier: &str) -> String {
        match self {
            Self::Avatar => format!("avatar_{identifier}.png"),
            Self::Placeholder => format!("{identifier}.png"),
        }
    }
}

impl std::fmt::Display for ProductKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One image to synthesize. The identifier is the item's identity and names its output file.
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ItemSpec {
    identifier: String,
    /// Emoji (or any text) drawn as the primary glyph; empty means initials.
    #[serde(default)]
    glyph: String,
    /// Explicit palette index; the identifier hash picks one when absent.
    #[serde(default)]
    palette_index: Option<i64>,
    /// Placeholder title.
    #[serde(default)]
    caption: Option<String>,
    /// Overlay the scale motif.
    #[serde(default)]
    texture: bool,
}

impl ItemSpec {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            glyph: String::new(),
            palette_index: None,
            caption: None,
            texture: false,
        }
    }

    pub fn with_glyph(mut self, glyph: impl Into<String>) -> Self {
        self.glyph = glyph.into();
        self
    }

    pub fn with_palette_index(mut self, index: i64) -> Self {
        self.palette_index = Some(index);
        self
    }

    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    pub fn with_texture(mut self, texture: bool) -> Self {
        self.texture = texture;
        self
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// `None` when no glyph was given.
    pub fn glyph(&self) -> Option<&str> {
        Some(self.glyph.as_str()).filter(|g| !g.is_empty())
    }

    pub fn palette_index(&self) -> Option<i64> {
        self.palette_index
    }

    pub fn caption(&self) -> Option<&str> {
        self.caption.as_deref().filter(|c| !c.is_empty())
    }

    pub fn texture(&self) -> bool {
        self.texture
    }

    /// The identifier must be usable as a single file-name component.
    pub fn validate(&self) -> ForgeResult<()> {
        let id = self.identifier.as_str();
        if id.is_empty() {
            return Err(ForgeError::validation("item identifier must not be empty"));
        }
        if id == "." || id == ".." {
            return Err(ForgeError::validation(format!(
                "item identifier '{id}' is not a file name"
            )));
        }
        if let Some(bad) = id
            .chars()
            .find(|c| matches!(c, '/' | '\\' | '\0') || c.is_control())
        {
            return Err(ForgeError::validation(format!(
                "item identifier '{id}' contains forbidden character {bad:?}"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/spec.rs"]
mod tests;
