use std::path::PathBuf;

/// Convenience result type used across avatar-forge.
pub type ForgeResult<T> = Result<T, ForgeError>;

/// Top-level error taxonomy used by synthesis APIs.
#[derive(thiserror::Error, Debug)]
pub enum ForgeError {
    /// Malformed item or catalog data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Font resolution failed. Callers normally degrade instead of surfacing this.
    #[error(transparent)]
    Font(#[from] FontError),

    /// Inconsistent pixel buffers or render parameters.
    #[error("render error: {0}")]
    Render(String),

    /// PNG encoding failure.
    #[error("encode error: {0}")]
    Encode(String),

    /// Output directory or file could not be written.
    #[error("io error at '{}': {source}", path.display())]
    Io {
        /// Path that was being created or written.
        path: PathBuf,
        /// Underlying OS error.
        #[source]
        source: std::io::Error,
    },

    /// Errors when serializing or deserializing catalogs.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ForgeError {
    /// Build a [`ForgeError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ForgeError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`ForgeError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build a [`ForgeError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Build a [`ForgeError::Io`] value for `path`.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Why a single font candidate (or a whole fallback chain) could not draw a glyph.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum FontError {
    /// No file exists at any location the candidate path resolves to.
    #[error("font file not found: {}", path.display())]
    Missing {
        /// Candidate path as configured.
        path: PathBuf,
    },

    /// The file exists but could not be read.
    #[error("font file unreadable: {} ({reason})", path.display())]
    Unreadable {
        /// Resolved path.
        path: PathBuf,
        /// OS-level reason.
        reason: String,
    },

    /// The bytes did not register any font family.
    #[error("no font family in {}", path.display())]
    NoFamily {
        /// Resolved path.
        path: PathBuf,
    },

    /// The font has no glyph for a character of the requested text.
    #[error("'{font}' has no glyph for {ch:?}")]
    UnsupportedGlyph {
        /// Human readable name of the font.
        font: String,
        /// First unsupported character.
        ch: char,
    },

    /// Nothing to draw.
    #[error("glyph text is empty")]
    EmptyText,

    /// Every candidate in a fallback chain failed.
    #[error("all {} font candidates failed", attempts.len())]
    Exhausted {
        /// Per-candidate failures in attempt order.
        attempts: Vec<FontError>,
    },
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
