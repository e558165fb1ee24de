//! Font fallback chains.
//!
//! A [`FontChain`] expands into an ordered list of [`FontCandidate`]s. [`FontLibrary`] tries
//! them in order with [`first_success`]; each failure is recorded and the next candidate is
//! tried immediately. Only when every candidate has failed does the caller see an error, as
//! [`FontError::Exhausted`].

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    sync::Mutex,
};

use crate::foundation::{core::Rgba8, error::FontError};
use crate::glyph::{
    bitmap,
    draw::GlyphSprite,
    layout::{FontBlob, render_text},
};

/// Ordered font file candidates sharing one point size. The first resolvable file that can
/// draw the text wins.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FontDescriptor {
    pub candidate_paths: Vec<PathBuf>,
    pub point_size: u32,
}

impl FontDescriptor {
    pub fn new<P: Into<PathBuf>>(
        candidate_paths: impl IntoIterator<Item = P>,
        point_size: u32,
    ) -> Self {
        Self {
            candidate_paths: candidate_paths.into_iter().map(Into::into).collect(),
            point_size,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FontSource {
    /// A font file, absolute or relative to the library's search directories.
    File(PathBuf),
    /// The built-in block font.
    Builtin,
}

/// One resolution strategy: a font source at a point size.
#[derive(Clone, Debug, PartialEq)]
pub struct FontCandidate {
    pub source: FontSource,
    pub point_size: u32,
}

impl FontCandidate {
    pub fn label(&self) -> String {
        match &self.source {
            FontSource::File(path) => format!("{}@{}", path.display(), self.point_size),
            FontSource::Builtin => format!("{}@{}", bitmap::BUILTIN_FONT_NAME, self.point_size),
        }
    }
}

/// Descriptors in priority order, optionally terminated by the built-in font.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FontChain {
    pub descriptors: Vec<FontDescriptor>,
    /// Point size for the built-in font; `None` leaves it out of the chain.
    pub builtin_size: Option<u32>,
}

impl FontChain {
    pub fn new(descriptors: Vec<FontDescriptor>, builtin_size: Option<u32>) -> Self {
        Self {
            descriptors,
            builtin_size,
        }
    }

    /// A chain that only uses the built-in font.
    pub fn builtin(point_size: u32) -> Self {
        Self::new(Vec::new(), Some(point_size))
    }

    /// Same chain with every file descriptor removed.
    pub fn builtin_only(&self) -> Self {
        Self::new(Vec::new(), self.builtin_size)
    }

    pub fn candidates(&self) -> Vec<FontCandidate> {
        let files = self.descriptors.iter().flat_map(|d| {
            d.candidate_paths.iter().map(move |p| FontCandidate {
                source: FontSource::File(p.clone()),
                point_size: d.point_size,
            })
        });
        let builtin = self.builtin_size.map(|point_size| FontCandidate {
            source: FontSource::Builtin,
            point_size,
        });
        files.chain(builtin).collect()
    }
}

/// Try `attempt` on each candidate in order and return the first success together with the
/// candidate that produced it.
pub fn first_success<C, T>(
    candidates: impl IntoIterator<Item = C>,
    mut attempt: impl FnMut(&C) -> Result<T, FontError>,
) -> Result<(C, T), FontError> {
    let mut attempts = Vec::new();
    for candidate in candidates {
        match attempt(&candidate) {
            Ok(value) => return Ok((candidate, value)),
            Err(e) => attempts.push(e),
        }
    }
    Err(FontError::Exhausted { attempts })
}

/// Resolves candidate paths against search directories and caches each font file as one
/// shared [`FontBlob`]; shaping and rasterization borrow that blob instead of copying it.
///
/// Shared by every item of a batch; safe to use from worker threads.
#[derive(Default)]
pub struct FontLibrary {
    search_dirs: Vec<PathBuf>,
    loaded: Mutex<HashMap<PathBuf, FontBlob>>,
}

impl FontLibrary {
    pub fn new(search_dirs: Vec<PathBuf>) -> Self {
        Self {
            search_dirs,
            loaded: Mutex::new(HashMap::new()),
        }
    }

    pub fn search_dirs(&self) -> &[PathBuf] {
        &self.search_dirs
    }

    /// Absolute paths are used as-is; relative ones are tried under each search directory in
    /// order, then relative to the working directory.
    pub fn resolve(&self, path: &Path) -> Result<PathBuf, FontError> {
        let missing = || FontError::Missing {
            path: path.to_path_buf(),
        };
        if path.is_absolute() {
            return if path.is_file() {
                Ok(path.to_path_buf())
            } else {
                Err(missing())
            };
        }
        self.search_dirs
            .iter()
            .map(|dir| dir.join(path))
            .chain(std::iter::once(path.to_path_buf()))
            .find(|p| p.is_file())
            .ok_or_else(missing)
    }

    pub fn load(&self, path: &Path) -> Result<(PathBuf, FontBlob), FontError> {
        let resolved = self.resolve(path)?;
        let mut loaded = self.loaded.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(font) = loaded.get(&resolved) {
            return Ok((resolved, font.clone()));
        }
        let bytes = std::fs::read(&resolved).map_err(|e| FontError::Unreadable {
            path: resolved.clone(),
            reason: e.to_string(),
        })?;
        let font = FontBlob::from(bytes);
        loaded.insert(resolved.clone(), font.clone());
        Ok((resolved, font))
    }

    /// Rasterize `text` with a single candidate.
    pub fn render_candidate(
        &self,
        candidate: &FontCandidate,
        text: &str,
        color: Rgba8,
    ) -> Result<GlyphSprite, FontError> {
        match &candidate.source {
            FontSource::File(path) => {
                let (resolved, font) = self.load(path)?;
                render_text(&font, &resolved, text, candidate.point_size as f32, color)
            }
            FontSource::Builtin => bitmap::render(
                text,
                bitmap::cell_scale(candidate.point_size as f32),
                color,
            ),
        }
    }

    /// Rasterize `text` with the first candidate of `chain` that can draw it.
    pub fn render_first(
        &self,
        chain: &FontChain,
        text: &str,
        color: Rgba8,
    ) -> Result<(FontCandidate, GlyphSprite), FontError> {
        if text.is_empty() {
            return Err(FontError::EmptyText);
        }
        first_success(chain.candidates(), |candidate| {
            self.render_candidate(candidate, text, color).inspect_err(|e| {
                tracing::debug!(candidate = %candidate.label(), error = %e, "font candidate failed")
            })
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/glyph/fonts.rs"]
mod tests;
