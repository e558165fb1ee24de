use crate::palette::catalog::{PaletteCatalog, PaletteEntry};

/// How an item picks its palette entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaletteChoice {
    /// Hash of the identifier bytes, reduced modulo the catalog size.
    Hashed { hash: u128 },
    /// Explicit index, wrapped into the catalog.
    Explicit { index: i64 },
}

/// Stable 128-bit hash of an identifier: its MD5 digest read as a big-endian integer.
///
/// Identical across runs, processes and platforms.
pub fn identifier_hash(identifier: &str) -> u128 {
    u128::from_be_bytes(md5::compute(identifier.as_bytes()).0)
}

pub fn palette_choice(identifier: &str, explicit_index: Option<i64>) -> PaletteChoice {
    match explicit_index {
        Some(index) => PaletteChoice::Explicit { index },
        None => PaletteChoice::Hashed {
            hash: identifier_hash(identifier),
        },
    }
}

impl PaletteChoice {
    /// Index into a catalog of `len` entries. `len` must be non-zero.
    pub fn index_in(self, len: usize) -> usize {
        match self {
            Self::Hashed { hash } => (hash % len as u128) as usize,
            Self::Explicit { index } => index.rem_euclid(len as i64) as usize,
        }
    }
}

impl PaletteCatalog {
    /// Resolve the scheme for `identifier`: explicit index when given, hash otherwise.
    pub fn resolve(&self, identifier: &str, explicit_index: Option<i64>) -> &PaletteEntry {
        let index = palette_choice(identifier, explicit_index).index_in(self.len());
        &self.entries()[index]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/palette/resolve.rs"]
mod tests;
