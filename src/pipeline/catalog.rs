use std::path::Path;

use crate::foundation::error::{ForgeError, ForgeResult};
use crate::palette::catalog::PaletteCatalog;
use crate::pipeline::{
    profile::Style,
    spec::{ItemSpec, ProductKind},
};

const AVATAR_IDS: [&str; 16] = [
    "default",
    "guest",
    "reptilefan",
    "snake",
    "chameleoncham",
    "turtlepower",
    "beardedbuddy",
    "iguanaiggy",
    "frogprince",
    "dinodan",
    "scalysue",
    "koboldkeeper",
    "vipervicky",
    "gatorgary",
    "komodoking",
    "axolotlally",
];

const PRO_AVATAR_EMOJI: [&str; 16] = [
    "👤", "👋", "🦎", "🐍", "🦎", "🐢", "🦎", "🦎", "🐸", "🦖", "🐊", "🦎", "🐍", "🐊", "🦎", "🦎",
];

/// `(identifier, emoji, title, scale texture)`
const PLACEHOLDERS: [(&str, &str, &str, bool); 3] = [
    ("placeholder_reptile_1", "🦎", "GECKO", true),
    ("placeholder_reptile_2", "🐍", "PYTHON", false),
    ("placeholder_reptile_3", "🐢", "TURTLE", false),
];

/// Text drawn on a classic placeholder whose emoji cannot be rendered.
const CLASSIC_PLACEHOLDER_TEXT: &str = "REPTILE";

/// Palettes plus the ordered items of each product.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Catalog {
    pub avatar_palette: PaletteCatalog,
    pub placeholder_palette: PaletteCatalog,
    pub avatars: Vec<ItemSpec>,
    pub placeholders: Vec<ItemSpec>,
}

/// On-disk catalog overrides. Every field is optional; absent fields keep the built-in value.
#[derive(Clone, Debug, Default, serde::Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogFile {
    #[serde(default)]
    avatar_palette: Option<PaletteCatalog>,
    #[serde(default)]
    placeholder_palette: Option<PaletteCatalog>,
    #[serde(default)]
    avatars: Option<Vec<ItemSpec>>,
    #[serde(default)]
    placeholders: Option<Vec<ItemSpec>>,
}

impl Catalog {
    pub fn builtin(style: Style) -> Self {
        match style {
            Style::Classic => Self::classic(),
            Style::Pro => Self::pro(),
        }
    }

    /// Hash-colored initials avatars and two-stop placeholders.
    pub fn classic() -> Self {
        Self {
            avatar_palette: PaletteCatalog::classic_solids(),
            placeholder_palette: PaletteCatalog::classic_placeholder_bands(),
            avatars: AVATAR_IDS.iter().map(|id| ItemSpec::new(*id)).collect(),
            placeholders: PLACEHOLDERS
                .iter()
                .zip(0i64..)
                .map(|(&(id, emoji, _, _), index)| {
                    ItemSpec::new(id)
                        .with_glyph(emoji)
                        .with_palette_index(index)
                        .with_caption(CLASSIC_PLACEHOLDER_TEXT)
                })
                .collect(),
        }
    }

    /// Emoji avatars on indexed radial gradients and captioned three-stop placeholders.
    pub fn pro() -> Self {
        Self {
            avatar_palette: PaletteCatalog::pro_radials(),
            placeholder_palette: PaletteCatalog::pro_placeholder_bands(),
            avatars: AVATAR_IDS
                .iter()
                .zip(PRO_AVATAR_EMOJI)
                .zip(0i64..)
                .map(|((id, emoji), i)| {
                    ItemSpec::new(*id)
                        .with_glyph(emoji)
                        .with_palette_index(i % 10)
                })
                .collect(),
            placeholders: PLACEHOLDERS
                .iter()
                .zip(0i64..)
                .map(|(&(id, emoji, title, scales), index)| {
                    ItemSpec::new(id)
                        .with_glyph(emoji)
                        .with_palette_index(index)
                        .with_caption(title)
                        .with_texture(scales)
                })
                .collect(),
        }
    }

    pub fn items(&self, kind: ProductKind) -> &[ItemSpec] {
        match kind {
            ProductKind::Avatar => &self.avatars,
            ProductKind::Placeholder => &self.placeholders,
        }
    }

    pub fn palette(&self, kind: ProductKind) -> &PaletteCatalog {
        match kind {
            ProductKind::Avatar => &self.avatar_palette,
            ProductKind::Placeholder => &self.placeholder_palette,
        }
    }

    /// Apply the JSON overrides in `json` on top of this catalog.
    pub fn merge_json(mut self, json: &str) -> ForgeResult<Self> {
        let file: CatalogFile = serde_json::from_str(json)
            .map_err(|e| ForgeError::serde(format!("catalog json: {e}")))?;
        if let Some(p) = file.avatar_palette {
            self.avatar_palette = p;
        }
        if let Some(p) = file.placeholder_palette {
            self.placeholder_palette = p;
        }
        if let Some(items) = file.avatars {
            self.avatars = items;
        }
        if let Some(items) = file.placeholders {
            self.placeholders = items;
        }
        self.validate()?;
        Ok(self)
    }

    /// Built-in catalog for `style` with overrides from the JSON file at `path`.
    pub fn load(style: Style, path: &Path) -> ForgeResult<Self> {
        let json = std::fs::read_to_string(path).map_err(|e| ForgeError::io(path, e))?;
        Self::builtin(style).merge_json(&json)
    }

    /// Every item is valid and identifiers are unique within a product.
    pub fn validate(&self) -> ForgeResult<()> {
        for kind in [ProductKind::Avatar, ProductKind::Placeholder] {
            let mut seen = std::collections::HashSet::new();
            for item in self.items(kind) {
                item.validate()?;
                if !seen.insert(item.identifier()) {
                    return Err(ForgeError::validation(format!(
                        "duplicate {kind} identifier '{}'",
                        item.identifier()
                    )));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/catalog.rs"]
mod tests;
