use crate::foundation::{
    core::Rgb8,
    error::{ForgeError, ForgeResult},
};
use crate::render::gradient::{GradientMode, GradientSpec};

/// A color scheme a palette entry paints with.
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ColorScheme {
    /// One flat color.
    Solid { color: Rgb8 },
    /// A gradient (radial or linear-vertical).
    Gradient { gradient: GradientSpec },
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct PaletteEntry {
    pub name: String,
    pub scheme: ColorScheme,
}

/// Fixed, ordered, non-empty list of color schemes.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "Vec<PaletteEntry>", into = "Vec<PaletteEntry>")]
pub struct PaletteCatalog {
    entries: Vec<PaletteEntry>,
}

impl TryFrom<Vec<PaletteEntry>> for PaletteCatalog {
    type Error = ForgeError;

    fn try_from(entries: Vec<PaletteEntry>) -> Result<Self, Self::Error> {
        Self::new(entries)
    }
}

impl From<PaletteCatalog> for Vec<PaletteEntry> {
    fn from(value: PaletteCatalog) -> Self {
        value.entries
    }
}

impl PaletteCatalog {
    pub fn new(entries: Vec<PaletteEntry>) -> ForgeResult<Self> {
        if entries.is_empty() {
            return Err(ForgeError::validation("palette catalog must not be empty"));
        }
        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[PaletteEntry] {
        &self.entries
    }

    /// Flat colors used by the first-generation avatars.
    pub fn classic_solids() -> Self {
        let named = [
            ("red", "#FF6B6B"),
            ("teal", "#4ECDC4"),
            ("blue", "#45B7D1"),
            ("orange", "#FFA07A"),
            ("mint", "#98D8C8"),
            ("yellow", "#F7DC6F"),
            ("purple", "#BB8FCE"),
            ("sky", "#85C1E9"),
            ("peach", "#F8B88B"),
            ("light_green", "#ABEBC6"),
            ("light_orange", "#FAD7A0"),
            ("lavender", "#D7BDE2"),
        ];
        Self::from_static(named.iter().map(|&(name, hex)| PaletteEntry {
            name: name.to_string(),
            scheme: ColorScheme::Solid { color: hex_const(hex) },
        }))
    }

    /// Two-stop radial gradients used by the second-generation avatars.
    pub fn pro_radials() -> Self {
        let named = [
            ("purple_dream", "#667eea", "#764ba2"),
            ("pink_sunset", "#f093fb", "#f5576c"),
            ("ocean_blue", "#4facfe", "#00f2fe"),
            ("mint_fresh", "#43e97b", "#38f9d7"),
            ("warm_flame", "#fa709a", "#fee140"),
            ("deep_ocean", "#30cfd0", "#330867"),
            ("soft_pastel", "#a8edea", "#fed6e3"),
            ("sunset_glow", "#ff9a56", "#ff6a95"),
            ("spring_green", "#96fbc4", "#f9f586"),
            ("candy_sky", "#fbc2eb", "#a6c1ee"),
        ];
        Self::from_static(named.iter().map(|&(name, start, end)| PaletteEntry {
            name: name.to_string(),
            scheme: ColorScheme::Gradient {
                gradient: GradientSpec::radial(hex_const(start), hex_const(end)),
            },
        }))
    }

    /// Two-stop vertical gradients used by the first-generation placeholders.
    pub fn classic_placeholder_bands() -> Self {
        Self::vertical(&[
            ("forest", ["#2E7D32", "#66BB6A"]),
            ("amber", ["#FF6F00", "#FFB74D"]),
            ("azure", ["#1976D2", "#64B5F6"]),
        ])
    }

    /// Three-stop vertical gradients used by the second-generation placeholders.
    pub fn pro_placeholder_bands() -> Self {
        Self::vertical(&[
            ("forest_green", ["#2d5016", "#77ab59", "#a4d65e"]),
            ("warm_orange", ["#f57c00", "#ffb74d", "#ffe0b2"]),
            ("ocean_blue", ["#0277bd", "#4fc3f7", "#81d4fa"]),
        ])
    }

    fn vertical<const N: usize>(named: &[(&str, [&str; N])]) -> Self {
        Self::from_static(named.iter().map(|(name, stops)| PaletteEntry {
            name: name.to_string(),
            scheme: ColorScheme::Gradient {
                gradient: linear_const(stops),
            },
        }))
    }

    fn from_static(entries: impl Iterator<Item = PaletteEntry>) -> Self {
        let entries: Vec<_> = entries.collect();
        debug_assert!(!entries.is_empty());
        Self { entries }
    }
}

// Built-in tables are literals covered by unit tests.
fn hex_const(hex: &str) -> Rgb8 {
    Rgb8::from_hex(hex).unwrap_or(Rgb8::BLACK)
}

fn linear_const(stops: &[&str]) -> GradientSpec {
    let stops: Vec<Rgb8> = stops.iter().map(|s| hex_const(s)).collect();
    GradientSpec::new(GradientMode::LinearVertical, stops)
        .unwrap_or_else(|_| GradientSpec::radial(Rgb8::BLACK, Rgb8::BLACK))
}

#[cfg(test)]
#[path = "../../tests/unit/palette/catalog.rs"]
mod tests;
