//! avatar-forge synthesizes avatar and placeholder PNGs deterministically.
//!
//! Every image is a pure function of its [`ItemSpec`] and the fixed catalogs of a [`Style`]:
//!
//! - Resolve a palette entry (identifier hash or explicit index)
//! - Render the base fill (solid, radial or multi-stop vertical gradient)
//! - Draw the glyph through a font fallback chain, degrading to initials
//! - Overlay the optional scale texture, apply the circular mask (avatars)
//! - Encode PNG and write it atomically
//!
//! [`run_batch`] drives a whole catalog, optionally on a rayon pool.
#![forbid(unsafe_code)]

mod foundation;

pub(crate) mod glyph;
pub(crate) mod palette;
pub(crate) mod pipeline;
pub(crate) mod render;

pub use crate::foundation::core::{Canvas, PixelBuffer, Rgb8, Rgba8};
pub use crate::foundation::error::{FontError, ForgeError, ForgeResult};

pub use crate::glyph::draw::{EMOJI_BASELINE_NUDGE, TEXT_BASELINE_NUDGE};
pub use crate::glyph::fonts::{FontChain, FontDescriptor, FontLibrary};
pub use crate::glyph::initials::initials;
pub use crate::glyph::layout::FontBlob;
pub use crate::palette::catalog::{ColorScheme, PaletteCatalog, PaletteEntry};
pub use crate::palette::resolve::identifier_hash;
pub use crate::pipeline::batch::{BatchOptions, BatchReport, WrittenItem, run_batch};
pub use crate::pipeline::catalog::Catalog;
pub use crate::pipeline::profile::{
    Nudges, PlaceholderLayout, Shadow, Style, SynthesisProfile, default_font_dirs,
};
pub use crate::pipeline::spec::{ItemSpec, ProductKind};
pub use crate::pipeline::synth::{GlyphOutcome, SynthesizedItem, Synthesizer};
pub use crate::render::gradient::{GradientMode, GradientSpec, render_gradient};
pub use crate::render::mask::{AlphaMask, apply_mask, circular_mask};
