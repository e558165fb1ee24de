//! Per-item synthesis: palette, base fill, texture, glyphs, mask, PNG bytes.

use image::ImageEncoder as _;

use crate::foundation::{
    core::{Canvas, PixelBuffer, Rgba8},
    error::{FontError, ForgeError, ForgeResult},
};
use crate::glyph::{
    draw::{Anchor, GlyphSprite, place, placement_origin},
    fonts::{FontChain, FontLibrary},
    initials::initials,
};
use crate::palette::catalog::{ColorScheme, PaletteEntry};
use crate::pipeline::{
    catalog::Catalog,
    profile::{Nudges, PlaceholderLayout, SynthesisProfile},
    spec::{ItemSpec, ProductKind},
};
use crate::render::{
    composite::{composite_layers, over_at},
    filter::smooth,
    gradient::{render_gradient, render_solid},
    mask::{apply_mask, circular_mask},
    texture::apply_scale_texture,
};

/// How the primary glyph of an item ended up on the image.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GlyphOutcome {
    /// The requested glyph (emoji, or initials when none was requested) was drawn.
    Drawn,
    /// The emoji could not be drawn; fallback text was drawn instead.
    FellBack,
    /// Nothing could be drawn.
    Skipped,
}

impl GlyphOutcome {
    pub fn is_degraded(self) -> bool {
        self != Self::Drawn
    }
}

/// A finished item, ready to be written.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SynthesizedItem {
    pub kind: ProductKind,
    pub identifier: String,
    pub file_name: String,
    pub glyph: GlyphOutcome,
    pub png: Vec<u8>,
}

/// Borrowed view of everything needed to render items of one run.
#[derive(Clone, Copy)]
pub struct Synthesizer<'a> {
    profile: &'a SynthesisProfile,
    catalog: &'a Catalog,
    fonts: &'a FontLibrary,
}

impl<'a> Synthesizer<'a> {
    pub fn new(
        profile: &'a SynthesisProfile,
        catalog: &'a Catalog,
        fonts: &'a FontLibrary,
    ) -> Self {
        Self {
            profile,
            catalog,
            fonts,
        }
    }

    /// Render `item` and encode it as PNG.
    #[tracing::instrument(skip(self, item), fields(id = item.identifier()))]
    pub fn synthesize(&self, kind: ProductKind, item: &ItemSpec) -> ForgeResult<SynthesizedItem> {
        item.validate()?;
        let (pixels, glyph) = match kind {
            ProductKind::Avatar => self.avatar_pixels(item)?,
            ProductKind::Placeholder => self.placeholder_pixels(item)?,
        };
        let png = match kind {
            ProductKind::Avatar => encode_png(&pixels, PngColor::Rgba)?,
            ProductKind::Placeholder => encode_png(&pixels, PngColor::Rgb)?,
        };
        Ok(SynthesizedItem {
            kind,
            identifier: item.identifier().to_string(),
            file_name: kind.file_name(item.identifier()),
            glyph,
            png,
        })
    }

    /// Square avatar with a circular alpha mask.
    pub fn avatar_pixels(&self, item: &ItemSpec) -> ForgeResult<(PixelBuffer, GlyphOutcome)> {
        let canvas = self.profile.avatar_canvas;
        let entry = self
            .catalog
            .palette(ProductKind::Avatar)
            .resolve(item.identifier(), item.palette_index());
        let mut base = render_scheme(canvas, entry);
        if item.texture() {
            apply_scale_texture(&mut base)?;
        }

        let mut glyphs = PixelBuffer::transparent(canvas);
        let outcome = self.draw_centered_glyph(
            &mut glyphs,
            item,
            &self.profile.avatar_emoji_chain,
            item.glyph(),
            initials(item.identifier()),
            self.profile.avatar_nudges,
        );

        let mut out = composite_layers(base, &[&glyphs])?;
        apply_mask(&mut out, &circular_mask(canvas))?;
        Ok((out, outcome))
    }

    /// Opaque tall placeholder.
    pub fn placeholder_pixels(&self, item: &ItemSpec) -> ForgeResult<(PixelBuffer, GlyphOutcome)> {
        let canvas = self.profile.placeholder_canvas;
        let entry = self
            .catalog
            .palette(ProductKind::Placeholder)
            .resolve(item.identifier(), item.palette_index());
        let mut base = render_scheme(canvas, entry);
        if item.texture() {
            apply_scale_texture(&mut base)?;
        }

        let mut glyphs = PixelBuffer::transparent(canvas);
        let outcome = match self.profile.placeholder_layout {
            PlaceholderLayout::Centered => {
                let fallback = item
                    .caption()
                    .map(str::to_string)
                    .unwrap_or_else(|| initials(item.identifier()));
                self.draw_centered_glyph(
                    &mut glyphs,
                    item,
                    &self.profile.placeholder_emoji_chain,
                    item.glyph(),
                    fallback,
                    self.profile.placeholder_nudges,
                )
            }
            PlaceholderLayout::Captioned {
                emoji_top,
                caption_top,
            } => {
                let mid = i64::from(canvas.height / 2);
                self.draw_captioned(&mut glyphs, item, mid + emoji_top, mid + caption_top)
            }
        };

        let out = composite_layers(base, &[&glyphs])?;
        let out = if self.profile.smooth_placeholders {
            smooth(&out)
        } else {
            out
        };
        Ok((out, outcome))
    }

    /// Draw `primary` centered, raised by `nudges.glyph`; on failure (or when absent) draw
    /// `fallback` with the text chain, raised by `nudges.text`.
    fn draw_centered_glyph(
        &self,
        layer: &mut PixelBuffer,
        item: &ItemSpec,
        primary_chain: &FontChain,
        primary: Option<&str>,
        fallback: String,
        nudges: Nudges,
    ) -> GlyphOutcome {
        let mut outcome = GlyphOutcome::Drawn;
        if let Some(text) = primary {
            match self.sprite(primary_chain, text, Rgba8::new(255, 255, 255, 255)) {
                Ok(sprite) => {
                    place(
                        layer,
                        &sprite,
                        Anchor::Centered {
                            nudge: nudges.glyph,
                        },
                    );
                    return GlyphOutcome::Drawn;
                }
                Err(e) => {
                    tracing::warn!(
                        id = item.identifier(),
                        glyph = text,
                        fallback = %fallback,
                        error = %e,
                        "glyph unavailable, drawing fallback text"
                    );
                    outcome = GlyphOutcome::FellBack;
                }
            }
        }

        match self.sprite(&self.profile.text_chain, &fallback, self.profile.text_color) {
            Ok(sprite) => {
                place(
                    layer,
                    &sprite,
                    Anchor::Centered {
                        nudge: nudges.text,
                    },
                );
                outcome
            }
            Err(e) => {
                tracing::warn!(
                    id = item.identifier(),
                    text = %fallback,
                    error = %e,
                    "fallback text unavailable, no glyph drawn"
                );
                GlyphOutcome::Skipped
            }
        }
    }

    /// Emoji above center, caption with drop shadow below it.
    fn draw_captioned(
        &self,
        layer: &mut PixelBuffer,
        item: &ItemSpec,
        emoji_top: i64,
        caption_top: i64,
    ) -> GlyphOutcome {
        let mut outcome = GlyphOutcome::Drawn;
        if let Some(emoji) = item.glyph() {
            match self.sprite(
                &self.profile.placeholder_emoji_chain,
                emoji,
                Rgba8::new(255, 255, 255, 255),
            ) {
                Ok(sprite) => place(layer, &sprite, Anchor::Top { top: emoji_top }),
                Err(e) => {
                    tracing::warn!(
                        id = item.identifier(),
                        glyph = emoji,
                        error = %e,
                        "emoji unavailable, skipped"
                    );
                    outcome = GlyphOutcome::Skipped;
                }
            }
        }

        let Some(caption) = item.caption() else {
            return outcome;
        };
        let shadow = self.profile.caption_shadow;
        let drawn = self
            .sprite(&self.profile.caption_chain, caption, shadow.color)
            .and_then(|shadow_sprite| {
                let main =
                    self.sprite(&self.profile.caption_chain, caption, self.profile.caption_color)?;
                Ok((shadow_sprite, main))
            });
        match drawn {
            Ok((shadow_sprite, main)) => {
                let (left, top) =
                    placement_origin(layer.canvas(), &main, Anchor::Top { top: caption_top });
                // Shadow first, offset from the caption's own origin.
                over_at(
                    layer,
                    shadow_sprite.pixels(),
                    left + shadow.offset.0,
                    top + shadow.offset.1,
                );
                over_at(layer, main.pixels(), left, top);
            }
            Err(e) => {
                tracing::warn!(
                    id = item.identifier(),
                    caption,
                    error = %e,
                    "caption unavailable, skipped"
                );
                outcome = GlyphOutcome::Skipped;
            }
        }
        outcome
    }

    fn sprite(
        &self,
        chain: &FontChain,
        text: &str,
        color: Rgba8,
    ) -> Result<GlyphSprite, FontError> {
        let (candidate, sprite) = self.fonts.render_first(chain, text, color)?;
        tracing::debug!(text, font = %candidate.label(), "glyph rendered");
        Ok(sprite)
    }
}

fn render_scheme(canvas: Canvas, entry: &PaletteEntry) -> PixelBuffer {
    match &entry.scheme {
        ColorScheme::Solid { color } => render_solid(canvas, *color),
        ColorScheme::Gradient { gradient } => render_gradient(canvas, gradient),
    }
}

/// Channel layout written to the PNG.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PngColor {
    Rgba,
    /// Alpha is dropped.
    Rgb,
}

pub fn encode_png(pixels: &PixelBuffer, color: PngColor) -> ForgeResult<Vec<u8>> {
    let mut out = Vec::new();
    let encoder = image::codecs::png::PngEncoder::new(&mut out);
    let result = match color {
        PngColor::Rgba => encoder.write_image(
            pixels.as_bytes(),
            pixels.width(),
            pixels.height(),
            image::ExtendedColorType::Rgba8,
        ),
        PngColor::Rgb => encoder.write_image(
            &pixels.to_rgb8(),
            pixels.width(),
            pixels.height(),
            image::ExtendedColorType::Rgb8,
        ),
    };
    result.map_err(|e| ForgeError::encode(format!("png: {e}")))?;
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/synth.rs"]
mod tests;
