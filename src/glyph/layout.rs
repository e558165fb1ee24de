//! Outline and color-font text rendering via `parley` shaping and `vello_cpu` rasterization.

use std::path::Path;

use crate::foundation::{
    core::{Canvas, Rgba8},
    error::FontError,
};
use crate::glyph::draw::GlyphSprite;
use crate::render::raster::rasterize;

/// Shared font file contents. Clones share one allocation; parley and `vello_cpu` take the
/// same blob type.
pub type FontBlob = parley::fontique::Blob<u8>;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// RGBA8 brush color used by Parley text layout.
pub(crate) struct TextBrush {
    pub(crate) r: u8,
    pub(crate) g: u8,
    pub(crate) b: u8,
    pub(crate) a: u8,
}

impl From<Rgba8> for TextBrush {
    fn from(c: Rgba8) -> Self {
        Self {
            r: c.r,
            g: c.g,
            b: c.b,
            a: c.a,
        }
    }
}

/// Parley contexts that only ever see the fonts registered into them.
///
/// System fonts are not loaded, so a character missing from the registered font shapes to
/// glyph id 0 instead of silently falling back to some other installed face.
pub(crate) struct TextLayoutEngine {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<TextBrush>,
}

impl Default for TextLayoutEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TextLayoutEngine {
    pub(crate) fn new() -> Self {
        let collection =
            parley::fontique::Collection::new(parley::fontique::CollectionOptions {
                shared: false,
                system_fonts: false,
            });
        Self {
            font_ctx: parley::FontContext {
                collection,
                source_cache: parley::fontique::SourceCache::default(),
            },
            layout_ctx: parley::LayoutContext::new(),
        }
    }

    /// Register `font` and return the family name of its first face.
    pub(crate) fn register(&mut self, font: &FontBlob, path: &Path) -> Result<String, FontError> {
        let families = self
            .font_ctx
            .collection
            .register_fonts(font.clone(), None);
        let family_id = families
            .first()
            .map(|(id, _)| *id)
            .ok_or_else(|| FontError::NoFamily {
                path: path.to_path_buf(),
            })?;

        self.font_ctx
            .collection
            .family_name(family_id)
            .map(str::to_string)
            .ok_or_else(|| FontError::NoFamily {
                path: path.to_path_buf(),
            })
    }

    /// Shape `text` on a single unbounded line.
    pub(crate) fn layout_plain(
        &mut self,
        text: &str,
        family_name: &str,
        size_px: f32,
        brush: TextBrush,
    ) -> parley::Layout<TextBrush> {
        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(family_name.to_string())),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));
        builder.push_default(parley::style::StyleProperty::Brush(brush));

        let mut layout: parley::Layout<TextBrush> = builder.build(text);
        layout.break_all_lines(None);
        layout
    }
}

/// Shape and rasterize `text` with `font`.
///
/// The sprite is padded by half the point size on every side so color glyphs that overshoot
/// their advance box are not clipped.
pub(crate) fn render_text(
    font: &FontBlob,
    path: &Path,
    text: &str,
    size_px: f32,
    color: Rgba8,
) -> Result<GlyphSprite, FontError> {
    if text.is_empty() {
        return Err(FontError::EmptyText);
    }
    let font_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    let unsupported = || FontError::UnsupportedGlyph {
        font: font_name.clone(),
        ch: text.chars().next().unwrap_or(' '),
    };

    let mut engine = TextLayoutEngine::new();
    let family = engine.register(font, path)?;
    let layout = engine.layout_plain(text, &family, size_px, TextBrush::from(color));

    let mut runs = Vec::new();
    for line in layout.lines() {
        for item in line.items() {
            let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                continue;
            };
            let glyphs: Vec<vello_cpu::Glyph> = run
                .positioned_glyphs()
                .map(|g| vello_cpu::Glyph {
                    id: g.id,
                    x: g.x,
                    y: g.y,
                })
                .collect();
            if glyphs.iter().any(|g| g.id == 0) {
                return Err(unsupported());
            }
            let data = vello_cpu::peniko::FontData::new(font.clone(), run.run().font().index);
            runs.push((data, run.run().font_size(), glyphs));
        }
    }
    if runs.iter().all(|(_, _, glyphs)| glyphs.is_empty()) {
        return Err(unsupported());
    }

    let pad = (size_px / 2.0).ceil().max(1.0);
    let width = (layout.width().ceil() + 2.0 * pad) as u32;
    let height = (layout.height().ceil() + 2.0 * pad) as u32;
    let canvas = Canvas::new(width, height).map_err(|_| unsupported())?;

    let brush = TextBrush::from(color);
    let pixels = rasterize(canvas, |ctx| {
        ctx.set_transform(vello_cpu::kurbo::Affine::translate((
            f64::from(pad),
            f64::from(pad),
        )));
        ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
            brush.r, brush.g, brush.b, brush.a,
        ));
        for (data, font_size, glyphs) in runs {
            ctx.glyph_run(&data)
                .font_size(font_size)
                .fill_glyphs(glyphs.into_iter());
        }
    })
    .map_err(|e| FontError::Unreadable {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    GlyphSprite::from_pixels(pixels).ok_or_else(unsupported)
}

#[cfg(test)]
#[path = "../../tests/unit/glyph/layout.rs"]
mod tests;
