use std::path::PathBuf;

use crate::foundation::{
    core::{Canvas, Rgba8},
};
use crate::glyph::{
    draw::{EMOJI_BASELINE_NUDGE, TEXT_BASELINE_NUDGE},
    fonts::{FontChain, FontDescriptor},
};

const APPLE_EMOJI: &str = "/System/Library/Fonts/Apple Color Emoji.ttc";
const NOTO_EMOJI: &str = "NotoColorEmoji.ttf";
const HELVETICA: &str = "/System/Library/Fonts/Helvetica.ttc";
const ARIAL: &str = "/Library/Fonts/Arial.ttf";
const SF_PRO_BOLD: &str = "/System/Library/Fonts/SF-Pro-Display-Bold.otf";
const DEJAVU_BOLD: &str = "DejaVuSans-Bold.ttf";
const LIBERATION_BOLD: &str = "LiberationSans-Bold.ttf";

/// Point size of avatar initials and fallback text.
pub const TEXT_POINT_SIZE: u32 = 80;
pub const CAPTION_POINT_SIZE: u32 = 48;

/// Which generation of artwork to produce.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    serde::Serialize,
    serde::Deserialize,
    clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum Style {
    /// Flat hashed colors, initials, two-stop placeholders.
    #[default]
    Classic,
    /// Radial gradients, emoji, three-stop placeholders with captions and texture.
    Pro,
}

impl Style {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Classic => "classic",
            Self::Pro => "pro",
        }
    }
}

/// How the glyphs of a placeholder are arranged.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaceholderLayout {
    /// Emoji centered; when no font can draw it the caption (or initials) is centered instead.
    Centered,
    /// Emoji ink top at `height / 2 + emoji_top`, caption ink top at
    /// `height / 2 + caption_top` with a drop shadow. A failed emoji is skipped.
    Captioned { emoji_top: i64, caption_top: i64 },
}

/// Upward offsets for centered glyphs, in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Nudges {
    /// The requested glyph (emoji).
    pub glyph: i64,
    /// Initials or fallback text.
    pub text: i64,
}

/// Caption drop shadow.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Shadow {
    pub color: Rgba8,
    pub offset: (i64, i64),
}

/// Immutable rendering parameters for one style.
#[derive(Clone, Debug, PartialEq)]
pub struct SynthesisProfile {
    pub style: Style,
    pub avatar_canvas: Canvas,
    pub placeholder_canvas: Canvas,
    pub avatar_emoji_chain: FontChain,
    pub placeholder_emoji_chain: FontChain,
    pub text_chain: FontChain,
    pub caption_chain: FontChain,
    pub avatar_nudges: Nudges,
    /// Placeholders are centered without a baseline offset in both built-in styles.
    pub placeholder_nudges: Nudges,
    /// Fill of initials and fallback text.
    pub text_color: Rgba8,
    pub caption_color: Rgba8,
    pub caption_shadow: Shadow,
    pub placeholder_layout: PlaceholderLayout,
    /// Run the smoothing filter over finished placeholders.
    pub smooth_placeholders: bool,
}

impl SynthesisProfile {
    pub fn for_style(style: Style) -> Self {
        match style {
            Style::Classic => Self::classic(),
            Style::Pro => Self::pro(),
        }
    }

    pub fn classic() -> Self {
        Self {
            style: Style::Classic,
            avatar_canvas: Canvas {
                width: 200,
                height: 200,
            },
            placeholder_canvas: Canvas {
                width: 400,
                height: 600,
            },
            avatar_emoji_chain: emoji_chain(150),
            placeholder_emoji_chain: emoji_chain(120),
            text_chain: text_chain(),
            caption_chain: caption_chain(),
            avatar_nudges: Nudges {
                glyph: EMOJI_BASELINE_NUDGE,
                text: TEXT_BASELINE_NUDGE,
            },
            placeholder_nudges: Nudges::default(),
            text_color: Rgba8::new(255, 255, 255, 255),
            caption_color: Rgba8::new(255, 255, 255, 250),
            caption_shadow: Shadow {
                color: Rgba8::new(0, 0, 0, 80),
                offset: (2, 2),
            },
            placeholder_layout: PlaceholderLayout::Centered,
            smooth_placeholders: false,
        }
    }

    pub fn pro() -> Self {
        Self {
            style: Style::Pro,
            avatar_canvas: Canvas {
                width: 300,
                height: 300,
            },
            // Fallback initials sit at the plain center.
            avatar_nudges: Nudges {
                glyph: EMOJI_BASELINE_NUDGE,
                text: 0,
            },
            text_color: Rgba8::new(255, 255, 255, 230),
            placeholder_layout: PlaceholderLayout::Captioned {
                emoji_top: -100,
                caption_top: 60,
            },
            smooth_placeholders: true,
            ..Self::classic()
        }
    }

    /// Drop every font file from every chain so only the built-in font is used.
    pub fn builtin_fonts_only(mut self) -> Self {
        for chain in [
            &mut self.avatar_emoji_chain,
            &mut self.placeholder_emoji_chain,
            &mut self.text_chain,
            &mut self.caption_chain,
        ] {
            *chain = chain.builtin_only();
        }
        self
    }
}

/// Directories searched for relative font paths when none are configured.
pub fn default_font_dirs() -> Vec<PathBuf> {
    [
        "/usr/share/fonts/truetype/dejavu",
        "/usr/share/fonts/truetype/liberation",
        "/usr/share/fonts/truetype/noto",
        "/usr/share/fonts/noto",
        "/Library/Fonts",
    ]
    .into_iter()
    .map(PathBuf::from)
    .collect()
}

// No built-in entry: the block font has no emoji.
fn emoji_chain(point_size: u32) -> FontChain {
    FontChain::new(
        vec![FontDescriptor::new([APPLE_EMOJI, NOTO_EMOJI], point_size)],
        None,
    )
}

fn text_chain() -> FontChain {
    FontChain::new(
        vec![FontDescriptor::new(
            [HELVETICA, ARIAL, DEJAVU_BOLD, LIBERATION_BOLD],
            TEXT_POINT_SIZE,
        )],
        Some(TEXT_POINT_SIZE),
    )
}

fn caption_chain() -> FontChain {
    FontChain::new(
        vec![FontDescriptor::new(
            [SF_PRO_BOLD, HELVETICA, DEJAVU_BOLD, LIBERATION_BOLD],
            CAPTION_POINT_SIZE,
        )],
        Some(CAPTION_POINT_SIZE),
    )
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/profile.rs"]
mod tests;
