//! In-memory bitmap font metrics.

use narraloom_core::alloc::HashMap;

use crate::error::FormatError;

/// Advance used for characters the font has no glyph for, as a fraction of
/// the line height.
pub const FALLBACK_ADVANCE_RATIO: f32 = 0.33;

/// Drawing metrics of one character in the atlas, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Glyph {
    /// Code point.
    pub id: u32,
    /// Left edge in the atlas.
    pub x: i32,
    /// Top edge in the atlas.
    pub y: i32,
    pub width: i32,
    pub height: i32,
    /// Offset from the pen to the top-left of the drawn rectangle.
    pub x_offset: i32,
    pub y_offset: i32,
    /// How far the pen moves after drawing this glyph.
    pub x_advance: i32,
}

impl Glyph {
    /// Whether the atlas rectangle of this glyph lies within an atlas of the
    /// given size.
    pub fn fits_atlas(&self, atlas_width: i32, atlas_height: i32) -> bool {
        self.width >= 0
            && self.height >= 0
            && self.x >= 0
            && self.y >= 0
            && self
                .x
                .checked_add(self.width)
                .is_some_and(|right| right <= atlas_width)
            && self
                .y
                .checked_add(self.height)
                .is_some_and(|bottom| bottom <= atlas_height)
    }
}

/// A pre-rasterized font: glyph rectangles in one atlas texture plus the
/// font-wide metrics needed to lay text out.
///
/// Built once by [`crate::bmfont::parse`] and immutable afterwards; share it
/// behind an `Arc` when several consumers need it.
#[derive(Debug, Clone, Default)]
pub struct BitmapFont {
    pub(crate) line_height: i32,
    pub(crate) atlas_width: i32,
    pub(crate) atlas_height: i32,
    pub(crate) glyphs: HashMap<u32, Glyph>,
    pub(crate) pages: HashMap<u32, String>,
}

impl BitmapFont {
    /// Distance between two baselines, in pixels.
    pub fn line_height(&self) -> i32 {
        self.line_height
    }

    /// Atlas texture width in pixels.
    pub fn atlas_width(&self) -> i32 {
        self.atlas_width
    }

    /// Atlas texture height in pixels.
    pub fn atlas_height(&self) -> i32 {
        self.atlas_height
    }

    /// Look up the glyph for a character.
    #[inline]
    pub fn glyph(&self, ch: char) -> Option<&Glyph> {
        self.glyphs.get(&(ch as u32))
    }

    /// All glyphs, in no particular order.
    pub fn glyphs(&self) -> impl Iterator<Item = &Glyph> {
        self.glyphs.values()
    }

    pub fn glyph_count(&self) -> usize {
        self.glyphs.len()
    }

    /// Atlas page file name declared by the `page` record with this id.
    pub fn page(&self, id: u32) -> Option<&str> {
        self.pages.get(&id).map(String::as_str)
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Horizontal pen movement for `ch` at the given scale.
    ///
    /// Tab measures as a space. Characters without a glyph advance by
    /// `line_height * 0.33` so they never collapse to zero width.
    #[inline]
    pub fn advance_of(&self, ch: char, scale: f32) -> f32 {
        let ch = if ch == '\t' { ' ' } else { ch };
        match self.glyph(ch) {
            Some(glyph) => glyph.x_advance as f32 * scale,
            None => self.fallback_advance(scale),
        }
    }

    /// Advance used for characters missing from the font.
    #[inline]
    pub fn fallback_advance(&self, scale: f32) -> f32 {
        self.line_height as f32 * FALLBACK_ADVANCE_RATIO * scale
    }

    /// Width of `text` drawn on a single line, up to the first newline.
    pub fn measure_line(&self, text: &str, scale: f32) -> f32 {
        text.chars()
            .take_while(|&ch| ch != '\n')
            .map(|ch| self.advance_of(ch, scale))
            .sum()
    }

    /// Fails on the lowest-id glyph whose rectangle leaves the atlas.
    pub(crate) fn check_atlas_bounds(&self) -> Result<(), FormatError> {
        let mut glyphs: Vec<&Glyph> = self.glyphs.values().collect();
        glyphs.sort_unstable_by_key(|glyph| glyph.id);

        for glyph in glyphs {
            if !glyph.fits_atlas(self.atlas_width, self.atlas_height) {
                return Err(FormatError::GlyphOutOfBounds {
                    id: glyph.id,
                    x: glyph.x,
                    y: glyph.y,
                    width: glyph.width,
                    height: glyph.height,
                    atlas_width: self.atlas_width,
                    atlas_height: self.atlas_height,
                });
            }
        }
        Ok(())
    }
}

impl PartialEq for BitmapFont {
    fn eq(&self, other: &Self) -> bool {
        self.line_height == other.line_height
            && self.atlas_width == other.atlas_width
            && self.atlas_height == other.atlas_height
            && self.pages.len() == other.pages.len()
            && self
                .pages
                .iter()
                .all(|(id, file)| other.pages.get(id) == Some(file))
            && self.glyphs.len() == other.glyphs.len()
            && self
                .glyphs
                .iter()
                .all(|(id, glyph)| other.glyphs.get(id) == Some(glyph))
    }
}

impl Eq for BitmapFont {}
