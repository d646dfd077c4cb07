//! Word-wrapped, partially revealed text layout.
//!
//! Layout walks the text once, left to right, splitting it into *wrap tokens*:
//! maximal runs that are either all whitespace (space/tab) or all
//! non-whitespace, with newlines always standing alone. A non-whitespace token
//! that would overflow a line that already has content moves, whole, to the
//! next line. Tokens are never split, so a word wider than the wrap width sits
//! at the start of its own line and overflows.
//!
//! The optional visible-character budget implements the typewriter reveal:
//! every input character (whitespace and newlines included) costs one unit,
//! and layout stops once the budget is spent.
//!
//! ```
//! use narraloom_text::{bmfont, layout, LayoutRequest};
//!
//! let font = bmfont::parse(
//!     "common lineHeight=20 scaleW=64 scaleH=64\n\
//!      char id=65 x=0 y=0 width=8 height=10 xadvance=10\n\
//!      char id=66 x=8 y=0 width=8 height=10 xadvance=12\n",
//! )
//! .unwrap();
//!
//! let result = layout(&LayoutRequest::new("AB", 999.0).with_visible_chars(1), &font);
//! assert_eq!(result.glyphs.len(), 1);
//! assert!(!result.reached_end);
//! ```

use narraloom_core::math::Vec2;
use narraloom_core::profiling::profile_function;

use crate::font::{BitmapFont, Glyph};

/// How a token cut short by the visible-character budget is measured for
/// the wrap test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WrapMeasure {
    /// Measure only the revealed part of the token, exactly as it is drawn.
    ///
    /// A word being revealed may start on one line and jump to the next once
    /// enough of it is visible to overflow.
    #[default]
    Revealed,
    /// Measure the whole token even when only part of it is revealed, so a
    /// word is placed on its final line from its first visible character.
    FullToken,
}

/// Parameters of a single layout call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutRequest<'a> {
    /// Text to lay out.
    pub text: &'a str,
    /// Pen position of the first glyph.
    pub origin: Vec2,
    /// Wrap width in pixels.
    pub max_width: f32,
    /// Uniform multiplier for every glyph metric and advance.
    pub scale: f32,
    /// Maximum number of lines; `0` means unbounded.
    pub max_lines: usize,
    /// Number of characters revealed so far; `None` shows the whole text.
    pub visible_chars: Option<usize>,
    pub wrap_measure: WrapMeasure,
}

impl<'a> LayoutRequest<'a> {
    /// Full text at the origin, unscaled, unbounded lines.
    pub fn new(text: &'a str, max_width: f32) -> Self {
        Self {
            text,
            origin: Vec2::ZERO,
            max_width,
            scale: 1.0,
            max_lines: 0,
            visible_chars: None,
            wrap_measure: WrapMeasure::default(),
        }
    }

    pub fn with_origin(mut self, origin: Vec2) -> Self {
        self.origin = origin;
        self
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_max_lines(mut self, max_lines: usize) -> Self {
        self.max_lines = max_lines;
        self
    }

    pub fn with_visible_chars(mut self, visible_chars: usize) -> Self {
        self.visible_chars = Some(visible_chars);
        self
    }

    pub fn with_wrap_measure(mut self, wrap_measure: WrapMeasure) -> Self {
        self.wrap_measure = wrap_measure;
        self
    }
}

/// A glyph to draw with its pen position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionedGlyph {
    pub glyph: Glyph,
    pub pen: Vec2,
}

/// Output of a layout call.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutResult {
    /// Glyphs to draw, in text order. Whitespace and characters missing from
    /// the font move the pen without appearing here.
    pub glyphs: Vec<PositionedGlyph>,
    /// Input characters processed, including whitespace and newlines.
    pub chars_consumed: usize,
    /// Whether the reveal budget covers the whole text.
    pub reached_end: bool,
    /// Number of lines the pen visited.
    pub lines: usize,
}

impl Default for LayoutResult {
    fn default() -> Self {
        Self {
            glyphs: Vec::new(),
            chars_consumed: 0,
            reached_end: true,
            lines: 0,
        }
    }
}

impl LayoutResult {
    /// Reset to the empty result, keeping the glyph allocation.
    pub fn clear(&mut self) {
        self.glyphs.clear();
        self.chars_consumed = 0;
        self.reached_end = true;
        self.lines = 0;
    }
}

#[inline]
fn is_space(ch: char) -> bool {
    ch == ' ' || ch == '\t'
}

/// Lay out `request` with `font` into a freshly allocated result.
pub fn layout(request: &LayoutRequest<'_>, font: &BitmapFont) -> LayoutResult {
    let mut result = LayoutResult::default();
    layout_into(request, font, &mut result);
    result
}

/// Lay out `request` with `font`, reusing the buffers of `result`.
pub fn layout_into(request: &LayoutRequest<'_>, font: &BitmapFont, result: &mut LayoutResult) {
    profile_function!();
    result.clear();

    if request.text.is_empty() || request.max_width <= 1.0 {
        return;
    }

    let scale = request.scale;
    let origin = request.origin;
    let line_advance = font.line_height() as f32 * scale;
    let budget = request.visible_chars;
    let exhausted = |consumed: usize| budget.is_some_and(|limit| consumed >= limit);

    let mut pen = origin;
    let mut line = 1usize;
    let mut consumed = 0usize;
    let mut rest = request.text;

    // Moves the pen to the next line. Returns false when that line is past
    // `max_lines`.
    let next_line = |pen: &mut Vec2, line: &mut usize| {
        pen.x = origin.x;
        pen.y += line_advance;
        *line += 1;
        request.max_lines == 0 || *line <= request.max_lines
    };

    while let Some(first) = rest.chars().next() {
        if exhausted(consumed) {
            break;
        }

        if first == '\n' {
            rest = &rest[1..];
            consumed += 1;
            if !next_line(&mut pen, &mut line) {
                result.chars_consumed = consumed;
                result.reached_end = false;
                result.lines = line - 1;
                return;
            }
            continue;
        }

        let token_is_space = is_space(first);
        let end = rest
            .find(|ch: char| ch == '\n' || is_space(ch) != token_is_space)
            .unwrap_or(rest.len());
        let (token, tail) = rest.split_at(end);
        rest = tail;

        let measured = match request.wrap_measure {
            WrapMeasure::Revealed => budget.map_or(usize::MAX, |limit| limit - consumed),
            WrapMeasure::FullToken => usize::MAX,
        };
        let token_width: f32 = token
            .chars()
            .take(measured)
            .map(|ch| font.advance_of(ch, scale))
            .sum();

        let overflows = (pen.x - origin.x) + token_width > request.max_width;
        if overflows && !token_is_space && pen.x > origin.x && !next_line(&mut pen, &mut line) {
            result.chars_consumed = consumed;
            result.reached_end = false;
            result.lines = line - 1;
            return;
        }

        for ch in token.chars() {
            if exhausted(consumed) {
                break;
            }
            consumed += 1;

            if is_space(ch) {
                pen.x += font.advance_of(' ', scale);
                continue;
            }

            match font.glyph(ch) {
                Some(glyph) => {
                    result.glyphs.push(PositionedGlyph { glyph: *glyph, pen });
                    pen.x += glyph.x_advance as f32 * scale;
                }
                None => pen.x += font.fallback_advance(scale),
            }
        }
    }

    result.chars_consumed = consumed;
    result.lines = line;
    result.reached_end = match budget {
        None => true,
        Some(limit) => limit >= request.text.chars().count(),
    };
}
