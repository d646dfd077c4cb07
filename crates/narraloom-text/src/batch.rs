//! Per-frame text batching: layout followed by quad emission.

use crate::font::BitmapFont;
use crate::layout::{LayoutRequest, LayoutResult, layout_into};
use crate::quad::{AtlasSize, GlyphVertex, QuadBuffer};

/// What a prepared batch contains.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    pub chars_consumed: usize,
    /// Whether the whole text is shown; drives the "continue" indicator.
    pub reached_end: bool,
    pub lines: usize,
    pub quads: usize,
}

/// Layout and vertex buffers for one text box, reused every frame.
///
/// ```
/// use narraloom_text::{bmfont, LayoutRequest, TextBatch};
///
/// let font = bmfont::parse(
///     "common lineHeight=20 scaleW=64 scaleH=64\n\
///      char id=65 x=0 y=0 width=8 height=10 xadvance=10\n",
/// )
/// .unwrap();
///
/// let mut batch = TextBatch::new();
/// let summary = batch.prepare(&LayoutRequest::new("A A", 200.0), &font);
/// assert_eq!(summary.quads, 2);
/// assert_eq!(batch.vertices().len(), 12);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TextBatch {
    layout: LayoutResult,
    quads: QuadBuffer,
}

impl TextBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the batch contents with `request` laid out in `font`.
    pub fn prepare(&mut self, request: &LayoutRequest<'_>, font: &BitmapFont) -> BatchSummary {
        layout_into(request, font, &mut self.layout);

        self.quads.clear();
        self.quads
            .extend(&self.layout.glyphs, request.scale, AtlasSize::from(font));

        self.summary()
    }

    pub fn summary(&self) -> BatchSummary {
        BatchSummary {
            chars_consumed: self.layout.chars_consumed,
            reached_end: self.layout.reached_end,
            lines: self.layout.lines,
            quads: self.quads.quad_count(),
        }
    }

    pub fn layout(&self) -> &LayoutResult {
        &self.layout
    }

    pub fn quads(&self) -> &QuadBuffer {
        &self.quads
    }

    pub fn vertices(&self) -> &[GlyphVertex] {
        self.quads.vertices()
    }
}
