//! Narraloom Text - bitmap-font text for dialogue boxes
//!
//! This crate lays out text set in a pre-rasterized bitmap font:
//! - [`bmfont`]: parse BMFont text descriptors into a [`BitmapFont`]
//! - [`layout`]: word-wrap with a visible-character budget (typewriter reveal)
//! - [`quad`]: turn positioned glyphs into textured triangles
//! - [`TextBatch`]: both of the above into reusable per-frame buffers
//! - [`Typewriter`]: frame-time driven reveal budget
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use narraloom_text::{BitmapFont, LayoutRequest, TextBatch, Typewriter, TypewriterConfig, Vec2};
//!
//! let font = BitmapFont::load("assets/fonts/default.fnt").unwrap();
//! let text = "Narraloom is alive.";
//! let mut typewriter = Typewriter::for_text(text, TypewriterConfig::default());
//! let mut batch = TextBatch::new();
//!
//! // Once per frame:
//! typewriter.update(1.0 / 60.0);
//! let request = LayoutRequest::new(text, 1120.0)
//!     .with_origin(Vec2::new(80.0, 520.0))
//!     .with_max_lines(4)
//!     .with_visible_chars(typewriter.visible_chars());
//! let summary = batch.prepare(&request, &font);
//! // Upload batch.quads().as_bytes() and draw `summary.quads * 6` vertices.
//! ```
//!
//! Layout never fails: characters missing from the font advance the pen by a
//! fallback width and are not drawn.

pub mod batch;
pub mod bmfont;
pub mod error;
pub mod font;
pub mod layout;
pub mod quad;
pub mod typewriter;

#[cfg(feature = "asset")]
pub mod asset;

pub use batch::{BatchSummary, TextBatch};
pub use bmfont::ParseMode;
pub use error::{FontError, FontResult, FormatError};
pub use font::{BitmapFont, Glyph};
pub use layout::{LayoutRequest, LayoutResult, PositionedGlyph, WrapMeasure, layout, layout_into};
pub use quad::{AtlasSize, GlyphVertex, QuadBuffer, emit_glyph_quad};
pub use typewriter::{Typewriter, TypewriterConfig};

#[cfg(feature = "asset")]
pub use asset::BitmapFontLoader;

pub use narraloom_core::math::Vec2;
