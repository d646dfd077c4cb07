//! Textured quads for positioned glyphs.
//!
//! Every glyph becomes two triangles sharing the top-left/bottom-right
//! diagonal, always in the order
//!
//! ```text
//! TL, TR, BR,   TL, BR, BL
//! ```
//!
//! so every quad has the same winding. Vertices are interleaved
//! `x, y, u, v` and can be uploaded as-is with [`QuadBuffer::as_bytes`].

use narraloom_core::math::Vec2;
use narraloom_core::profiling::profile_function;

use crate::font::{BitmapFont, Glyph};
use crate::layout::PositionedGlyph;

/// Vertices emitted per glyph.
pub const VERTICES_PER_GLYPH: usize = 6;

/// Vertex data for glyph rendering.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GlyphVertex {
    pub position: [f32; 2],
    pub tex_coords: [f32; 2],
}

impl GlyphVertex {
    #[inline]
    const fn new(x: f32, y: f32, u: f32, v: f32) -> Self {
        Self {
            position: [x, y],
            tex_coords: [u, v],
        }
    }
}

/// Atlas texture size in pixels, used to normalize UVs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AtlasSize {
    pub width: i32,
    pub height: i32,
}

impl From<&BitmapFont> for AtlasSize {
    fn from(font: &BitmapFont) -> Self {
        Self {
            width: font.atlas_width(),
            height: font.atlas_height(),
        }
    }
}

/// Append the quad for `glyph` drawn at `pen` to `out`.
pub fn emit_glyph_quad(
    out: &mut Vec<GlyphVertex>,
    glyph: &Glyph,
    pen: Vec2,
    scale: f32,
    atlas: AtlasSize,
) {
    let x0 = pen.x + glyph.x_offset as f32 * scale;
    let y0 = pen.y + glyph.y_offset as f32 * scale;
    let x1 = x0 + glyph.width as f32 * scale;
    let y1 = y0 + glyph.height as f32 * scale;

    let atlas_w = atlas.width as f32;
    let atlas_h = atlas.height as f32;
    let u0 = glyph.x as f32 / atlas_w;
    let v0 = glyph.y as f32 / atlas_h;
    let u1 = (glyph.x as f32 + glyph.width as f32) / atlas_w;
    let v1 = (glyph.y as f32 + glyph.height as f32) / atlas_h;

    let top_left = GlyphVertex::new(x0, y0, u0, v0);
    let top_right = GlyphVertex::new(x1, y0, u1, v0);
    let bottom_right = GlyphVertex::new(x1, y1, u1, v1);
    let bottom_left = GlyphVertex::new(x0, y1, u0, v1);

    out.extend_from_slice(&[
        top_left,
        top_right,
        bottom_right,
        top_left,
        bottom_right,
        bottom_left,
    ]);
}

/// Caller-owned vertex buffer reused across frames.
#[derive(Debug, Clone, Default)]
pub struct QuadBuffer {
    vertices: Vec<GlyphVertex>,
}

impl QuadBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Buffer with room for `glyphs` quads.
    pub fn with_capacity(glyphs: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(glyphs * VERTICES_PER_GLYPH),
        }
    }

    /// Drop all vertices, keeping the allocation.
    pub fn clear(&mut self) {
        self.vertices.clear();
    }

    /// Append one quad per positioned glyph.
    pub fn extend(&mut self, glyphs: &[PositionedGlyph], scale: f32, atlas: AtlasSize) {
        profile_function!();
        self.vertices.reserve(glyphs.len() * VERTICES_PER_GLYPH);
        for positioned in glyphs {
            emit_glyph_quad(
                &mut self.vertices,
                &positioned.glyph,
                positioned.pen,
                scale,
                atlas,
            );
        }
    }

    pub fn vertices(&self) -> &[GlyphVertex] {
        &self.vertices
    }

    /// Vertex data as raw bytes for a GPU upload.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn quad_count(&self) -> usize {
        self.vertices.len() / VERTICES_PER_GLYPH
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}
