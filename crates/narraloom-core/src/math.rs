//! Math types.
//!
//! CPU-side positions use [`glam`]'s SIMD types. GPU-facing data is declared
//! with `#[repr(C)]` + [`bytemuck::Pod`] next to the code that fills it.
//!
//! ```
//! use narraloom_core::math::Vec2;
//!
//! let origin = Vec2::new(80.0, 520.0);
//! let pen = origin + Vec2::new(12.0, 0.0);
//! assert_eq!(pen.x, 92.0);
//! ```

pub use glam::{Vec2, vec2};
