//! Collection types used across Narraloom.
//!
//! Glyph tables and other lookups are keyed by small integers, so the AHash
//! hasher is used instead of SipHash.

pub use ahash::{AHashMap as HashMap, AHashSet as HashSet, RandomState};
