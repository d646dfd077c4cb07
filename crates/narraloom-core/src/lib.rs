//! Narraloom Core
//!
//! Shared plumbing for the Narraloom crates: logging bootstrap, profiling
//! scopes, hash collections and math types.

pub mod alloc;
pub mod logging;
pub mod math;
pub mod profiling;
