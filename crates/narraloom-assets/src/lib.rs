//! Narraloom Assets
//!
//! Where asset bytes come from and how typed loaders turn them into values.
//! Only synchronous loading is provided: fonts and atlases are small static
//! files read once at startup.

pub mod error;
pub mod io;
pub mod loader;
pub mod source;

pub use error::{AssetError, AssetResult};
pub use io::FileReader;
pub use loader::{AssetLoader, LoadContext};
pub use source::AssetSource;
