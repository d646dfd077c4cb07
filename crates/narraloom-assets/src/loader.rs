//! Asset loader traits.

use crate::error::AssetResult;
use crate::source::AssetSource;

/// Context provided to asset loaders during loading.
pub struct LoadContext<'a> {
    /// The source of the asset being loaded.
    pub source: &'a AssetSource,
    /// The raw bytes of the asset.
    pub bytes: &'a [u8],
    /// File extension (without the dot), if available.
    pub extension: Option<&'a str>,
}

impl<'a> LoadContext<'a> {
    /// Create a new load context.
    pub fn new(source: &'a AssetSource, bytes: &'a [u8], extension: Option<&'a str>) -> Self {
        Self {
            source,
            bytes,
            extension,
        }
    }
}

/// Trait for loading assets from bytes.
///
/// # Example
///
/// ```ignore
/// struct FntLoader;
///
/// impl AssetLoader for FntLoader {
///     type Asset = BitmapFont;
///
///     fn extensions(&self) -> &[&str] {
///         &["fnt"]
///     }
///
///     fn load(&self, ctx: LoadContext<'_>) -> AssetResult<Self::Asset> {
///         // Parse the descriptor text...
///     }
/// }
/// ```
pub trait AssetLoader: Send + Sync + 'static {
    /// The asset type this loader produces.
    type Asset: Send + Sync + 'static;

    /// The file extensions this loader handles (without dots).
    fn extensions(&self) -> &[&str];

    /// Load an asset from the provided context.
    fn load(&self, ctx: LoadContext<'_>) -> AssetResult<Self::Asset>;

    /// Whether this loader accepts the given extension (case-insensitive).
    fn handles_extension(&self, extension: &str) -> bool {
        self.extensions()
            .iter()
            .any(|ext| ext.eq_ignore_ascii_case(extension))
    }
}
