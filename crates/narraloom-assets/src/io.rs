//! Synchronous file I/O for asset loading.

use std::path::{Path, PathBuf};

use narraloom_core::profiling::profile_function;

use crate::error::{AssetError, AssetResult};
use crate::loader::{AssetLoader, LoadContext};
use crate::source::AssetSource;

/// Blocking file reader with an optional base directory for relative paths.
#[derive(Debug, Clone, Default)]
pub struct FileReader {
    base_path: PathBuf,
}

impl FileReader {
    /// Create a new file reader with a base path.
    pub fn new(base_path: impl AsRef<Path>) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    /// Resolve a path relative to the base path.
    pub fn resolve_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_path.join(path)
        }
    }

    /// Read all bytes of a file.
    ///
    /// A missing file maps to [`AssetError::NotFound`]; every other failure
    /// to [`AssetError::IoError`].
    pub fn read_bytes_sync(&self, path: &Path) -> AssetResult<Vec<u8>> {
        profile_function!();
        let full_path = self.resolve_path(path);
        std::fs::read(&full_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                AssetError::NotFound {
                    path: full_path.display().to_string(),
                }
            } else {
                AssetError::IoError {
                    path: full_path.clone(),
                    source: e,
                }
            }
        })
    }

    /// Check if a path exists.
    pub fn exists_sync(&self, path: &Path) -> bool {
        self.resolve_path(path).exists()
    }

    /// Read the bytes behind `source` and hand them to `loader`.
    pub fn load<L: AssetLoader>(&self, loader: &L, source: &AssetSource) -> AssetResult<L::Asset> {
        let extension = source.extension();
        if let Some(ext) = extension
            && !loader.handles_extension(ext)
        {
            return Err(AssetError::NoLoaderForExtension {
                extension: ext.to_string(),
            });
        }

        let owned;
        let bytes: &[u8] = match source {
            AssetSource::Disk { path } => {
                owned = self.read_bytes_sync(path)?;
                owned.as_slice()
            }
            AssetSource::Bytes { data, .. } => &data[..],
        };

        tracing::debug!(
            "Loading asset '{}' ({} bytes)",
            source.display_path(),
            bytes.len()
        );
        loader.load(LoadContext::new(source, bytes, extension))
    }
}
