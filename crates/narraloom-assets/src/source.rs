//! Asset sources - where assets come from.

use std::path::{Path, PathBuf};
use std::sync::Arc;

/// The source of an asset.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AssetSource {
    /// A file on disk.
    Disk {
        /// The path as provided by the caller.
        path: PathBuf,
    },

    /// Bytes that are already in memory (embedded assets, tests).
    Bytes {
        /// Identifier used in diagnostics, usually a file name.
        id: String,
        /// The raw bytes.
        data: Arc<[u8]>,
    },
}

impl AssetSource {
    /// Create a disk source from a path.
    pub fn disk(path: impl AsRef<Path>) -> Self {
        AssetSource::Disk {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Create a bytes source with an identifier.
    pub fn bytes(id: impl Into<String>, data: impl Into<Arc<[u8]>>) -> Self {
        AssetSource::Bytes {
            id: id.into(),
            data: data.into(),
        }
    }

    /// Get the original path if this is a disk source.
    pub fn path(&self) -> Option<&Path> {
        match self {
            AssetSource::Disk { path } => Some(path),
            AssetSource::Bytes { .. } => None,
        }
    }

    /// File extension, taken from the path or from the bytes identifier.
    pub fn extension(&self) -> Option<&str> {
        match self {
            AssetSource::Disk { path } => path.extension().and_then(|e| e.to_str()),
            AssetSource::Bytes { id, .. } => id
                .rsplit_once('.')
                .map(|(_, ext)| ext)
                .filter(|e| !e.contains('/') && !e.contains(':')),
        }
    }

    /// Human-readable location for logs and error messages.
    pub fn display_path(&self) -> String {
        match self {
            AssetSource::Disk { path } => path.display().to_string(),
            AssetSource::Bytes { id, .. } => format!("bytes:{}", id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disk_extension() {
        let source = AssetSource::disk("assets/fonts/default.fnt");
        assert_eq!(source.extension(), Some("fnt"));
        assert_eq!(source.path(), Some(Path::new("assets/fonts/default.fnt")));
    }

    #[test]
    fn test_bytes_extension() {
        let source = AssetSource::bytes("default.fnt", b"common".to_vec());
        assert_eq!(source.extension(), Some("fnt"));
        assert_eq!(source.path(), None);
        assert_eq!(source.display_path(), "bytes:default.fnt");

        let no_ext = AssetSource::bytes("hash:0123", Vec::new());
        assert_eq!(no_ext.extension(), None);
    }
}
