//! Loading bitmap fonts from disk through `narraloom-assets`.
//!
//! # Example
//!
//! ```ignore
//! use narraloom_text::BitmapFont;
//!
//! let font = BitmapFont::load("assets/fonts/default.fnt")?;
//! let atlas = font.atlas_path("assets/fonts/default.fnt")?;
//! // Hand `atlas` to the texture loader.
//! ```

use std::path::{Path, PathBuf};

use narraloom_assets::{AssetError, AssetLoader, AssetResult, AssetSource, FileReader, LoadContext};

use crate::bmfont::{self, ParseMode};
use crate::error::{FontError, FontResult};
use crate::font::BitmapFont;

impl BitmapFont {
    /// Read and parse a `.fnt` descriptor leniently.
    ///
    /// Fails with [`FontError::NotFound`] if the file does not exist.
    pub fn load(path: impl AsRef<Path>) -> FontResult<Self> {
        Self::load_with(path, ParseMode::Lenient)
    }

    /// Read and parse a `.fnt` descriptor.
    pub fn load_with(path: impl AsRef<Path>, mode: ParseMode) -> FontResult<Self> {
        let path = path.as_ref();
        let bytes = FileReader::default().read_bytes_sync(path)?;
        let font = bmfont::parse_bytes(&bytes, mode)?;
        tracing::debug!("Loaded bitmap font '{}'", path.display());
        Ok(font)
    }

    /// Location of the first atlas page, relative to the descriptor.
    ///
    /// Fails with [`FontError::NotFound`] when the descriptor declares no
    /// page or the image file is missing.
    pub fn atlas_path(&self, descriptor: impl AsRef<Path>) -> FontResult<PathBuf> {
        let descriptor = descriptor.as_ref();
        let file = self.page(0).filter(|file| !file.is_empty()).ok_or_else(|| {
            tracing::warn!("'{}' declares no atlas page", descriptor.display());
            FontError::NotFound(descriptor.with_extension("png"))
        })?;

        let reader = FileReader::new(descriptor.parent().unwrap_or_else(|| Path::new("")));
        let path = reader.resolve_path(Path::new(file));
        if !reader.exists_sync(Path::new(file)) {
            return Err(FontError::NotFound(path));
        }
        Ok(path)
    }
}

/// Asset loader for BMFont text descriptors (`.fnt`).
#[derive(Debug, Clone, Copy, Default)]
pub struct BitmapFontLoader {
    pub mode: ParseMode,
}

impl BitmapFontLoader {
    pub fn strict() -> Self {
        Self {
            mode: ParseMode::Strict,
        }
    }

    /// Load a descriptor from `source`.
    pub fn load_source(&self, source: &AssetSource) -> AssetResult<BitmapFont> {
        FileReader::default().load(self, source)
    }
}

impl AssetLoader for BitmapFontLoader {
    type Asset = BitmapFont;

    fn extensions(&self) -> &[&str] {
        &["fnt"]
    }

    fn load(&self, ctx: LoadContext<'_>) -> AssetResult<Self::Asset> {
        bmfont::parse_bytes(ctx.bytes, self.mode).map_err(|err| AssetError::LoaderError {
            path: ctx.source.display_path(),
            message: err.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DESCRIPTOR: &str = "common lineHeight=20 scaleW=64 scaleH=64\n\
                              page id=0 file=\"atlas.png\"\n\
                              char id=65 x=0 y=0 width=8 height=10 xadvance=10\n";

    #[test]
    fn test_loader_extensions() {
        let loader = BitmapFontLoader::default();
        assert!(loader.handles_extension("fnt"));
        assert!(!loader.handles_extension("png"));
    }

    #[test]
    fn test_loader_from_bytes() {
        let source = AssetSource::bytes("default.fnt", DESCRIPTOR.as_bytes().to_vec());
        let font = BitmapFontLoader::default().load_source(&source).unwrap();
        assert_eq!(font.glyph_count(), 1);
        assert_eq!(font.page(0), Some("atlas.png"));
    }

    #[test]
    fn test_loader_reports_format_errors() {
        let source = AssetSource::bytes("broken.fnt", b"common lineHeight=20\n".to_vec());
        let err = BitmapFontLoader::default().load_source(&source).unwrap_err();
        match err {
            AssetError::LoaderError { path, message } => {
                assert_eq!(path, "bytes:broken.fnt");
                assert!(message.contains("scaleW"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_atlas_path_without_page() {
        let font = bmfont::parse("common lineHeight=20 scaleW=64 scaleH=64\n").unwrap();
        assert!(matches!(
            font.atlas_path("fonts/default.fnt"),
            Err(FontError::NotFound(_))
        ));
    }

    #[test]
    fn test_atlas_path_resolves_page_zero_next_to_descriptor() {
        let temp_dir = tempfile::tempdir().unwrap();
        let descriptor = temp_dir.path().join("default.fnt");
        let text = "common lineHeight=20 scaleW=64 scaleH=64\n\
                    page id=4294967 file=\"far.png\"\n\
                    page id=0 file=\"atlas.png\"\n";
        let font = bmfont::parse(text).unwrap();

        let missing = font.atlas_path(&descriptor).unwrap_err();
        assert!(matches!(
            missing,
            FontError::NotFound(path) if path == temp_dir.path().join("atlas.png")
        ));

        std::fs::write(temp_dir.path().join("atlas.png"), [0u8; 4]).unwrap();
        assert_eq!(
            font.atlas_path(&descriptor).unwrap(),
            temp_dir.path().join("atlas.png")
        );
    }
}
