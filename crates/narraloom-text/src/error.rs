use std::path::PathBuf;

/// The class of descriptor problem that made a font unusable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// `common scaleW`/`scaleH` missing or non-positive.
    MissingAtlasSize { width: i32, height: i32 },

    /// `common lineHeight` missing or non-positive.
    MissingLineHeight(i32),

    /// The descriptor bytes are not valid UTF-8 text.
    NotUtf8,

    /// A glyph rectangle leaves the atlas (strict parsing only).
    GlyphOutOfBounds {
        id: u32,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        atlas_width: i32,
        atlas_height: i32,
    },
}

impl std::fmt::Display for FormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormatError::MissingAtlasSize { width, height } => write!(
                f,
                "common scaleW/scaleH missing or invalid ({}x{}); export as BMFont text .fnt",
                width, height
            ),
            FormatError::MissingLineHeight(value) => write!(
                f,
                "common lineHeight missing or invalid ({}); export as BMFont text .fnt",
                value
            ),
            FormatError::NotUtf8 => write!(f, "descriptor is not UTF-8 text"),
            FormatError::GlyphOutOfBounds {
                id,
                x,
                y,
                width,
                height,
                atlas_width,
                atlas_height,
            } => write!(
                f,
                "glyph {} at ({}, {}) size {}x{} lies outside the {}x{} atlas",
                id, x, y, width, height, atlas_width, atlas_height
            ),
        }
    }
}

/// Errors that can occur while loading a bitmap font.
#[derive(Debug, Clone)]
pub enum FontError {
    /// Descriptor or atlas file not found.
    NotFound(PathBuf),

    /// Descriptor present but unusable.
    Format(FormatError),

    /// Generic IO error.
    Io(String),
}

impl std::fmt::Display for FontError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FontError::NotFound(path) => write!(f, "Font file not found: {}", path.display()),
            FontError::Format(err) => write!(f, "Invalid font descriptor: {}", err),
            FontError::Io(msg) => write!(f, "IO error: {}", msg),
        }
    }
}

impl std::error::Error for FontError {}

impl From<FormatError> for FontError {
    fn from(err: FormatError) -> Self {
        FontError::Format(err)
    }
}

impl From<std::io::Error> for FontError {
    fn from(err: std::io::Error) -> Self {
        FontError::Io(err.to_string())
    }
}

#[cfg(feature = "asset")]
impl From<narraloom_assets::AssetError> for FontError {
    fn from(err: narraloom_assets::AssetError) -> Self {
        use narraloom_assets::AssetError;

        match err {
            AssetError::NotFound { path } => FontError::NotFound(PathBuf::from(path)),
            other => FontError::Io(other.to_string()),
        }
    }
}

/// Result type for font operations.
pub type FontResult<T> = Result<T, FontError>;
