//! Parser for BMFont text descriptors (`.fnt`).
//!
//! The format is line oriented: each line is a record whose first word names
//! its kind, followed by `key=value` pairs:
//!
//! ```text
//! info face="Pixel" size=16
//! common lineHeight=20 base=16 scaleW=256 scaleH=128 pages=1
//! page id=0 file="pixel_0.png"
//! char id=65 x=0 y=0 width=8 height=10 xoffset=1 yoffset=2 xadvance=10 page=0
//! ```
//!
//! Only `common`, `page` and `char` records are read; other kinds (`info`,
//! `chars`, `kernings`, ...) are skipped. Individual fields are lenient: a
//! missing or malformed integer reads as `0`. Only the font-wide fields
//! `lineHeight`, `scaleW` and `scaleH` are required.

use narraloom_core::alloc::HashMap;
use narraloom_core::profiling::profile_function;

use crate::error::{FontResult, FormatError};
use crate::font::{BitmapFont, Glyph};

/// How strictly glyph records are checked against the atlas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    /// Trust the descriptor/atlas pairing; glyph rectangles are not checked.
    #[default]
    Lenient,
    /// Reject glyphs with negative sizes or rectangles outside the atlas.
    Strict,
}

/// Parse descriptor text with [`ParseMode::Lenient`].
pub fn parse(text: &str) -> FontResult<BitmapFont> {
    parse_with(text, ParseMode::Lenient)
}

/// Parse descriptor bytes, which must be UTF-8.
pub fn parse_bytes(bytes: &[u8], mode: ParseMode) -> FontResult<BitmapFont> {
    let text = std::str::from_utf8(bytes).map_err(|_| FormatError::NotUtf8)?;
    parse_with(text, mode)
}

/// Parse descriptor text.
pub fn parse_with(text: &str, mode: ParseMode) -> FontResult<BitmapFont> {
    profile_function!();

    let mut font = BitmapFont::default();

    for line in text.lines().map(str::trim).filter(|line| !line.is_empty()) {
        let mut tokens = line.split_whitespace();
        let Some(kind) = tokens.next() else {
            continue;
        };

        match kind {
            "common" => {
                let fields = Fields::collect(tokens);
                font.line_height = fields.int("lineheight");
                font.atlas_width = fields.int("scalew");
                font.atlas_height = fields.int("scaleh");
            }
            "char" => {
                let fields = Fields::collect(tokens);
                let glyph = Glyph {
                    id: fields.int("id") as u32,
                    x: fields.int("x"),
                    y: fields.int("y"),
                    width: fields.int("width"),
                    height: fields.int("height"),
                    x_offset: fields.int("xoffset"),
                    y_offset: fields.int("yoffset"),
                    x_advance: fields.int("xadvance"),
                };
                if font.glyphs.insert(glyph.id, glyph).is_some() {
                    tracing::trace!("Glyph {} redefined, keeping the later record", glyph.id);
                }
            }
            "page" => {
                let fields = Fields::collect(tokens);
                match u32::try_from(fields.int("id")) {
                    Ok(id) => {
                        font.pages.insert(id, fields.str("file").to_string());
                    }
                    Err(_) => tracing::trace!("Skipping page record with negative id"),
                }
            }
            other => {
                tracing::trace!("Skipping '{}' record", other);
            }
        }
    }

    if font.atlas_width <= 0 || font.atlas_height <= 0 {
        return Err(FormatError::MissingAtlasSize {
            width: font.atlas_width,
            height: font.atlas_height,
        }
        .into());
    }
    if font.line_height <= 0 {
        return Err(FormatError::MissingLineHeight(font.line_height).into());
    }
    if mode == ParseMode::Strict {
        font.check_atlas_bounds()?;
    }

    tracing::debug!(
        "Parsed bitmap font: {} glyphs, line height {}, atlas {}x{}",
        font.glyphs.len(),
        font.line_height,
        font.atlas_width,
        font.atlas_height
    );

    Ok(font)
}

/// The `key=value` pairs of one record. Keys are stored lowercase.
struct Fields<'a> {
    values: HashMap<String, &'a str>,
}

impl<'a> Fields<'a> {
    fn collect(tokens: impl Iterator<Item = &'a str>) -> Self {
        let mut values = HashMap::new();
        for token in tokens {
            let Some((key, value)) = token.split_once('=') else {
                continue;
            };
            if key.is_empty() {
                continue;
            }
            values.insert(key.to_ascii_lowercase(), unquote(value.trim()));
        }
        Self { values }
    }

    fn str(&self, key: &str) -> &'a str {
        self.values.get(key).copied().unwrap_or("")
    }

    /// Base-10 integer value of `key`, `0` when missing or malformed.
    fn int(&self, key: &str) -> i32 {
        self.str(key).parse().unwrap_or(0)
    }
}

/// Strip one layer of surrounding double quotes.
fn unquote(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|inner| inner.strip_suffix('"'))
        .unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FontError;

    const DESCRIPTOR: &str = "\
info face=\"Pixel\" size=16 bold=0
common lineHeight=20 base=16 scaleW=256 scaleH=128 pages=1 packed=0
page id=0 file=\"pixel_0.png\"
chars count=3
char id=32 x=0 y=0 width=0 height=0 xoffset=0 yoffset=0 xadvance=4 page=0
char id=65 x=8 y=0 width=8 height=10 xoffset=1 yoffset=2 xadvance=10 page=0
char id=66 x=16 y=0 width=9 height=10 xoffset=0 yoffset=2 xadvance=12 page=0
";

    #[test]
    fn test_parse_common_and_chars() {
        let font = parse(DESCRIPTOR).unwrap();

        assert_eq!(font.line_height(), 20);
        assert_eq!(font.atlas_width(), 256);
        assert_eq!(font.atlas_height(), 128);
        assert_eq!(font.glyph_count(), 3);
        assert_eq!(font.page(0), Some("pixel_0.png"));
        assert_eq!(font.page_count(), 1);

        let a = font.glyph('A').unwrap();
        assert_eq!(
            *a,
            Glyph {
                id: 65,
                x: 8,
                y: 0,
                width: 8,
                height: 10,
                x_offset: 1,
                y_offset: 2,
                x_advance: 10,
            }
        );
    }

    #[test]
    fn test_parse_is_idempotent() {
        assert_eq!(parse(DESCRIPTOR).unwrap(), parse(DESCRIPTOR).unwrap());
    }

    #[test]
    fn test_duplicate_char_last_wins() {
        let text = "common lineHeight=20 scaleW=64 scaleH=64\n\
                    char id=65 x=0 y=0 width=8 height=8 xadvance=9\n\
                    char id=65 x=8 y=0 width=8 height=8 xadvance=11\n";
        let font = parse(text).unwrap();

        assert_eq!(font.glyph_count(), 1);
        let a = font.glyph('A').unwrap();
        assert_eq!(a.x, 8);
        assert_eq!(a.x_advance, 11);
    }

    #[test]
    fn test_missing_scale_w_is_format_error() {
        let err = parse("common lineHeight=20 scaleH=128\n").unwrap_err();
        assert!(matches!(
            err,
            FontError::Format(FormatError::MissingAtlasSize { width: 0, height: 128 })
        ));
    }

    #[test]
    fn test_missing_line_height_is_format_error() {
        let err = parse("common scaleW=64 scaleH=64\n").unwrap_err();
        assert!(matches!(
            err,
            FontError::Format(FormatError::MissingLineHeight(0))
        ));

        let err = parse("common lineHeight=-3 scaleW=64 scaleH=64\n").unwrap_err();
        assert!(matches!(
            err,
            FontError::Format(FormatError::MissingLineHeight(-3))
        ));
    }

    #[test]
    fn test_empty_descriptor_is_format_error() {
        assert!(matches!(
            parse("").unwrap_err(),
            FontError::Format(FormatError::MissingAtlasSize { .. })
        ));
    }

    #[test]
    fn test_missing_xadvance_defaults_to_zero() {
        let text = "common lineHeight=20 scaleW=64 scaleH=64\n\
                    char id=65 x=1 y=2 width=3 height=4 xoffset=5 yoffset=6\n";
        let font = parse(text).unwrap();
        let a = font.glyph('A').unwrap();
        assert_eq!(a.x_advance, 0);
        assert_eq!(a.y_offset, 6);
    }

    #[test]
    fn test_malformed_fields_default_to_zero() {
        let text = "common lineHeight=20 scaleW=64 scaleH=64\n\
                    char id=65 x=abc y=2.5 width= height=4 xadvance=\"7\" stray =oops\n";
        let font = parse(text).unwrap();
        let a = font.glyph('A').unwrap();
        assert_eq!(a.x, 0);
        assert_eq!(a.y, 0);
        assert_eq!(a.width, 0);
        assert_eq!(a.height, 4);
        assert_eq!(a.x_advance, 7);
    }

    #[test]
    fn test_keys_are_case_insensitive_and_signed() {
        let text = "common LINEHEIGHT=18 ScaleW=32 scaleh=+32\n\
                    char ID=97 XOffset=-2 xadvance=6\n";
        let font = parse(text).unwrap();
        assert_eq!(font.line_height(), 18);
        assert_eq!(font.atlas_height(), 32);
        assert_eq!(font.glyph('a').unwrap().x_offset, -2);
    }

    #[test]
    fn test_unknown_records_and_blank_lines_are_ignored() {
        let text = "\n   \ninfo face=x\nkernings count=1\nkerning first=65 second=66 amount=-1\n\
                    \tcommon lineHeight=20 scaleW=64 scaleH=64   \n";
        let font = parse(text).unwrap();
        assert_eq!(font.glyph_count(), 0);
        assert_eq!(font.line_height(), 20);
    }

    #[test]
    fn test_unquote_strips_one_layer() {
        assert_eq!(unquote("\"a.png\""), "a.png");
        assert_eq!(unquote("\"\"a\"\""), "\"a\"");
        assert_eq!(unquote("plain"), "plain");
        assert_eq!(unquote("\"abc"), "\"abc");
        assert_eq!(unquote("abc\""), "abc\"");
        assert_eq!(unquote("\""), "\"");
    }

    #[test]
    fn test_pages_are_keyed_by_id() {
        let text = "common lineHeight=20 scaleW=64 scaleH=64\n\
                    page id=2147483647 file=\"far.png\"\n\
                    page id=-1 file=\"negative.png\"\n\
                    page id=0 file=\"atlas.png\"\n";
        let font = parse(text).unwrap();

        assert_eq!(font.page_count(), 2);
        assert_eq!(font.page(0), Some("atlas.png"));
        assert_eq!(font.page(i32::MAX as u32), Some("far.png"));
        assert_eq!(font.page(1), None);
    }

    #[test]
    fn test_strict_mode_rejects_overflowing_glyph() {
        let text = "common lineHeight=20 scaleW=64 scaleH=64\n\
                    char id=65 x=2147483647 y=0 width=1 height=1 xadvance=10\n";
        let err = parse_with(text, ParseMode::Strict).unwrap_err();
        assert!(matches!(
            err,
            FontError::Format(FormatError::GlyphOutOfBounds { id: 65, .. })
        ));
    }

    #[test]
    fn test_strict_mode_rejects_out_of_bounds_glyph() {
        let text = "common lineHeight=20 scaleW=16 scaleH=16\n\
                    char id=65 x=0 y=0 width=8 height=8 xadvance=9\n\
                    char id=66 x=12 y=0 width=8 height=8 xadvance=9\n";

        assert!(parse(text).is_ok());

        let err = parse_with(text, ParseMode::Strict).unwrap_err();
        assert!(matches!(
            err,
            FontError::Format(FormatError::GlyphOutOfBounds { id: 66, .. })
        ));
    }

    #[test]
    fn test_parse_bytes_rejects_invalid_utf8() {
        let err = parse_bytes(&[0xff, 0xfe, 0x00], ParseMode::Lenient).unwrap_err();
        assert!(matches!(err, FontError::Format(FormatError::NotUtf8)));
    }
}
