//! BMFont text descriptor (`.fnt`) parsing.
//!
//! Only the tags needed for layout are read:
//!
//! ```text
//! common lineHeight=72 base=57 scaleW=512 scaleH=512 pages=1
//! char id=65 x=1 y=1 width=40 height=54 xoffset=1 yoffset=10 xadvance=48 page=0 chnl=15
//! ```
//!
//! Everything else (`info`, `page`, `chars`, `kerning`, ...) is skipped.

use std::str::FromStr;

use crate::error::AssetError;

use super::{FontTable, Glyph};

/// Parses a BMFont text descriptor into a sorted [`FontTable`].
pub fn parse_bmfont(source: &str) -> Result<FontTable, AssetError> {
    let mut glyphs = Vec::new();
    let mut line_height: u16 = 0;
    let mut page_size: Option<(u32, u32)> = None;

    for (idx, raw) in source.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim();
        let Some((tag, rest)) = split_tag(line) else { continue };

        match tag {
            "common" => {
                let attrs = Attributes::parse(rest);
                line_height = attrs.get(line_no, "lineHeight")?;
                let size: (u32, u32) = (attrs.get(line_no, "scaleW")?, attrs.get(line_no, "scaleH")?);
                if size.0 == 0 || size.1 == 0 {
                    return Err(AssetError::Font {
                        line: line_no,
                        message: format!("page size {}x{} is empty", size.0, size.1),
                    });
                }
                page_size = Some(size);
            }
            "char" => {
                let attrs = Attributes::parse(rest);
                let id: u32 = attrs.get(line_no, "id")?;
                let ch = char::from_u32(id).ok_or_else(|| AssetError::Font {
                    line: line_no,
                    message: format!("invalid character id {id}"),
                })?;
                glyphs.push(Glyph::new(
                    ch,
                    attrs.get(line_no, "x")?,
                    attrs.get(line_no, "y")?,
                    attrs.get(line_no, "width")?,
                    attrs.get(line_no, "height")?,
                    attrs.get(line_no, "xoffset")?,
                    attrs.get(line_no, "yoffset")?,
                    attrs.get(line_no, "xadvance")?,
                ));
            }
            _ => {}
        }
    }

    if glyphs.is_empty() {
        return Err(AssetError::Font {
            line: 0,
            message: "descriptor contains no char entries".into(),
        });
    }

    let page_size = page_size.ok_or_else(|| AssetError::Font {
        line: 0,
        message: "descriptor has no `common` line".into(),
    })?;

    FontTable::from_glyphs(glyphs, line_height, page_size)
}

fn split_tag(line: &str) -> Option<(&str, &str)> {
    if line.is_empty() {
        return None;
    }
    match line.split_once(char::is_whitespace) {
        Some((tag, rest)) => Some((tag, rest)),
        None => Some((line, "")),
    }
}

/// `key=value` pairs of one descriptor line. Values may be double-quoted.
struct Attributes<'a> {
    pairs: Vec<(&'a str, &'a str)>,
}

impl<'a> Attributes<'a> {
    fn parse(mut rest: &'a str) -> Self {
        let mut pairs = Vec::new();

        loop {
            rest = rest.trim_start();
            let Some(eq) = rest.find('=') else { break };
            let key = rest[..eq].trim();
            rest = &rest[eq + 1..];

            let value;
            if let Some(quoted) = rest.strip_prefix('"') {
                let end = quoted.find('"').unwrap_or(quoted.len());
                value = &quoted[..end];
                rest = quoted.get(end + 1..).unwrap_or("");
            } else {
                let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
                value = &rest[..end];
                rest = &rest[end..];
            }

            pairs.push((key, value));
        }

        Self { pairs }
    }

    fn get<T: FromStr>(&self, line: usize, key: &str) -> Result<T, AssetError> {
        let raw = self
            .pairs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| *v)
            .ok_or_else(|| AssetError::Font {
                line,
                message: format!("missing attribute `{key}`"),
            })?;

        raw.parse().map_err(|_| AssetError::Font {
            line,
            message: format!("attribute `{key}` has invalid value {raw:?}"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"info face="Berlin Sans FB Demi" size=72 bold=1 italic=0 charset="" unicode=0
common lineHeight=72 base=57 scaleW=256 scaleH=128 pages=1 packed=0
page id=0 file="berlin_sans_demi_72_0.dds"
chars count=3
char id=95   x=40  y=0   width=30 height=6  xoffset=-1 yoffset=60 xadvance=28 page=0 chnl=15
char id=66   x=0   y=0   width=38 height=54 xoffset=2  yoffset=10 xadvance=40 page=0 chnl=15
char id=65   x=72  y=0   width=40 height=54 xoffset=0  yoffset=10 xadvance=41 page=0 chnl=15
kernings count=1
kerning first=65 second=66 amount=-2
"#;

    #[test]
    fn parses_common_and_chars() {
        let table = parse_bmfont(SAMPLE).unwrap();
        assert_eq!(table.line_height(), 72);
        assert_eq!(table.page_size(), (256, 128));
        assert_eq!(table.glyphs().len(), 3);

        let a = table.find_glyph('A');
        assert_eq!((a.x, a.y, a.width, a.height), (72, 0, 40, 54));
        assert_eq!(a.advance, 41);

        let underscore = table.find_glyph('_');
        assert_eq!(underscore.xoffset, -1);
    }

    #[test]
    fn output_is_sorted_even_if_input_is_not() {
        let table = parse_bmfont(SAMPLE).unwrap();
        let order: String = table.glyphs().iter().map(|g| g.ch).collect();
        assert_eq!(order, "AB_");
    }

    #[test]
    fn absent_char_uses_fallback() {
        let table = parse_bmfont(SAMPLE).unwrap();
        assert_eq!(table.find_glyph('Z').ch, '_');
    }

    #[test]
    fn bad_number_reports_line() {
        let src = "common lineHeight=72 scaleW=64 scaleH=64\nchar id=95 x=oops y=0 width=1 height=1 xoffset=0 yoffset=0 xadvance=1\n";
        let err = parse_bmfont(src).unwrap_err();
        assert_eq!(
            err,
            AssetError::Font {
                line: 2,
                message: "attribute `x` has invalid value \"oops\"".into()
            }
        );
    }

    #[test]
    fn missing_attribute_reports_line() {
        let src = "char id=95 x=0 y=0 width=1 height=1 xoffset=0 yoffset=0\n";
        let err = parse_bmfont(src).unwrap_err();
        assert!(matches!(err, AssetError::Font { line: 1, ref message } if message.contains("xadvance")));
    }

    #[test]
    fn negative_advance_is_rejected() {
        let src = "char id=95 x=0 y=0 width=1 height=1 xoffset=0 yoffset=0 xadvance=-3\n";
        assert!(parse_bmfont(src).is_err());
    }

    #[test]
    fn descriptor_without_fallback_is_rejected() {
        let src = "common lineHeight=8 scaleW=8 scaleH=8\nchar id=65 x=0 y=0 width=1 height=1 xoffset=0 yoffset=0 xadvance=3\n";
        let err = parse_bmfont(src).unwrap_err();
        assert!(err.to_string().contains("fallback"));
    }

    #[test]
    fn descriptor_without_common_is_rejected() {
        let src = "char id=95 x=100 y=200 width=8 height=2 xoffset=0 yoffset=0 xadvance=8\n";
        let err = parse_bmfont(src).unwrap_err();
        assert!(matches!(err, AssetError::Font { line: 0, ref message } if message.contains("common")));
    }

    #[test]
    fn zero_page_size_reports_common_line() {
        let src = "info face=\"x\"\ncommon lineHeight=8 scaleW=0 scaleH=64\nchar id=95 x=0 y=0 width=8 height=2 xoffset=0 yoffset=0 xadvance=8\n";
        let err = parse_bmfont(src).unwrap_err();
        assert!(matches!(err, AssetError::Font { line: 2, .. }));
    }

    #[test]
    fn empty_descriptor_is_rejected() {
        assert!(parse_bmfont("info face=\"x\"\n").is_err());
    }

    #[test]
    fn quoted_values_may_contain_spaces() {
        let attrs = Attributes::parse(r#"face="Berlin Sans FB Demi" size=72"#);
        assert_eq!(attrs.get::<u32>(1, "size").unwrap(), 72);
        assert_eq!(attrs.pairs[0], ("face", "Berlin Sans FB Demi"));
    }
}
