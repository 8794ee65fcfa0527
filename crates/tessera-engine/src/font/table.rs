use std::borrow::Cow;

use crate::error::AssetError;

use super::builtin;
use super::Glyph;

/// Character substituted for anything the table does not contain.
pub const FALLBACK_CHAR: char = '_';

/// Immutable glyph table sorted ascending by character.
///
/// Invariant: `glyphs` is strictly sorted by `ch` and contains
/// [`FALLBACK_CHAR`] at index `fallback`.
#[derive(Debug, Clone)]
pub struct FontTable {
    glyphs: Cow<'static, [Glyph]>,
    fallback: usize,
    line_height: u16,
    page_size: (u32, u32),
}

impl FontTable {
    /// The table for the engine's default atlas page.
    pub fn builtin() -> Self {
        let glyphs: &'static [Glyph] = &builtin::GLYPHS;
        let fallback = glyphs
            .binary_search_by_key(&FALLBACK_CHAR, |g| g.ch)
            .unwrap_or(0);

        Self {
            glyphs: Cow::Borrowed(glyphs),
            fallback,
            line_height: builtin::LINE_HEIGHT,
            page_size: builtin::PAGE_SIZE,
        }
    }

    /// Builds a table from glyphs in any order.
    ///
    /// Fails if a character appears twice or the fallback glyph is missing.
    pub fn from_glyphs(
        mut glyphs: Vec<Glyph>,
        line_height: u16,
        page_size: (u32, u32),
    ) -> Result<Self, AssetError> {
        glyphs.sort_by_key(|g| g.ch);

        if let Some(pair) = glyphs.windows(2).find(|w| w[0].ch == w[1].ch) {
            return Err(AssetError::Font {
                line: 0,
                message: format!("duplicate glyph for {:?}", pair[0].ch),
            });
        }

        let fallback = glyphs
            .binary_search_by_key(&FALLBACK_CHAR, |g| g.ch)
            .map_err(|_| AssetError::Font {
                line: 0,
                message: format!("missing fallback glyph {FALLBACK_CHAR:?}"),
            })?;

        Ok(Self {
            glyphs: Cow::Owned(glyphs),
            fallback,
            line_height,
            page_size,
        })
    }

    /// Parses a BMFont text descriptor. See [`parse_bmfont`](super::parse_bmfont).
    pub fn from_bmfont(source: &str) -> Result<Self, AssetError> {
        super::parse_bmfont(source)
    }

    /// Index of the glyph used to draw `c`.
    pub fn glyph_index(&self, c: char) -> usize {
        self.glyphs
            .binary_search_by_key(&c, |g| g.ch)
            .unwrap_or(self.fallback)
    }

    /// Returns the metrics for `c`, or the fallback glyph if `c` is absent.
    pub fn find_glyph(&self, c: char) -> &Glyph {
        &self.glyphs[self.glyph_index(c)]
    }

    pub fn contains(&self, c: char) -> bool {
        self.glyphs.binary_search_by_key(&c, |g| g.ch).is_ok()
    }

    /// Sum of `advance * scale` over the string.
    pub fn string_width(&self, text: &str, scale: f32) -> f32 {
        let advance: u64 = text
            .chars()
            .map(|c| u64::from(self.find_glyph(c).advance))
            .sum();
        advance as f32 * scale
    }

    pub fn fallback(&self) -> &Glyph {
        &self.glyphs[self.fallback]
    }

    pub fn glyphs(&self) -> &[Glyph] {
        &self.glyphs
    }

    pub fn line_height(&self) -> u16 {
        self.line_height
    }

    /// Atlas page size the glyph rectangles refer to.
    pub fn page_size(&self) -> (u32, u32) {
        self.page_size
    }
}

impl Default for FontTable {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_is_strictly_sorted() {
        let table = FontTable::builtin();
        assert!(table.glyphs().windows(2).all(|w| w[0].ch < w[1].ch));
    }

    #[test]
    fn builtin_covers_printable_ascii() {
        let table = FontTable::builtin();
        for c in ' '..='~' {
            assert!(table.contains(c), "missing {c:?}");
        }
        assert_eq!(table.glyphs().len(), 95);
    }

    #[test]
    fn builtin_fallback_is_underscore() {
        assert_eq!(FontTable::builtin().fallback().ch, FALLBACK_CHAR);
    }

    #[test]
    fn builtin_glyphs_fit_the_page() {
        let table = FontTable::builtin();
        let (pw, ph) = table.page_size();
        for g in table.glyphs() {
            assert!(u32::from(g.x) + u32::from(g.width) <= pw, "{:?} overflows x", g.ch);
            assert!(u32::from(g.y) + u32::from(g.height) <= ph, "{:?} overflows y", g.ch);
        }
    }

    // ── find_glyph ────────────────────────────────────────────────────────

    #[test]
    fn find_glyph_is_exact_for_every_present_char() {
        let table = FontTable::builtin();
        for g in table.glyphs() {
            assert_eq!(table.find_glyph(g.ch), g);
        }
    }

    #[test]
    fn find_glyph_falls_back_for_absent_chars() {
        let table = FontTable::builtin();
        let fallback = *table.fallback();
        for c in ['\0', '\n', '\u{7f}', 'é', 'Ω', '漢', '\u{1F600}'] {
            assert!(!table.contains(c));
            assert_eq!(*table.find_glyph(c), fallback, "{c:?}");
        }
    }

    #[test]
    fn below_and_above_range_fall_back() {
        // Edge of the binary search: before the first and after the last entry.
        let table = FontTable::builtin();
        assert_eq!(table.find_glyph('\u{1f}').ch, FALLBACK_CHAR);
        assert_eq!(table.find_glyph('\u{80}').ch, FALLBACK_CHAR);
    }

    // ── string_width ──────────────────────────────────────────────────────

    #[test]
    fn empty_string_has_zero_width() {
        assert_eq!(FontTable::builtin().string_width("", 0.5), 0.0);
    }

    #[test]
    fn width_is_scaled_sum_of_advances() {
        let table = FontTable::builtin();
        let expected: u32 = "Hi!".chars().map(|c| u32::from(table.find_glyph(c).advance)).sum();
        assert_eq!(table.string_width("Hi!", 0.5), expected as f32 * 0.5);
    }

    #[test]
    fn width_never_decreases_when_appending() {
        let table = FontTable::builtin();
        let sample = "Score: 1200 _ é {grid} ~ \u{1F600}";
        let mut s = String::new();
        let mut last = 0.0;
        for c in sample.chars() {
            s.push(c);
            let w = table.string_width(&s, 0.5);
            assert!(w >= last, "width shrank after {c:?}");
            last = w;
        }
    }

    #[test]
    fn unknown_chars_measure_as_fallback() {
        let table = FontTable::builtin();
        assert_eq!(table.string_width("é", 1.0), table.string_width("_", 1.0));
    }

    #[test]
    fn huge_advances_do_not_overflow() {
        let glyphs = vec![Glyph::new('_', 0, 0, 4, 1, 0, 0, u16::MAX)];
        let table = FontTable::from_glyphs(glyphs, 8, (64, 64)).unwrap();

        let short = table.string_width(&"_".repeat(65_537), 1.0);
        let long = table.string_width(&"_".repeat(65_538), 1.0);
        assert!(long >= short);
        let expected = 65_538.0 * f64::from(u16::MAX);
        assert!((f64::from(long) - expected).abs() / expected < 1e-6);
    }

    // ── from_glyphs ───────────────────────────────────────────────────────

    #[test]
    fn from_glyphs_sorts_input() {
        let glyphs = vec![
            Glyph::new('b', 0, 0, 4, 4, 0, 0, 5),
            Glyph::new('_', 5, 0, 4, 1, 0, 3, 5),
            Glyph::new('a', 10, 0, 4, 4, 0, 0, 6),
        ];
        let table = FontTable::from_glyphs(glyphs, 8, (64, 64)).unwrap();
        let order: String = table.glyphs().iter().map(|g| g.ch).collect();
        assert_eq!(order, "_ab");
        assert_eq!(table.find_glyph('a').advance, 6);
        assert_eq!(table.find_glyph('z').ch, '_');
    }

    #[test]
    fn from_glyphs_requires_fallback() {
        let glyphs = vec![Glyph::new('a', 0, 0, 4, 4, 0, 0, 6)];
        let err = FontTable::from_glyphs(glyphs, 8, (64, 64)).unwrap_err();
        assert!(matches!(err, AssetError::Font { line: 0, .. }));
    }

    #[test]
    fn from_glyphs_rejects_duplicates() {
        let glyphs = vec![
            Glyph::new('_', 0, 0, 4, 1, 0, 3, 5),
            Glyph::new('a', 0, 0, 4, 4, 0, 0, 6),
            Glyph::new('a', 8, 0, 4, 4, 0, 0, 6),
        ];
        assert!(FontTable::from_glyphs(glyphs, 8, (64, 64)).is_err());
    }
}
