/// Metrics for one character of a bitmap font.
///
/// `x`/`y`/`width`/`height` locate the glyph bitmap in the atlas page, in
/// pixels. Offsets place the bitmap relative to the pen position (+Y down);
/// `advance` moves the pen to the next character.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Glyph {
    pub ch: char,
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
    pub xoffset: i16,
    pub yoffset: i16,
    pub advance: u16,
}

impl Glyph {
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        ch: char,
        x: u16,
        y: u16,
        width: u16,
        height: u16,
        xoffset: i16,
        yoffset: i16,
        advance: u16,
    ) -> Self {
        Self { ch, x, y, width, height, xoffset, yoffset, advance }
    }

    /// True when the glyph has a bitmap to draw (space has none).
    #[inline]
    pub fn is_visible(&self) -> bool {
        self.width > 0 && self.height > 0
    }
}
