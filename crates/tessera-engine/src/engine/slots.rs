use crate::font::FontTable;
use crate::sprite::UvRect;

/// Frames in the diamond strip, left to right in [`Sprite`] order from `Blue`.
pub const DIAMOND_FRAMES: usize = 8;

/// Texture slots. Each image owns one texture and one sprite batch.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Image {
    Background,
    Diamonds,
    Text,
}

impl Image {
    pub const ALL: [Image; 3] = [Image::Background, Image::Diamonds, Image::Text];
    pub const COUNT: usize = Self::ALL.len();

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Image::Background => "background",
            Image::Diamonds => "diamonds",
            Image::Text => "text",
        }
    }
}

/// Sprite slots. Each sprite has one template and one instance.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Sprite {
    Cell,
    Char,
    Blue,
    Green,
    Purple,
    Red,
    Yellow,
    Cyan,
    Black,
    White,
}

impl Sprite {
    pub const ALL: [Sprite; 10] = [
        Sprite::Cell,
        Sprite::Char,
        Sprite::Blue,
        Sprite::Green,
        Sprite::Purple,
        Sprite::Red,
        Sprite::Yellow,
        Sprite::Cyan,
        Sprite::Black,
        Sprite::White,
    ];
    pub const COUNT: usize = Self::ALL.len();

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// The image whose batch draws this sprite.
    pub fn image(self) -> Image {
        match self {
            Sprite::Cell => Image::Background,
            Sprite::Char => Image::Text,
            _ => Image::Diamonds,
        }
    }

    /// Region of [`image`](Self::image) the sprite's template covers.
    ///
    /// `Char` is the fallback glyph of `font`.
    pub fn uv(self, font: &FontTable) -> UvRect {
        match self {
            Sprite::Cell => UvRect::full(),
            Sprite::Char => {
                let g = font.fallback();
                UvRect::from_pixels(
                    u32::from(g.x),
                    u32::from(g.y),
                    u32::from(g.width),
                    u32::from(g.height),
                    font.page_size(),
                )
            }
            diamond => UvRect::strip_frame(diamond.index() - Sprite::Blue.index(), DIAMOND_FRAMES),
        }
    }
}
