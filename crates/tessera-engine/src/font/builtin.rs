use super::Glyph;

/// Atlas page the built-in metrics describe, in pixels.
pub(super) const PAGE_SIZE: (u32, u32) = (512, 512);

pub(super) const LINE_HEIGHT: u16 = 72;

/// Glyph metrics for the default 72 px atlas page (`berlin_sans_demi_72_0`),
/// printable ASCII only.
///
/// Must stay sorted by character: lookups binary-search this table.
pub(super) static GLYPHS: [Glyph; 95] = [
    Glyph::new(' ', 0, 0, 0, 0, 0, 0, 20),
    Glyph::new('!', 1, 1, 17, 54, 1, 10, 20),
    Glyph::new('"', 19, 1, 23, 18, 1, 10, 26),
    Glyph::new('#', 43, 1, 37, 54, 1, 10, 40),
    Glyph::new('$', 81, 1, 37, 54, 1, 10, 40),
    Glyph::new('%', 119, 1, 61, 54, 1, 10, 64),
    Glyph::new('&', 181, 1, 45, 54, 1, 10, 48),
    Glyph::new('\'', 227, 1, 11, 18, 1, 10, 14),
    Glyph::new('(', 239, 1, 21, 66, 1, 8, 24),
    Glyph::new(')', 261, 1, 21, 66, 1, 8, 24),
    Glyph::new('*', 283, 1, 25, 22, 1, 10, 28),
    Glyph::new('+', 309, 1, 39, 36, 1, 24, 42),
    Glyph::new(',', 349, 1, 17, 16, 1, 56, 20),
    Glyph::new('-', 367, 1, 21, 6, 1, 40, 24),
    Glyph::new('.', 389, 1, 17, 8, 1, 56, 20),
    Glyph::new('/', 407, 1, 17, 58, 1, 8, 20),
    Glyph::new('0', 425, 1, 37, 54, 1, 10, 40),
    Glyph::new('1', 463, 1, 37, 54, 1, 10, 40),
    Glyph::new('2', 1, 68, 37, 54, 1, 10, 40),
    Glyph::new('3', 39, 68, 37, 54, 1, 10, 40),
    Glyph::new('4', 77, 68, 37, 54, 1, 10, 40),
    Glyph::new('5', 115, 68, 37, 54, 1, 10, 40),
    Glyph::new('6', 153, 68, 37, 54, 1, 10, 40),
    Glyph::new('7', 191, 68, 37, 54, 1, 10, 40),
    Glyph::new('8', 229, 68, 37, 54, 1, 10, 40),
    Glyph::new('9', 267, 68, 37, 54, 1, 10, 40),
    Glyph::new(':', 305, 68, 17, 34, 1, 30, 20),
    Glyph::new(';', 323, 68, 17, 42, 1, 30, 20),
    Glyph::new('<', 341, 68, 39, 36, 1, 24, 42),
    Glyph::new('=', 381, 68, 39, 18, 1, 32, 42),
    Glyph::new('>', 421, 68, 39, 36, 1, 24, 42),
    Glyph::new('?', 461, 68, 37, 54, 1, 10, 40),
    Glyph::new('@', 1, 123, 70, 54, 1, 10, 73),
    Glyph::new('A', 72, 123, 45, 54, 1, 10, 48),
    Glyph::new('B', 118, 123, 45, 54, 1, 10, 48),
    Glyph::new('C', 164, 123, 49, 54, 1, 10, 52),
    Glyph::new('D', 214, 123, 49, 54, 1, 10, 52),
    Glyph::new('E', 264, 123, 45, 54, 1, 10, 48),
    Glyph::new('F', 310, 123, 41, 54, 1, 10, 44),
    Glyph::new('G', 352, 123, 53, 54, 1, 10, 56),
    Glyph::new('H', 406, 123, 49, 54, 1, 10, 52),
    Glyph::new('I', 456, 123, 17, 54, 1, 10, 20),
    Glyph::new('J', 474, 123, 33, 54, 1, 10, 36),
    Glyph::new('K', 1, 178, 45, 54, 1, 10, 48),
    Glyph::new('L', 47, 178, 37, 54, 1, 10, 40),
    Glyph::new('M', 85, 178, 57, 54, 1, 10, 60),
    Glyph::new('N', 143, 178, 49, 54, 1, 10, 52),
    Glyph::new('O', 193, 178, 53, 54, 1, 10, 56),
    Glyph::new('P', 247, 178, 45, 54, 1, 10, 48),
    Glyph::new('Q', 293, 178, 53, 58, 1, 10, 56),
    Glyph::new('R', 347, 178, 49, 54, 1, 10, 52),
    Glyph::new('S', 397, 178, 45, 54, 1, 10, 48),
    Glyph::new('T', 443, 178, 41, 54, 1, 10, 44),
    Glyph::new('U', 1, 237, 49, 54, 1, 10, 52),
    Glyph::new('V', 51, 237, 45, 54, 1, 10, 48),
    Glyph::new('W', 97, 237, 65, 54, 1, 10, 68),
    Glyph::new('X', 163, 237, 45, 54, 1, 10, 48),
    Glyph::new('Y', 209, 237, 45, 54, 1, 10, 48),
    Glyph::new('Z', 255, 237, 41, 54, 1, 10, 44),
    Glyph::new('[', 297, 237, 17, 66, 1, 8, 20),
    Glyph::new('\\', 315, 237, 17, 58, 1, 8, 20),
    Glyph::new(']', 333, 237, 17, 66, 1, 8, 20),
    Glyph::new('^', 351, 237, 31, 22, 1, 10, 34),
    Glyph::new('_', 383, 237, 37, 6, 1, 64, 40),
    Glyph::new('`', 421, 237, 21, 10, 1, 10, 24),
    Glyph::new('a', 443, 237, 37, 40, 1, 24, 40),
    Glyph::new('b', 1, 304, 37, 54, 1, 10, 40),
    Glyph::new('c', 39, 304, 33, 40, 1, 24, 36),
    Glyph::new('d', 73, 304, 37, 54, 1, 10, 40),
    Glyph::new('e', 111, 304, 37, 40, 1, 24, 40),
    Glyph::new('f', 149, 304, 17, 54, 1, 10, 20),
    Glyph::new('g', 167, 304, 37, 52, 1, 24, 40),
    Glyph::new('h', 205, 304, 37, 54, 1, 10, 40),
    Glyph::new('i', 243, 304, 13, 54, 1, 10, 16),
    Glyph::new('j', 257, 304, 16, 64, -2, 10, 16),
    Glyph::new('k', 274, 304, 33, 54, 1, 10, 36),
    Glyph::new('l', 308, 304, 13, 54, 1, 10, 16),
    Glyph::new('m', 322, 304, 57, 40, 1, 24, 60),
    Glyph::new('n', 380, 304, 37, 40, 1, 24, 40),
    Glyph::new('o', 418, 304, 37, 40, 1, 24, 40),
    Glyph::new('p', 456, 304, 37, 52, 1, 24, 40),
    Glyph::new('q', 1, 369, 37, 52, 1, 24, 40),
    Glyph::new('r', 39, 369, 21, 40, 1, 24, 24),
    Glyph::new('s', 61, 369, 33, 40, 1, 24, 36),
    Glyph::new('t', 95, 369, 17, 54, 1, 10, 20),
    Glyph::new('u', 113, 369, 37, 40, 1, 24, 40),
    Glyph::new('v', 151, 369, 33, 40, 1, 24, 36),
    Glyph::new('w', 185, 369, 49, 40, 1, 24, 52),
    Glyph::new('x', 235, 369, 33, 40, 1, 24, 36),
    Glyph::new('y', 269, 369, 33, 52, 1, 24, 36),
    Glyph::new('z', 303, 369, 33, 40, 1, 24, 36),
    Glyph::new('{', 337, 369, 21, 66, 1, 8, 24),
    Glyph::new('|', 359, 369, 16, 70, 1, 6, 19),
    Glyph::new('}', 376, 369, 21, 66, 1, 8, 24),
    Glyph::new('~', 398, 369, 39, 10, 1, 34, 42),
];
