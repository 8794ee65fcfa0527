//! Bitmap-font metrics.
//!
//! A font is a table of [`Glyph`]s sorted by character. Lookup is a binary
//! search; characters missing from the table resolve to the `_` glyph. The
//! engine ships a built-in table for its default atlas page and can load a
//! BMFont text descriptor instead.

mod bmfont;
mod builtin;
mod glyph;
mod table;

pub use bmfont::parse_bmfont;
pub use glyph::Glyph;
pub use table::{FontTable, FALLBACK_CHAR};
