use crate::coords::{Transform2, Vec2};
use crate::font::FontTable;
use crate::sprite::{SpriteHandle, UvRect};

/// Scale applied to font metrics when drawing and measuring text.
pub const TEXT_SCALE: f32 = 0.5;

/// Result of laying a string out over the text instance pool.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) struct TextLayout {
    /// Pool instances made visible, starting at index 0.
    pub used: usize,
    /// Visible glyphs that did not fit the pool.
    pub dropped: usize,
}

/// Places one pool instance per visible glyph of `text` under `transform`.
///
/// The pen starts at the transform's origin and moves right by each glyph's
/// advance; glyph bitmaps sit at their x/y offsets from the pen.
pub(crate) fn layout_text(font: &FontTable, text: &str, transform: &Transform2, pool: &[SpriteHandle]) -> TextLayout {
    let page = font.page_size();
    let mut pen = 0.0f32;
    let mut used = 0;
    let mut dropped = 0;

    for c in text.chars() {
        let g = font.find_glyph(c);

        if g.is_visible() {
            match pool.get(used) {
                Some(handle) => {
                    let local = transform.translated(
                        (pen + f32::from(g.xoffset)) * TEXT_SCALE,
                        f32::from(g.yoffset) * TEXT_SCALE,
                    );
                    let size = Vec2::new(f32::from(g.width), f32::from(g.height)) * TEXT_SCALE;

                    let mut inst = handle.borrow_mut();
                    inst.apply_transform(&local, size);
                    inst.uv = UvRect::from_pixels(
                        u32::from(g.x),
                        u32::from(g.y),
                        u32::from(g.width),
                        u32::from(g.height),
                        page,
                    );
                    inst.visible = true;
                    used += 1;
                }
                None => dropped += 1,
            }
        }

        pen += f32::from(g.advance);
    }

    TextLayout { used, dropped }
}

/// Hides the instances a layout made visible.
pub(crate) fn hide(pool: &[SpriteHandle], layout: TextLayout) {
    for handle in &pool[..layout.used.min(pool.len())] {
        handle.borrow_mut().visible = false;
    }
}
