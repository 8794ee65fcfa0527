use crate::coords::Vec2;

/// Normalised texture region, `(u0, v0)` top-left to `(u1, v1)` bottom-right.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct UvRect {
    pub u0: f32,
    pub v0: f32,
    pub u1: f32,
    pub v1: f32,
}

impl UvRect {
    #[inline]
    pub const fn new(u0: f32, v0: f32, u1: f32, v1: f32) -> Self {
        Self { u0, v0, u1, v1 }
    }

    /// The whole texture.
    #[inline]
    pub const fn full() -> Self {
        Self::new(0.0, 0.0, 1.0, 1.0)
    }

    /// Region given in texels of a `texture_size` texture.
    pub fn from_pixels(x: u32, y: u32, width: u32, height: u32, texture_size: (u32, u32)) -> Self {
        let tw = texture_size.0.max(1) as f32;
        let th = texture_size.1.max(1) as f32;
        Self::new(
            x as f32 / tw,
            y as f32 / th,
            (x + width) as f32 / tw,
            (y + height) as f32 / th,
        )
    }

    /// Frame `index` of a horizontal strip of `count` equal frames.
    pub fn strip_frame(index: usize, count: usize) -> Self {
        let count = count.max(1) as f32;
        let w = 1.0 / count;
        let u0 = index as f32 * w;
        Self::new(u0, 0.0, u0 + w, 1.0)
    }

    /// Size of the region in texels of a `texture_size` texture.
    pub fn pixel_size(&self, texture_size: (u32, u32)) -> Vec2 {
        Vec2::new(
            (self.u1 - self.u0).abs() * texture_size.0 as f32,
            (self.v1 - self.v0).abs() * texture_size.1 as f32,
        )
    }
}

impl Default for UvRect {
    fn default() -> Self {
        Self::full()
    }
}

/// Index of a template inside the batch that created it.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct TemplateId(pub(crate) usize);

impl TemplateId {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}
