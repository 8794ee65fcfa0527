use core::ops::Mul;

use super::Vec2;

/// 2D affine transform (rotation/scale + translation).
///
/// Column layout:
///
/// ```text
/// | a  c  tx |
/// | b  d  ty |
/// ```
///
/// Chained builders post-multiply, so `Transform2::translation(p).rotated(r)`
/// rotates about `p`: points are rotated first, then translated.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transform2 {
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
    pub tx: f32,
    pub ty: f32,
}

impl Transform2 {
    pub const IDENTITY: Transform2 = Transform2 { a: 1.0, b: 0.0, c: 0.0, d: 1.0, tx: 0.0, ty: 0.0 };

    #[inline]
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    #[inline]
    pub const fn translation(x: f32, y: f32) -> Self {
        Self { tx: x, ty: y, ..Self::IDENTITY }
    }

    #[inline]
    pub fn rotation(radians: f32) -> Self {
        let (s, c) = radians.sin_cos();
        Self { a: c, b: s, c: -s, d: c, tx: 0.0, ty: 0.0 }
    }

    #[inline]
    pub const fn scaling(sx: f32, sy: f32) -> Self {
        Self { a: sx, d: sy, ..Self::IDENTITY }
    }

    /// `self * translation(x, y)`.
    #[inline]
    pub fn translated(self, x: f32, y: f32) -> Self {
        self * Self::translation(x, y)
    }

    /// `self * rotation(radians)`.
    #[inline]
    pub fn rotated(self, radians: f32) -> Self {
        self * Self::rotation(radians)
    }

    /// `self * scaling(sx, sy)`.
    #[inline]
    pub fn scaled(self, sx: f32, sy: f32) -> Self {
        self * Self::scaling(sx, sy)
    }

    #[inline]
    pub fn transform_point(&self, p: Vec2) -> Vec2 {
        Vec2::new(
            self.a * p.x + self.c * p.y + self.tx,
            self.b * p.x + self.d * p.y + self.ty,
        )
    }

    /// Where the local origin lands.
    #[inline]
    pub fn origin(&self) -> Vec2 {
        Vec2::new(self.tx, self.ty)
    }

    /// Rotation angle of the x axis, in radians.
    #[inline]
    pub fn angle(&self) -> f32 {
        self.b.atan2(self.a)
    }

    /// Length of the transformed x and y basis vectors.
    #[inline]
    pub fn axis_scale(&self) -> Vec2 {
        Vec2::new(self.a.hypot(self.b), self.c.hypot(self.d))
    }
}

impl Default for Transform2 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for Transform2 {
    type Output = Transform2;

    fn mul(self, r: Transform2) -> Transform2 {
        Transform2 {
            a: self.a * r.a + self.c * r.b,
            b: self.b * r.a + self.d * r.b,
            c: self.a * r.c + self.c * r.d,
            d: self.b * r.c + self.d * r.d,
            tx: self.a * r.tx + self.c * r.ty + self.tx,
            ty: self.b * r.tx + self.d * r.ty + self.ty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    fn close(a: Vec2, b: Vec2) -> bool {
        (a.x - b.x).abs() < 1e-4 && (a.y - b.y).abs() < 1e-4
    }

    #[test]
    fn identity_leaves_points_alone() {
        let p = Vec2::new(3.0, -7.5);
        assert_eq!(Transform2::identity().transform_point(p), p);
    }

    #[test]
    fn translation_moves_origin() {
        let t = Transform2::translation(10.0, 20.0);
        assert_eq!(t.origin(), Vec2::new(10.0, 20.0));
        assert_eq!(t.transform_point(Vec2::new(1.0, 1.0)), Vec2::new(11.0, 21.0));
    }

    #[test]
    fn quarter_turn_maps_x_to_y() {
        // +Y is down, so a positive quarter turn sends +X to +Y.
        let t = Transform2::rotation(FRAC_PI_2);
        assert!(close(t.transform_point(Vec2::new(1.0, 0.0)), Vec2::new(0.0, 1.0)));
        assert!((t.angle() - FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn builders_post_multiply() {
        // Rotate around (100, 50), then shift left/up in the rotated frame.
        let t = Transform2::translation(100.0, 50.0)
            .rotated(FRAC_PI_2)
            .translated(-10.0, -20.0);
        assert!(close(t.transform_point(Vec2::zero()), Vec2::new(120.0, 40.0)));
        assert!((t.angle() - FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn axis_scale_survives_rotation() {
        let t = Transform2::rotation(0.7).scaled(2.0, 3.0);
        let s = t.axis_scale();
        assert!((s.x - 2.0).abs() < 1e-5);
        assert!((s.y - 3.0).abs() < 1e-5);
    }
}
