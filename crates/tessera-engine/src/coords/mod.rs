//! Coordinate and geometry types shared by the sprite renderer and the engine.
//!
//! Canonical CPU space:
//! - Logical pixels
//! - Origin top-left
//! - +X right, +Y down
//!
//! Rotations are in radians; with +Y down a positive angle turns clockwise on screen.
//! The sprite shader converts to NDC using a viewport uniform.

mod color;
mod transform;
mod vec2;
mod viewport;

pub use color::ColorRgba;
pub use transform::Transform2;
pub use vec2::Vec2;
pub use viewport::Viewport;
