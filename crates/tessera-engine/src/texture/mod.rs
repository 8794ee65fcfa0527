//! Texture decoding and upload.
//!
//! Decoding happens on the CPU ([`TextureData`]) with no GPU involvement, so
//! every asset can be validated before the window and device exist.

mod data;
mod gpu;

pub use data::{PixelFormat, TextureData};
pub use gpu::SpriteTexture;
