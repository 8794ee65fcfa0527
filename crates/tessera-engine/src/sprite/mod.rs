//! Instanced sprite rendering.
//!
//! A [`SpriteBatch`] owns the templates and instances that share one texture.
//! Templates describe a uv region; instances carry a transform and colour and
//! are shared with the caller through [`SpriteHandle`]s. Each frame the batch
//! packs its visible instances, copies them to the GPU and issues one
//! instanced draw through the shared [`SpritePipeline`].

mod batch;
mod error;
mod instance;
mod pipeline;
mod template;

pub use batch::{SpriteBatch, MAX_INSTANCES, MAX_TEMPLATES, STAGING_CHUNK_SIZE};
pub use error::BatchError;
pub use instance::{GpuSprite, SpriteHandle, SpriteInstance};
pub use pipeline::SpritePipeline;
pub use template::{TemplateId, UvRect};
