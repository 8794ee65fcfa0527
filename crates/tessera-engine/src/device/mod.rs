//! GPU device + surface management.
//!
//! Creates the wgpu instance/adapter/device/queue for the engine window,
//! configures the FIFO surface, owns the depth target and hands out cleared
//! frames for the sprite batches to draw into.

mod error;
mod frame;
mod gpu;
mod init;
mod surface;

pub use error::SurfaceErrorAction;
pub use frame::GpuFrame;
pub use gpu::Gpu;
pub use init::GpuInit;
