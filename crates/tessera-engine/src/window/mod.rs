//! Window + OS event pumping.
//!
//! Owns the `winit` EventLoop and the single engine window. Events are pumped
//! on demand from the engine's own loop instead of handing control to winit.

mod runtime;

pub use runtime::{Platform, RuntimeConfig};
