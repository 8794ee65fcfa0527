//! Time subsystem.
//!
//! Provides stable, testable frame timing utilities without coupling to the
//! window or GPU layers. The engine keeps one `FrameClock`, ticks it once per
//! loop iteration and exposes the clamped duration to the updater.

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime, MAX_FRAME_TIME};
