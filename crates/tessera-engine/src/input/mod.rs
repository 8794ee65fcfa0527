//! Input subsystem.
//!
//! Public API is platform-agnostic and does not expose winit types.
//! The window layer translates platform events into `InputEvent`s; the engine
//! drains them into an `InputState` once per frame.

pub(crate) mod platform;
mod state;
mod types;

pub use state::InputState;
pub use types::{ButtonState, InputEvent, MouseButton, PointerButtonEvent, PointerMoveEvent};
