use super::types::{ButtonState, InputEvent, PointerButtonEvent, PointerMoveEvent};

/// Polled input state.
///
/// Updated only while the engine drains pending events at the start of a frame;
/// game code reads it between frames. Nothing is queued: pointer motion
/// coalesces to the latest position and the button flag is level state, so a
/// press and release inside one drain reads as released.
#[derive(Debug, Clone, PartialEq)]
pub struct InputState {
    pub mouse_x: f32,
    pub mouse_y: f32,
    pub mouse_button_down: bool,
    quit_requested: bool,
}

impl InputState {
    /// Creates a state with the pointer parked at the centre of the window.
    pub fn centered(width: f32, height: f32) -> Self {
        Self {
            mouse_x: width * 0.5,
            mouse_y: height * 0.5,
            mouse_button_down: false,
            quit_requested: false,
        }
    }

    /// Applies a single event.
    pub fn apply_event(&mut self, ev: &InputEvent) {
        match ev {
            InputEvent::QuitRequested | InputEvent::KeyDown { .. } => {
                self.quit_requested = true;
            }

            InputEvent::PointerMoved(PointerMoveEvent { x, y }) => {
                self.mouse_x = *x;
                self.mouse_y = *y;
            }

            InputEvent::PointerButton(PointerButtonEvent { state, .. }) => {
                self.mouse_button_down = *state == ButtonState::Pressed;
            }

            InputEvent::KeyUp { .. } => {}
        }
    }

    /// Applies every event in arrival order and returns how many were consumed.
    pub fn drain<I>(&mut self, events: I) -> usize
    where
        I: IntoIterator<Item = InputEvent>,
    {
        let mut n = 0;
        for ev in events {
            self.apply_event(&ev);
            n += 1;
        }
        n
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }
}
