use std::time::Instant;

use crate::input::{InputEvent, InputState};
use crate::time::FrameClock;

/// Loop-owned state: polled input, timing and the stop request.
#[derive(Debug, Clone)]
pub(crate) struct FrameState {
    pub input: InputState,
    pub clock: FrameClock,
    quit: bool,
}

impl FrameState {
    pub fn new(input: InputState, clock: FrameClock) -> Self {
        Self { input, clock, quit: false }
    }

    pub fn request_quit(&mut self) {
        self.quit = true;
    }

    /// True once `quit` was called or the OS asked the window to close.
    pub fn should_stop(&self) -> bool {
        self.quit || self.input.quit_requested()
    }
}

/// Outcome of acquiring the frame targets.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum FrameStatus {
    /// Targets acquired and cleared.
    Ready,
    /// No targets this iteration; events, timing and the updater still run.
    Skip,
    /// Unrecoverable; leave the loop.
    Stop,
}

/// The platform pieces the frame loop drives.
pub(crate) trait LoopHost {
    fn frame_state(&mut self) -> &mut FrameState;

    fn begin_frame(&mut self) -> FrameStatus;

    /// Appends every pending OS event to `out` without blocking.
    fn poll_events(&mut self, out: &mut Vec<InputEvent>);

    fn now(&self) -> Instant;

    /// Presents whatever `begin_frame` acquired.
    fn end_frame(&mut self);
}

/// Runs iterations until a stop is requested. Returns the number of
/// iterations that reached the updater.
///
/// The stop flag is checked once at the top of each iteration, so a `quit`
/// from inside the updater finishes the current iteration and ends the loop.
pub(crate) fn run<H: LoopHost>(host: &mut H, mut update: Option<&mut dyn FnMut(&mut H)>) -> u64 {
    let mut events = Vec::new();
    let mut iterations = 0u64;

    while !host.frame_state().should_stop() {
        if host.begin_frame() == FrameStatus::Stop {
            host.frame_state().request_quit();
            break;
        }

        host.poll_events(&mut events);
        host.frame_state().input.drain(events.drain(..));

        let now = host.now();
        let ft = host.frame_state().clock.tick_at(now);
        if ft.clamped {
            log::debug!("frame {} exceeded the frame-time ceiling; dt clamped to {:.3}s", ft.frame_index, ft.dt);
        }

        if let Some(update) = update.as_deref_mut() {
            update(host);
        }

        host.end_frame();
        iterations += 1;
    }

    iterations
}
