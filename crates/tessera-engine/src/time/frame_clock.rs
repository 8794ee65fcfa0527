use std::time::{Duration, Instant};

/// Ceiling for a single frame's delta time.
pub const MAX_FRAME_TIME: Duration = Duration::from_millis(300);

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Time elapsed since the previous frame tick, in seconds, after clamping.
    pub dt: f32,

    /// Monotonic timestamp taken at the tick.
    pub now: Instant,

    /// Monotonic frame counter.
    pub frame_index: u64,

    /// True when the raw elapsed time exceeded the ceiling.
    pub clamped: bool,
}

/// Frame clock producing `FrameTime` snapshots.
///
/// Delta time is clamped to a ceiling so that a stall (debugger pause, window
/// drag, resume from sleep) never hands game logic a huge step.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
    last_dt: f32,
    frame_index: u64,
    dt_max: Duration,
}

impl FrameClock {
    /// Creates a clock with the default 300 ms ceiling, starting now.
    pub fn new() -> Self {
        Self::starting_at(Instant::now(), MAX_FRAME_TIME)
    }

    /// Creates a clock whose first tick is measured from `start`.
    ///
    /// Before the first tick the reported frame duration is 1/60 s.
    pub fn starting_at(start: Instant, dt_max: Duration) -> Self {
        Self {
            last: start,
            last_dt: 1.0 / 60.0,
            frame_index: 0,
            dt_max,
        }
    }

    /// Resets the clock baseline.
    pub fn reset(&mut self) {
        self.last = Instant::now();
    }

    /// Duration of the last completed frame, in seconds.
    pub fn last_frame_seconds(&self) -> f32 {
        self.last_dt
    }

    pub fn frame_index(&self) -> u64 {
        self.frame_index
    }

    pub fn max_frame_time(&self) -> Duration {
        self.dt_max
    }

    /// Advances the clock using the current time.
    pub fn tick(&mut self) -> FrameTime {
        self.tick_at(Instant::now())
    }

    /// Advances the clock to `now` and returns a new `FrameTime`.
    ///
    /// A `now` earlier than the previous tick yields a zero delta.
    pub fn tick_at(&mut self, now: Instant) -> FrameTime {
        let raw = now.saturating_duration_since(self.last);
        let clamped = raw > self.dt_max;
        let dt = raw.min(self.dt_max);

        self.last = now;
        self.last_dt = dt.as_secs_f32();

        let ft = FrameTime {
            dt: self.last_dt,
            now,
            frame_index: self.frame_index,
            clamped,
        };

        self.frame_index = self.frame_index.wrapping_add(1);

        ft
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_sixtieth_before_first_tick() {
        let clock = FrameClock::new();
        assert!((clock.last_frame_seconds() - 1.0 / 60.0).abs() < f32::EPSILON);
        assert_eq!(clock.frame_index(), 0);
    }

    #[test]
    fn short_frames_pass_through() {
        let start = Instant::now();
        let mut clock = FrameClock::starting_at(start, MAX_FRAME_TIME);
        let ft = clock.tick_at(start + Duration::from_millis(16));
        assert!((ft.dt - 0.016).abs() < 1e-6);
        assert!(!ft.clamped);
    }

    #[test]
    fn stall_is_clamped_to_ceiling() {
        let start = Instant::now();
        let mut clock = FrameClock::starting_at(start, MAX_FRAME_TIME);
        let ft = clock.tick_at(start + Duration::from_secs(12));
        assert!(ft.clamped);
        assert!(ft.dt <= 0.3 + f32::EPSILON);
        assert!((clock.last_frame_seconds() - 0.3).abs() < 1e-6);
    }

    #[test]
    fn ceiling_holds_across_many_stalls() {
        let start = Instant::now();
        let mut clock = FrameClock::starting_at(start, MAX_FRAME_TIME);
        let mut now = start;
        for secs in [1u64, 30, 3600] {
            now += Duration::from_secs(secs);
            assert!(clock.tick_at(now).dt <= 0.3 + f32::EPSILON);
        }
    }

    #[test]
    fn clock_going_backwards_gives_zero() {
        let start = Instant::now() + Duration::from_secs(1);
        let mut clock = FrameClock::starting_at(start, MAX_FRAME_TIME);
        let ft = clock.tick_at(start - Duration::from_millis(500));
        assert_eq!(ft.dt, 0.0);
    }

    #[test]
    fn frame_index_increments_per_tick() {
        let start = Instant::now();
        let mut clock = FrameClock::starting_at(start, MAX_FRAME_TIME);
        let a = clock.tick_at(start + Duration::from_millis(1));
        let b = clock.tick_at(start + Duration::from_millis(2));
        assert_eq!(a.frame_index, 0);
        assert_eq!(b.frame_index, 1);
        assert_eq!(clock.frame_index(), 2);
    }
}
