use std::time::Instant;

/// Frame metadata - carries frame number and timing info
#[derive(Debug, Clone, Copy)]
pub struct FrameInfo {
    pub number: u64,
    pub time: f32,
    pub delta: f32,
}

/// Monotonic frame clock anchored at app start
///
/// `time` is seconds since the clock was created, `delta` seconds since the
/// previous tick. The first tick carries a near-zero delta.
pub struct FrameClock {
    frame_number: u64,
    start_time: Instant,
    last_frame_time: Instant,
}

impl FrameClock {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            frame_number: 0,
            start_time: now,
            last_frame_time: now,
        }
    }

    /// Advance the clock and return timing for the frame that begins now
    pub fn tick(&mut self) -> FrameInfo {
        let now = Instant::now();
        let delta = now.duration_since(self.last_frame_time).as_secs_f32();
        let time = now.duration_since(self.start_time).as_secs_f32();

        let info = FrameInfo {
            number: self.frame_number,
            time,
            delta,
        };

        self.frame_number += 1;
        self.last_frame_time = now;

        info
    }

    /// Seconds since the clock was created, without advancing it
    pub fn time(&self) -> f32 {
        self.start_time.elapsed().as_secs_f32()
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
    use std::thread;
    use std::time::Duration;

    #[test]
    fn first_tick_has_near_zero_delta() {
        let mut clock = FrameClock::new();
        let frame = clock.tick();

        assert_eq!(frame.number, 0);
        assert!(frame.delta < 0.005, "first delta should be near zero, got {}", frame.delta);
    }

    #[test]
    fn frame_numbers_count_up() {
        let mut clock = FrameClock::new();

        for expected in 0..5 {
            assert_eq!(clock.tick().number, expected);
        }
    }

    #[test]
    fn delta_tracks_wall_time() {
        let mut clock = FrameClock::new();
        clock.tick();

        thread::sleep(Duration::from_millis(10));
        let frame = clock.tick();

        // Should be roughly 10ms; generous upper bound for loaded machines
        assert!(frame.delta >= 0.009 && frame.delta <= 0.100);
    }

    #[test]
    fn time_is_monotone_and_covers_delta() {
        let mut clock = FrameClock::new();
        let first = clock.tick();

        thread::sleep(Duration::from_millis(5));
        let second = clock.tick();

        assert!(second.time >= first.time);
        assert!(second.time >= second.delta);
    }
}
