//! Fixed-interval tick timing for frame-driven loops.

/// Reference delay between two ticks, in seconds.
pub const DEFAULT_TICK_INTERVAL: f64 = 0.45;

/// Decides on which frames a tick should run.
///
/// The timer is polled once per frame with the current time; it fires when
/// strictly more than `interval` seconds have passed since the last tick.
#[derive(Debug, Clone, PartialEq)]
pub struct TickTimer {
    interval: f64,
    previous: f64,
}

impl TickTimer {
    /// Creates a timer whose first tick fires `interval` seconds after `start`.
    pub fn new(interval: f64, start: f64) -> Self {
        Self {
            interval: interval.max(0.0),
            previous: start,
        }
    }

    /// Returns `true` if a tick is due at `now`, and restarts the interval.
    pub fn poll(&mut self, now: f64) -> bool {
        if now - self.previous > self.interval {
            self.previous = now;
            true
        } else {
            false
        }
    }

    /// Delay between ticks, in seconds.
    pub fn interval(&self) -> f64 {
        self.interval
    }

    /// Changes the delay; negative values are treated as zero.
    pub fn set_interval(&mut self, interval: f64) {
        self.interval = interval.max(0.0);
    }
}

impl Default for TickTimer {
    fn default() -> Self {
        Self::new(DEFAULT_TICK_INTERVAL, 0.0)
    }
}
