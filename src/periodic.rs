//! Non-blocking fixed-period scheduling on top of the tick clock.

use crate::elapsed::elapsed;
use crate::time::ClockTicks;

/// Fires once every `period` ticks when polled from a main loop.
///
/// After firing, the next window starts at the tick the poll observed, so a
/// late poll delays subsequent firings instead of bunching them up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Periodic {
    period: ClockTicks,
    last_fire: ClockTicks,
}

impl Periodic {
    /// Creates a timer whose first window starts at `start`.
    pub const fn new(period: ClockTicks, start: ClockTicks) -> Self {
        Self {
            period,
            last_fire: start,
        }
    }

    /// Returns `true` and re-arms if a full period has elapsed since the last firing.
    pub fn poll(&mut self, now: ClockTicks) -> bool {
        if elapsed(now, self.last_fire, self.period) {
            self.last_fire = now;
            true
        } else {
            false
        }
    }

    /// Restarts the current window at `now`.
    pub fn reset(&mut self, now: ClockTicks) {
        self.last_fire = now;
    }

    /// Returns the period in ticks.
    pub fn period(&self) -> ClockTicks {
        self.period
    }
}
