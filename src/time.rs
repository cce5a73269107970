//! Tick-based time abstraction.
//!
//! All timing in this crate is expressed in [`ClockTicks`], the raw count of
//! timer periods since startup. [`TickPeriod`] records how long one tick lasts
//! so that real-world durations can be converted to and from tick counts.

use crate::types::ConfigError;

/// Unsigned count of elapsed timer periods since startup.
///
/// Wraps silently to zero after `ClockTicks::MAX`. With a 1ms tick that is
/// 2^32 ms, roughly 49.7 days of continuous operation.
pub type ClockTicks = u32;

/// Trait for abstracting tick sources.
pub trait TickSource {
    /// Returns the current tick count.
    fn now(&self) -> ClockTicks;
}

impl<T: TickSource + ?Sized> TickSource for &T {
    fn now(&self) -> ClockTicks {
        (**self).now()
    }
}

/// The fixed period of one clock tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickPeriod {
    micros: u32,
}

impl TickPeriod {
    /// One tick per millisecond.
    pub const MILLISECOND: Self = TickPeriod { micros: 1_000 };

    /// Creates a tick period from its length in microseconds.
    ///
    /// # Returns
    /// * `Ok(TickPeriod)` - Valid period
    /// * `Err(ConfigError::ZeroTickPeriod)` - `micros` was zero
    pub const fn from_micros(micros: u32) -> Result<Self, ConfigError> {
        if micros == 0 {
            return Err(ConfigError::ZeroTickPeriod);
        }
        Ok(TickPeriod { micros })
    }

    /// Returns the period length in microseconds.
    #[inline]
    pub const fn as_micros(&self) -> u32 {
        self.micros
    }

    /// Converts a duration in milliseconds to ticks, rounding up.
    ///
    /// Returns `None` if the result does not fit in [`ClockTicks`].
    pub fn ticks_from_millis(&self, millis: u32) -> Option<ClockTicks> {
        let micros = u64::from(millis) * 1_000;
        let ticks = micros.div_ceil(u64::from(self.micros));
        ClockTicks::try_from(ticks).ok()
    }

    /// Converts a tick count to whole milliseconds.
    pub fn millis_from_ticks(&self, ticks: ClockTicks) -> u64 {
        u64::from(ticks) * u64::from(self.micros) / 1_000
    }

    /// Milliseconds until the tick counter wraps back to zero.
    pub fn wrap_period_millis(&self) -> u64 {
        (u64::from(ClockTicks::MAX) + 1) * u64::from(self.micros) / 1_000
    }
}

impl Default for TickPeriod {
    fn default() -> Self {
        TickPeriod::MILLISECOND
    }
}
