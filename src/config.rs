//! Per-button debounce configuration.

use crate::time::{ClockTicks, TickPeriod};
use crate::types::{ConfigError, Polarity};

/// Fixed configuration of a [`DebounceSession`](crate::DebounceSession).
///
/// Both values are bound when the session is created and never change afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DebounceConfig {
    interval: ClockTicks,
    polarity: Polarity,
}

impl DebounceConfig {
    /// Default debounce interval in ticks (50ms at a 1ms tick).
    pub const DEFAULT_INTERVAL: ClockTicks = 50;

    /// Creates an active-low configuration with the given interval in ticks.
    ///
    /// An interval of zero disables filtering: every raw change is accepted
    /// on the poll that observes it.
    pub const fn new(interval: ClockTicks) -> Self {
        Self {
            interval,
            polarity: Polarity::ActiveLow,
        }
    }

    /// Creates an active-low configuration from an interval in milliseconds.
    ///
    /// The interval is rounded up to whole ticks of `period`.
    pub fn from_millis(millis: u32, period: TickPeriod) -> Result<Self, ConfigError> {
        let interval = period
            .ticks_from_millis(millis)
            .ok_or(ConfigError::IntervalTooLong { millis })?;
        Ok(Self::new(interval))
    }

    /// Sets the pin polarity.
    pub const fn with_polarity(mut self, polarity: Polarity) -> Self {
        self.polarity = polarity;
        self
    }

    /// Ticks a raw signal must hold steady before it is accepted.
    #[inline]
    pub const fn interval(&self) -> ClockTicks {
        self.interval
    }

    /// Returns the pin polarity.
    #[inline]
    pub const fn polarity(&self) -> Polarity {
        self.polarity
    }
}

impl Default for DebounceConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_INTERVAL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_fifty_ticks_active_low() {
        let config = DebounceConfig::default();
        assert_eq!(config.interval(), 50);
        assert_eq!(config.polarity(), Polarity::ActiveLow);
    }

    #[test]
    fn polarity_can_be_overridden() {
        let config = DebounceConfig::new(10).with_polarity(Polarity::ActiveHigh);
        assert_eq!(config.interval(), 10);
        assert_eq!(config.polarity(), Polarity::ActiveHigh);
    }

    #[test]
    fn from_millis_uses_tick_period() {
        let period = TickPeriod::from_micros(500).unwrap();
        let config = DebounceConfig::from_millis(50, period).unwrap();
        assert_eq!(config.interval(), 100);
    }

    #[test]
    fn from_millis_rejects_interval_beyond_counter_range() {
        let period = TickPeriod::from_micros(1).unwrap();
        assert_eq!(
            DebounceConfig::from_millis(5_000_000, period),
            Err(ConfigError::IntervalTooLong { millis: 5_000_000 })
        );
    }
}
