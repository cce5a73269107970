//! Core types shared by the clock and the debounce engine.

use crate::time::ClockTicks;

/// Debounced logical state of a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonState {
    /// Contacts closed.
    Pressed,

    /// Contacts open.
    #[default]
    Released,
}

impl ButtonState {
    /// Returns true for [`ButtonState::Pressed`].
    #[inline]
    pub fn is_pressed(self) -> bool {
        self == ButtonState::Pressed
    }
}

/// Electrical wiring of a button input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polarity {
    /// Pin reads high while the button is pressed (pull-down wiring).
    ActiveHigh,

    /// Pin reads low while the button is pressed (pull-up wiring).
    #[default]
    ActiveLow,
}

impl Polarity {
    /// Maps an electrical pin level to a logical button state.
    #[inline]
    pub fn normalize(self, level_high: bool) -> ButtonState {
        let pressed = match self {
            Polarity::ActiveHigh => level_high,
            Polarity::ActiveLow => !level_high,
        };

        if pressed {
            ButtonState::Pressed
        } else {
            ButtonState::Released
        }
    }

    /// Returns the electrical level the pin sits at while released.
    #[inline]
    pub fn released_level(self) -> bool {
        self == Polarity::ActiveLow
    }
}

/// Emitted once when the debounced state settles into `Pressed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PressEvent {
    /// Tick at which the press was accepted.
    pub at: ClockTicks,
}

/// Configuration errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Tick period of zero microseconds.
    ZeroTickPeriod,

    /// Debounce interval does not fit in the tick counter.
    IntervalTooLong {
        /// Requested interval in milliseconds.
        millis: u32,
    },
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::ZeroTickPeriod => {
                write!(f, "tick period must be non-zero")
            }
            ConfigError::IntervalTooLong { millis } => {
                write!(f, "debounce interval of {} ms exceeds the tick counter range", millis)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}
