//! Pin capability consumed by the debounce engine.

use embedded_hal::digital::InputPin;

use crate::types::Polarity;

/// Trait for abstracting a button's input pin.
///
/// Implement this for whatever gives you the instantaneous electrical level
/// of the button (a HAL pin, a port register bit, a test fixture).
pub trait PinReader {
    /// Returns `true` if the pin is electrically high.
    ///
    /// This method cannot fail. Handle hardware errors internally.
    fn read_pin(&mut self) -> bool;
}

/// Adapts an `embedded-hal` [`InputPin`] to [`PinReader`].
///
/// A failed read repeats the last level that was read successfully, so a
/// flaky read looks like a held signal rather than a spurious edge. Until the
/// first successful read, the idle (released) level stands in.
pub struct HalPin<P> {
    pin: P,
    last_level: bool,
}

impl<P: InputPin> HalPin<P> {
    /// Wraps a HAL input pin that idles high (active-low button with pull-up).
    pub fn new(pin: P) -> Self {
        Self::with_idle_level(pin, Polarity::ActiveLow.released_level())
    }

    /// Wraps a HAL input pin that reads `idle_level` while the button is released.
    pub fn with_idle_level(pin: P, idle_level: bool) -> Self {
        Self {
            pin,
            last_level: idle_level,
        }
    }

    /// Returns the wrapped pin.
    pub fn into_inner(self) -> P {
        self.pin
    }
}

impl<P: InputPin> PinReader for HalPin<P> {
    fn read_pin(&mut self) -> bool {
        if let Ok(level) = self.pin.is_high() {
            self.last_level = level;
        }
        self.last_level
    }
}
