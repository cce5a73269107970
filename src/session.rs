//! Debounce state machine for a single button.
//!
//! Provides [`DebounceSession`], which turns noisy raw pin samples into a stable
//! [`ButtonState`] and emits a [`PressEvent`] each time the button settles into
//! the pressed state.

use crate::config::DebounceConfig;
use crate::elapsed::elapsed;
use crate::pin::PinReader;
use crate::time::{ClockTicks, TickSource};
use crate::types::{ButtonState, Polarity, PressEvent};

/// Debounces one physical button against a tick source.
///
/// A raw sample is accepted as the new debounced state only after it has held
/// steady for the configured interval. Every observed change of the raw sample,
/// bounce included, restarts that window.
///
/// The session is driven by calling [`poll`](Self::poll) from the main loop.
/// Acceptance into `Pressed` returns a [`PressEvent`]; acceptance into
/// `Released` updates the state silently.
///
/// # Type Parameters
/// * `'t` - Lifetime of the tick source reference
/// * `P` - Pin reader implementation type
/// * `T` - Tick source implementation type
pub struct DebounceSession<'t, P: PinReader, T: TickSource> {
    pin: P,
    clock: &'t T,
    polarity: Polarity,
    debounce_interval: ClockTicks,
    raw_sample: ButtonState,
    last_raw_sample: ButtonState,
    debounced_state: ButtonState,
    last_change_tick: ClockTicks,
}

impl<'t, P: PinReader, T: TickSource> DebounceSession<'t, P, T> {
    /// Creates a session, adopting the pin's current level as the rest state.
    ///
    /// A button that is already held at construction is therefore not
    /// reported as a press: [`state`](Self::state) returns `Pressed` straight
    /// away, no [`PressEvent`] is emitted, and the button must be released and
    /// pressed again to produce one.
    pub fn new(mut pin: P, clock: &'t T, config: DebounceConfig) -> Self {
        let polarity = config.polarity();
        let initial = polarity.normalize(pin.read_pin());
        let now = clock.now();

        Self {
            pin,
            clock,
            polarity,
            debounce_interval: config.interval(),
            raw_sample: initial,
            last_raw_sample: initial,
            debounced_state: initial,
            last_change_tick: now,
        }
    }

    /// Samples the pin and the clock once and advances the state machine.
    ///
    /// Call this once per main loop iteration.
    ///
    /// # Returns
    /// * `Some(PressEvent)` - The debounced state just became `Pressed`
    /// * `None` - No press was accepted on this poll
    pub fn poll(&mut self) -> Option<PressEvent> {
        let level_high = self.pin.read_pin();
        let now = self.clock.now();
        self.update(level_high, now)
    }

    /// Advances the state machine with an externally sampled pin level.
    ///
    /// `level_high` is the electrical level, before polarity is applied, and
    /// `now` is the tick at which it was sampled.
    pub fn update(&mut self, level_high: bool, now: ClockTicks) -> Option<PressEvent> {
        self.raw_sample = self.polarity.normalize(level_high);

        if self.raw_sample != self.last_raw_sample {
            self.last_change_tick = now;
        }

        let mut event = None;

        if self.raw_sample != self.debounced_state
            && elapsed(now, self.last_change_tick, self.debounce_interval)
        {
            self.debounced_state = self.raw_sample;

            #[cfg(feature = "defmt")]
            defmt::debug!("button settled {} at tick {}", self.debounced_state, now);

            if self.debounced_state == ButtonState::Pressed {
                event = Some(PressEvent { at: now });
            }
        }

        self.last_raw_sample = self.raw_sample;
        event
    }

    /// Returns the debounced state.
    pub fn state(&self) -> ButtonState {
        self.debounced_state
    }

    /// Returns true if the debounced state is `Pressed`.
    pub fn is_pressed(&self) -> bool {
        self.debounced_state.is_pressed()
    }

    /// Returns the most recent polarity-normalized raw sample.
    pub fn raw_sample(&self) -> ButtonState {
        self.raw_sample
    }

    /// Returns the tick at which the raw sample last changed.
    pub fn last_change_tick(&self) -> ClockTicks {
        self.last_change_tick
    }

    /// Returns the debounce interval in ticks.
    pub fn interval(&self) -> ClockTicks {
        self.debounce_interval
    }

    /// Returns the pin polarity.
    pub fn polarity(&self) -> Polarity {
        self.polarity
    }

    /// Consumes the session and returns the pin reader.
    pub fn release(self) -> P {
        self.pin
    }
}
