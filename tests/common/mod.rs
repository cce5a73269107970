//! Shared test infrastructure for switch-debounce integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use core::cell::Cell;
use embedded_hal::digital::{ErrorKind, ErrorType, InputPin};
use switch_debounce::{ClockTicks, DebounceSession, PinReader, PressEvent, TickSource};

// ============================================================================
// Mock Pins
// ============================================================================

/// Mock pin whose electrical level is driven by the test
pub struct MockPin<'a> {
    level: &'a Cell<bool>,
}

impl<'a> MockPin<'a> {
    pub fn new(level: &'a Cell<bool>) -> Self {
        Self { level }
    }
}

impl PinReader for MockPin<'_> {
    fn read_pin(&mut self) -> bool {
        self.level.get()
    }
}

/// HAL input pin whose every read fails
pub struct BrokenPin;

impl ErrorType for BrokenPin {
    type Error = ErrorKind;
}

impl InputPin for BrokenPin {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Err(ErrorKind::Other)
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Err(ErrorKind::Other)
    }
}

// ============================================================================
// Mock Tick Source
// ============================================================================

/// Mock tick source with controllable time advancement
pub struct MockTickSource {
    current: Cell<ClockTicks>,
}

impl MockTickSource {
    pub fn new(start: ClockTicks) -> Self {
        Self {
            current: Cell::new(start),
        }
    }

    /// Advance time by the given number of ticks, wrapping like the real clock
    pub fn advance(&self, ticks: ClockTicks) {
        self.current.set(self.current.get().wrapping_add(ticks));
    }

    pub fn set(&self, ticks: ClockTicks) {
        self.current.set(ticks);
    }
}

impl TickSource for MockTickSource {
    fn now(&self) -> ClockTicks {
        self.current.get()
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

/// Polls once per tick from the current time up to and including `until`,
/// collecting every press event.
pub fn poll_until<P: PinReader>(
    session: &mut DebounceSession<'_, P, MockTickSource>,
    clock: &MockTickSource,
    until: ClockTicks,
    events: &mut heapless::Vec<PressEvent, 16>,
) {
    loop {
        if let Some(event) = session.poll() {
            events.push(event).unwrap();
        }
        if clock.now() == until {
            break;
        }
        clock.advance(1);
    }
}
