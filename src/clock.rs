//! Interrupt-driven monotonic tick clock.

use core::cell::Cell;
use critical_section::Mutex;

use crate::time::{ClockTicks, TickSource};

/// Tick counter shared between a timer interrupt and foreground code.
///
/// The timer interrupt handler calls [`tick`](Self::tick) once per period; the
/// foreground loop reads the count with [`now`](Self::now). Both go through a
/// critical section, so the foreground never observes a half-written counter
/// on targets whose native word is narrower than [`ClockTicks`].
///
/// The clock is `const`-constructible and is meant to live in a `static`:
///
/// ```
/// use switch_debounce::MonotonicClock;
///
/// static CLOCK: MonotonicClock = MonotonicClock::new();
///
/// // From the timer interrupt handler:
/// CLOCK.tick();
///
/// // From the main loop:
/// assert_eq!(CLOCK.now(), 1);
/// ```
pub struct MonotonicClock {
    ticks: Mutex<Cell<ClockTicks>>,
}

impl MonotonicClock {
    /// Creates a clock starting at tick zero.
    pub const fn new() -> Self {
        Self::starting_at(0)
    }

    /// Creates a clock starting at an arbitrary tick count.
    pub const fn starting_at(ticks: ClockTicks) -> Self {
        Self {
            ticks: Mutex::new(Cell::new(ticks)),
        }
    }

    /// Advances the clock by one tick, wrapping to zero after `ClockTicks::MAX`.
    ///
    /// Call this from the periodic timer interrupt handler, exactly once per period.
    #[inline]
    pub fn tick(&self) {
        critical_section::with(|cs| {
            let counter = self.ticks.borrow(cs);
            counter.set(counter.get().wrapping_add(1));
        });
    }

    /// Returns the current tick count.
    #[inline]
    pub fn now(&self) -> ClockTicks {
        critical_section::with(|cs| self.ticks.borrow(cs).get())
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl TickSource for MonotonicClock {
    fn now(&self) -> ClockTicks {
        MonotonicClock::now(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    extern crate std;
    use std::thread;

    #[test]
    fn starts_at_zero() {
        let clock = MonotonicClock::new();
        assert_eq!(clock.now(), 0);
    }

    #[test]
    fn each_tick_advances_by_one() {
        let clock = MonotonicClock::new();
        for expected in 1..=100 {
            clock.tick();
            assert_eq!(clock.now(), expected);
        }
    }

    #[test]
    fn reading_does_not_advance() {
        let clock = MonotonicClock::starting_at(42);
        assert_eq!(clock.now(), 42);
        assert_eq!(clock.now(), 42);
    }

    #[test]
    fn counter_wraps_silently_to_zero() {
        let clock = MonotonicClock::starting_at(ClockTicks::MAX - 1);
        clock.tick();
        assert_eq!(clock.now(), ClockTicks::MAX);
        clock.tick();
        assert_eq!(clock.now(), 0);
        clock.tick();
        assert_eq!(clock.now(), 1);
    }

    #[test]
    fn usable_through_tick_source_trait() {
        fn read<T: TickSource>(source: &T) -> ClockTicks {
            source.now()
        }

        let clock = MonotonicClock::starting_at(9);
        assert_eq!(read(&clock), 9);
    }

    #[test]
    fn concurrent_reader_sees_monotonic_counts() {
        static CLOCK: MonotonicClock = MonotonicClock::new();
        const TICKS: ClockTicks = 20_000;

        let ticker = thread::spawn(|| {
            for _ in 0..TICKS {
                CLOCK.tick();
            }
        });

        let mut previous = CLOCK.now();
        while !ticker.is_finished() {
            let current = CLOCK.now();
            assert!(current >= previous, "clock went backwards: {previous} -> {current}");
            assert!(current <= TICKS);
            previous = current;
        }

        ticker.join().unwrap();
        assert_eq!(CLOCK.now(), TICKS);
    }
}
