//! Wraparound-safe elapsed-time arithmetic.

use crate::time::ClockTicks;

/// Ticks from `reference` to `current`, modulo the counter range.
///
/// Correct across a counter wrap as long as the real distance is less than
/// one full wrap period.
#[inline]
pub const fn ticks_since(current: ClockTicks, reference: ClockTicks) -> ClockTicks {
    current.wrapping_sub(reference)
}

/// Returns `true` if at least `interval` ticks separate `reference` and `current`.
///
/// The difference is taken with unsigned modular subtraction, so a reference
/// taken just before the counter wrapped still yields the true distance.
/// An `interval` of zero is always elapsed.
#[inline]
pub const fn elapsed(current: ClockTicks, reference: ClockTicks, interval: ClockTicks) -> bool {
    ticks_since(current, reference) >= interval
}
