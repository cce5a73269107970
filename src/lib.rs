#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`MonotonicClock`**: Tick counter advanced by a timer interrupt, read through a critical section
//! - **`elapsed`**: Wraparound-safe check of whether an interval has passed between two ticks
//! - **`DebounceSession`**: Debounces a single button and emits a `PressEvent` per press
//! - **`DebounceConfig`**: Fixed debounce interval and pin polarity for a session
//! - **`PinReader`**: Trait to implement for your button input (or wrap a HAL pin in `HalPin`)
//! - **`TickSource`**: Trait for anything that reports the current tick count
//! - **`TickPeriod`**: Length of one tick, for converting milliseconds to ticks
//! - **`Periodic`**: Non-blocking "every N ticks" timer for the same main loop
//!
//! All time values are [`ClockTicks`], an unsigned counter that wraps silently.
//! Differences between ticks are always taken modulo the counter range.

pub mod time;
pub mod types;
pub mod elapsed;
pub mod clock;
pub mod pin;
pub mod config;
pub mod session;
pub mod periodic;

pub use time::{ClockTicks, TickPeriod, TickSource};
pub use types::{ButtonState, ConfigError, Polarity, PressEvent};
pub use elapsed::{elapsed, ticks_since};
pub use clock::MonotonicClock;
pub use pin::{HalPin, PinReader};
pub use config::DebounceConfig;
pub use session::DebounceSession;
pub use periodic::Periodic;
