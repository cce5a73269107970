use cortex_m::peripheral::{syst::SystClkSource, SYST};
use rtt_target::rprintln;
use switch_debounce::{MonotonicClock, TickPeriod};

/// Global tick clock advanced by the SysTick interrupt.
///
/// One tick per millisecond; wraps after ~49.7 days of continuous operation.
pub static CLOCK: MonotonicClock = MonotonicClock::new();

/// Period programmed into SysTick by [`configure`].
pub const TICK_PERIOD: TickPeriod = TickPeriod::MILLISECOND;

/// Advances [`CLOCK`] by one tick.
///
/// Call this from the SysTick interrupt handler.
pub fn tick() {
    CLOCK.tick();
}

/// Configure SysTick for one interrupt per [`TICK_PERIOD`].
pub fn configure(rcc: &stm32f0xx_hal::rcc::Rcc, syst: &mut SYST) {
    let sysclk_freq = rcc.clocks.sysclk();
    let ticks_per_second = 1_000_000 / TICK_PERIOD.as_micros();

    syst.set_clock_source(SystClkSource::Core);
    syst.set_reload((sysclk_freq.0 / ticks_per_second) - 1);
    syst.clear_current();
    syst.enable_counter();
    syst.enable_interrupt();

    rprintln!("SysTick configured for {}us ticks", TICK_PERIOD.as_micros());
}
