#![no_std]
#![no_main]

use cortex_m_rt::entry;
use panic_halt as _;
use rtt_target::{rprintln, rtt_init_print};
use stm32f0xx_hal::{pac, prelude::*};

use stm32f0_demos::systick::{self, CLOCK, TICK_PERIOD};
use switch_debounce::Periodic;

const BLINK_MS: u32 = 1_000;

/// SysTick interrupt handler - called every 1ms
#[cortex_m_rt::exception]
fn SysTick() {
    systick::tick();
}

#[entry]
fn main() -> ! {
    rtt_init_print!();
    rprintln!("=== Heartbeat Example ===");

    let mut dp = pac::Peripherals::take().unwrap();
    let mut cp = cortex_m::Peripherals::take().unwrap();

    let mut rcc = dp.RCC.configure().freeze(&mut dp.FLASH);
    systick::configure(&rcc, &mut cp.SYST);

    let gpioa = dp.GPIOA.split(&mut rcc);
    let mut led = cortex_m::interrupt::free(|cs| gpioa.pa5.into_push_pull_output(cs));

    let period = TICK_PERIOD.ticks_from_millis(BLINK_MS).unwrap();
    let mut heartbeat = Periodic::new(period, CLOCK.now());
    let mut led_on = false;

    loop {
        if heartbeat.poll(CLOCK.now()) {
            led_on = !led_on;
            if led_on {
                led.set_high().ok();
            } else {
                led.set_low().ok();
            }
        }
        cortex_m::asm::wfi();
    }
}
