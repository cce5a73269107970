#![no_std]
#![no_main]

use cortex_m_rt::entry;
use panic_halt as _;
use rtt_target::{rprintln, rtt_init_print};
use stm32f0xx_hal::{pac, prelude::*};

use stm32f0_demos::systick::{self, CLOCK, TICK_PERIOD};
use stm32f0_demos::user_button::UserButton;
use switch_debounce::{DebounceConfig, DebounceSession, Polarity};

/// Debounce window for the user button
const DEBOUNCE_MS: u32 = 50;

/// SysTick interrupt handler - called every 1ms
#[cortex_m_rt::exception]
fn SysTick() {
    systick::tick();
}

#[entry]
fn main() -> ! {
    rtt_init_print!();
    rprintln!("=== Debounced Toggle Example ===");

    let mut dp = pac::Peripherals::take().unwrap();
    let mut cp = cortex_m::Peripherals::take().unwrap();

    let mut rcc = dp.RCC.configure().freeze(&mut dp.FLASH);
    systick::configure(&rcc, &mut cp.SYST);

    let gpioa = dp.GPIOA.split(&mut rcc);
    let gpioc = dp.GPIOC.split(&mut rcc);

    let mut led = cortex_m::interrupt::free(|cs| gpioa.pa5.into_push_pull_output(cs));
    led.set_low().ok();
    let mut led_on = false;

    let config = DebounceConfig::from_millis(DEBOUNCE_MS, TICK_PERIOD)
        .unwrap()
        .with_polarity(Polarity::ActiveLow);
    let mut button = DebounceSession::new(UserButton::new(gpioc.pc13), &CLOCK, config);

    rprintln!("Button on PC13, {} tick debounce", button.interval());

    loop {
        if let Some(press) = button.poll() {
            led_on = !led_on;
            if led_on {
                led.set_high().ok();
            } else {
                led.set_low().ok();
            }
            rprintln!("Press at tick {} - LED {}", press.at, if led_on { "on" } else { "off" });
        }
    }
}
