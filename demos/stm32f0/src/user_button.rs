use embedded_hal::digital::v2::InputPin;
use stm32f0xx_hal::gpio::{gpioc, Floating, Input, PullUp};
use switch_debounce::PinReader;

/// User button on PC13, wired active-low with the internal pull-up.
pub struct UserButton(gpioc::PC13<Input<PullUp>>);

impl UserButton {
    /// Configure PC13 as a pulled-up input.
    pub fn new(pc13: gpioc::PC13<Input<Floating>>) -> Self {
        let pin = cortex_m::interrupt::free(|cs| pc13.into_pull_up_input(cs));
        UserButton(pin)
    }
}

impl PinReader for UserButton {
    fn read_pin(&mut self) -> bool {
        // GPIO reads on this part are infallible
        self.0.is_high().unwrap_or(true)
    }
}
