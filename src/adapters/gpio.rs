//! Raspberry Pi GPIO adapter — bridges the real alert line to
//! [`AlertPinPort`].
//!
//! This is the only module in the system that touches actual hardware,
//! so it is the only module gated on the `rpi` feature.  Host-target
//! tests drive the monitor core through mock ports instead.

use std::time::Duration;

use rppal::gpio::{Gpio, InputPin, Level, Trigger};

use crate::ports::{AlertPinPort, GpioError, PinLevel};

/// The supervisor alert line, claimed from the Pi's GPIO controller.
///
/// The line is configured as a floating input — the supervisor board
/// drives it actively in both directions, so no internal pull is wanted.
pub struct GpioAlertPin {
    pin: InputPin,
}

impl GpioAlertPin {
    /// Claim `bcm_pin` and configure it as an input.
    ///
    /// Fails if the GPIO character device cannot be opened (not a Pi,
    /// or insufficient permissions) or the line is held by another
    /// process.
    pub fn claim(bcm_pin: u8) -> Result<Self, GpioError> {
        let gpio = Gpio::new().map_err(|e| GpioError::Claim(e.to_string()))?;
        let pin = gpio
            .get(bcm_pin)
            .map_err(|e| GpioError::Claim(e.to_string()))?
            .into_input();
        Ok(Self { pin })
    }
}

impl AlertPinPort for GpioAlertPin {
    fn level(&mut self) -> Result<PinLevel, GpioError> {
        Ok(match self.pin.read() {
            Level::Low => PinLevel::Low,
            Level::High => PinLevel::High,
        })
    }

    fn wait_rising_edge(&mut self) -> Result<(), GpioError> {
        // No debounce: the supervisor output is already clean.
        self.pin
            .set_interrupt(Trigger::RisingEdge, None::<Duration>)
            .map_err(|e| GpioError::EdgeWait(e.to_string()))?;

        loop {
            // reset=false keeps an edge that fired between arming and
            // polling. `None` timeout blocks indefinitely; `Ok(None)` is
            // only reported for a timed poll, so loop for good measure.
            match self
                .pin
                .poll_interrupt(false, None)
                .map_err(|e| GpioError::EdgeWait(e.to_string()))?
            {
                Some(_event) => return Ok(()),
                None => continue,
            }
        }
    }

    fn release(mut self) -> Result<(), GpioError> {
        self.pin
            .clear_interrupt()
            .map_err(|e| GpioError::Release(e.to_string()))?;
        // Dropping the InputPin hands the line back to the controller
        // and restores its pre-claim mode.
        Ok(())
    }
}
