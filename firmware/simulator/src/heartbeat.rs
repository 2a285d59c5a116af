//! Simulated heartbeat LED.

use std::convert::Infallible;

use embedded_hal::digital::{ErrorType, OutputPin, StatefulOutputPin};

/// Output pin that only remembers its level and how often it flipped.
#[derive(Default)]
pub struct SimHeartbeat {
    high: bool,
    toggles: u32,
}

impl SimHeartbeat {
    /// Number of level changes so far.
    pub const fn toggles(&self) -> u32 { self.toggles }
}

impl ErrorType for SimHeartbeat {
    type Error = Infallible;
}

impl OutputPin for SimHeartbeat {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        if self.high {
            self.toggles += 1;
        }
        self.high = false;
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        if !self.high {
            self.toggles += 1;
        }
        self.high = true;
        Ok(())
    }
}

impl StatefulOutputPin for SimHeartbeat {
    fn is_set_high(&mut self) -> Result<bool, Self::Error> { Ok(self.high) }

    fn is_set_low(&mut self) -> Result<bool, Self::Error> { Ok(!self.high) }
}
