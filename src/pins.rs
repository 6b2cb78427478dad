//! Ready-made [`PinDriver`] over `embedded-hal` digital pins.

use core::convert::Infallible;

use embedded_hal::digital::v2::{InputPin, OutputPin};

use crate::driver::PinDriver;

/// Drives a keypad through borrowed slices of trait-object pins.
///
/// Line handles are indices into the two slices, so keys that share a
/// physical line simply carry the same index. An out-of-range strobe index
/// is ignored and an out-of-range input index reads as released; handing
/// one to a key is a wiring mistake, not something scanning can recover
/// from.
pub struct DynPins<'o, 'i> {
    outputs: &'o mut [&'o mut dyn OutputPin<Error = Infallible>],
    inputs: &'i [&'i dyn InputPin<Error = Infallible>],
}

impl<'o, 'i> DynPins<'o, 'i> {
    pub fn new(
        outputs: &'o mut [&'o mut dyn OutputPin<Error = Infallible>],
        inputs: &'i [&'i dyn InputPin<Error = Infallible>],
    ) -> Self {
        Self { outputs, inputs }
    }
}

impl PinDriver for DynPins<'_, '_> {
    type Output = usize;
    type Input = usize;

    fn set_output_high(&mut self, line: &usize) {
        if let Some(pin) = self.outputs.get_mut(*line) {
            pin.set_high().unwrap();
        }
    }

    fn set_output_low(&mut self, line: &usize) {
        if let Some(pin) = self.outputs.get_mut(*line) {
            pin.set_low().unwrap();
        }
    }

    fn read_input(&mut self, line: &usize) -> bool {
        match self.inputs.get(*line) {
            Some(pin) => pin.is_high().unwrap(),
            None => false,
        }
    }
}
