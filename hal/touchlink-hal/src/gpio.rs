//! GPIO pin abstractions
//!
//! Bus recovery and the controller reset pulse both need pins that can be
//! flipped between a pulled-up input and a push-pull output at runtime.

/// Digital pin that can change direction at runtime
///
/// Implementations handle the pad/mux registers for the specific chip.
pub trait FlexPin {
    /// Configure as input with the internal pull-up enabled
    fn set_as_input_pullup(&mut self);

    /// Configure as output
    ///
    /// The output level is whatever was last set; callers set the level
    /// explicitly right after switching.
    fn set_as_output(&mut self);

    /// Drive the pin high (logic 1)
    fn set_high(&mut self);

    /// Drive the pin low (logic 0)
    fn set_low(&mut self);

    /// Check if the pin reads high (logic 1)
    fn is_high(&self) -> bool;

    /// Check if the pin reads low (logic 0)
    fn is_low(&self) -> bool {
        !self.is_high()
    }
}

impl<T: FlexPin + ?Sized> FlexPin for &mut T {
    fn set_as_input_pullup(&mut self) {
        T::set_as_input_pullup(self)
    }

    fn set_as_output(&mut self) {
        T::set_as_output(self)
    }

    fn set_high(&mut self) {
        T::set_high(self)
    }

    fn set_low(&mut self) {
        T::set_low(self)
    }

    fn is_high(&self) -> bool {
        T::is_high(self)
    }
}
