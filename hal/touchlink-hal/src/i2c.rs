//! I2C bus controller abstractions
//!
//! Transactions go through `embedded_hal::i2c::I2c`. What that trait cannot
//! express is taking the peripheral off the pins (so the lines can be
//! bit-banged during bus recovery) and bringing it back at a given clock.

/// I2C bus master controller
///
/// Implemented by the board layer for the peripheral that owns SDA/SCL.
pub trait BusController {
    /// Detach the peripheral from the bus pins
    ///
    /// After this call the pins may be driven as plain GPIO.
    fn release(&mut self);

    /// (Re)attach the peripheral to the bus pins and start it
    fn begin(&mut self, config: I2cConfig);

    /// Change the clock of a running controller
    fn set_frequency(&mut self, frequency: u32);
}

/// I2C configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct I2cConfig {
    /// Clock frequency in Hz
    pub frequency: u32,
}

impl Default for I2cConfig {
    fn default() -> Self {
        Self {
            frequency: 100_000, // 100kHz standard mode
        }
    }
}

impl I2cConfig {
    /// Standard mode (100 kHz)
    ///
    /// Used for recovery and probing, where slow edges are the safer choice.
    pub const STANDARD: Self = Self { frequency: 100_000 };
}
