//! Touch configuration type definitions
//!
//! The defaults describe the reference board: a 800x480 RGB panel whose
//! touch controller shares SDA=8/SCL=9 with a CH422G I/O expander.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub use crate::orientation::OrientationConfig;

/// Default SDA pin
pub const DEFAULT_SDA_PIN: u8 = 8;

/// Default SCL pin
pub const DEFAULT_SCL_PIN: u8 = 9;

/// Bus clock used once a controller has been found
pub const DEFAULT_BUS_FREQUENCY: u32 = 400_000;

/// Default FT6x36 touch detection threshold
pub const DEFAULT_TOUCH_THRESHOLD: u8 = 30;

/// I2C bus pin assignment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BusPins {
    /// Data line GPIO
    pub sda: u8,
    /// Clock line GPIO
    pub scl: u8,
}

impl Default for BusPins {
    fn default() -> Self {
        Self {
            sda: DEFAULT_SDA_PIN,
            scl: DEFAULT_SCL_PIN,
        }
    }
}

/// Optional controller reset / interrupt lines
///
/// `None` means the line is not wired on this board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ControlPins {
    /// Controller reset line (active low)
    pub reset: Option<u8>,
    /// Controller interrupt line
    pub interrupt: Option<u8>,
}

/// Screen geometry in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScreenGeometry {
    /// Horizontal resolution
    pub width: u16,
    /// Vertical resolution
    pub height: u16,
}

impl Default for ScreenGeometry {
    fn default() -> Self {
        Self {
            width: 800,
            height: 480,
        }
    }
}

/// Complete touch subsystem configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TouchConfig {
    /// Shared bus pins
    pub bus: BusPins,
    /// Bus clock after detection (Hz)
    pub frequency: u32,
    /// Panel size used for clamping
    pub screen: ScreenGeometry,
    /// Mounting orientation
    pub orientation: OrientationConfig,
    /// Optional reset / interrupt lines
    pub control: ControlPins,
    /// FT6x36 touch threshold register value
    pub threshold: u8,
}

impl Default for TouchConfig {
    fn default() -> Self {
        Self {
            bus: BusPins::default(),
            frequency: DEFAULT_BUS_FREQUENCY,
            screen: ScreenGeometry::default(),
            orientation: OrientationConfig::default(),
            control: ControlPins::default(),
            threshold: DEFAULT_TOUCH_THRESHOLD,
        }
    }
}

/// Configuration validation / parse errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Value could not be parsed for its key
    InvalidValue,
    /// Key is not part of the `[touch]` section
    UnknownKey,
    /// Line is neither a section header nor `key = value`
    InvalidLine,
    /// Screen width or height is zero
    InvalidGeometry,
    /// SDA and SCL are the same pin
    PinConflict,
    /// Bus frequency is zero
    InvalidFrequency,
}

impl TouchConfig {
    /// Check the config for values the driver cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.screen.width == 0 || self.screen.height == 0 {
            return Err(ConfigError::InvalidGeometry);
        }
        if self.bus.sda == self.bus.scl {
            return Err(ConfigError::PinConflict);
        }
        if self.frequency == 0 {
            return Err(ConfigError::InvalidFrequency);
        }
        Ok(())
    }
}
