//! I2C bus recovery
//!
//! A device reset (or a brown-out) in the middle of a read can leave a
//! slave holding SDA low while it waits for clocks that will never come.
//! The controller then sees a permanently busy bus. Clocking SCL by hand
//! until the slave finishes its byte, then issuing a STOP, returns the bus
//! to idle.
//!
//! Recovery runs once at start-up. It is not used when a poll fails: the
//! bus is shared, and bit-banging it mid-operation would disturb the other
//! peripheral.

use embedded_hal::delay::DelayNs;
use touchlink_hal::{BusController, FlexPin, I2cConfig};

/// Maximum SCL pulses issued while SDA stays low
///
/// A stalled slave needs at most 9 clocks to finish a byte plus ACK; 16
/// covers that with margin.
pub const MAX_RECOVERY_CLOCKS: u8 = 16;

/// SCL half period during manual clocking (µs), about 100 kHz
const HALF_PERIOD_US: u32 = 5;

/// The two bus lines as plain GPIO
pub struct BusLines<SCL, SDA> {
    /// Clock line
    pub scl: SCL,
    /// Data line
    pub sda: SDA,
}

impl<SCL, SDA> BusLines<SCL, SDA> {
    /// Bundle the two lines
    pub fn new(scl: SCL, sda: SDA) -> Self {
        Self { scl, sda }
    }
}

/// Outcome of a recovery attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BusRecovery {
    /// SDA was already high; nothing to do
    AlreadyIdle,
    /// SDA was low and is high after clocking
    Released {
        /// SCL pulses issued
        clocks: u8,
    },
    /// SDA still low after the full clock budget and STOP
    StillStuck,
}

impl BusRecovery {
    /// Returns true if the bus ended up idle
    pub fn is_idle(&self) -> bool {
        !matches!(self, BusRecovery::StillStuck)
    }
}

/// Force the bus back to idle (both lines high)
///
/// The controller is always re-initialized at standard mode before this
/// returns, whether or not recovery succeeded. Worst-case duration is
/// bounded by [`MAX_RECOVERY_CLOCKS`] pulses plus a few fixed delays.
pub fn recover_bus<B, SCL, SDA, D>(
    bus: &mut B,
    lines: &mut BusLines<SCL, SDA>,
    delay: &mut D,
) -> BusRecovery
where
    B: BusController,
    SCL: FlexPin,
    SDA: FlexPin,
    D: DelayNs,
{
    let BusLines { scl, sda } = lines;

    bus.release();
    scl.set_as_input_pullup();
    sda.set_as_input_pullup();
    delay.delay_ms(1);

    if sda.is_high() {
        bus.begin(I2cConfig::STANDARD);
        debug!("[i2c] bus idle");
        return BusRecovery::AlreadyIdle;
    }

    warn!("[i2c] SDA held low, clocking SCL");

    // Clock SCL until the slave lets go of SDA
    scl.set_as_output();
    let mut clocks = 0u8;
    while clocks < MAX_RECOVERY_CLOCKS && sda.is_low() {
        scl.set_high();
        delay.delay_us(HALF_PERIOD_US);
        scl.set_low();
        delay.delay_us(HALF_PERIOD_US);
        clocks += 1;
    }

    // STOP: SDA rises while SCL is high
    sda.set_as_output();
    sda.set_low();
    delay.delay_us(HALF_PERIOD_US);
    scl.set_high();
    delay.delay_us(HALF_PERIOD_US);
    sda.set_high();
    delay.delay_us(HALF_PERIOD_US);

    bus.begin(I2cConfig::STANDARD);
    delay.delay_ms(3);

    if sda.is_high() {
        info!("[i2c] bus released after {} clocks", clocks);
        BusRecovery::Released { clocks }
    } else {
        warn!("[i2c] bus still stuck after {} clocks", clocks);
        BusRecovery::StillStuck
    }
}
