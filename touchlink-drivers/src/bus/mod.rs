//! Shared I2C bus helpers
//!
//! Register access for 8-bit (FocalTech) and 16-bit big-endian (Goodix)
//! register maps, address probing, scanning, and bus recovery.
//!
//! Every helper is a single bounded transaction. Nothing here retries:
//! the bus is shared with other peripherals and a failed transaction is
//! reported to the caller, which decides what "failed" means.

pub mod recovery;
pub mod scan;

pub use recovery::{recover_bus, BusLines, BusRecovery};
pub use scan::{scan, ScanReport};

use embedded_hal::i2c::I2c;

/// A driver error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DriverError<E> {
    /// A generic I2C communication error (NACK, arbitration, timeout).
    I2c(E),
    /// The device answered with something unexpected.
    InvalidResponse,
}

impl<E> From<E> for DriverError<E> {
    fn from(value: E) -> Self {
        Self::I2c(value)
    }
}

/// Check whether a device acknowledges its address
///
/// Issues a zero-length write. A NACK is the normal "nobody home" answer,
/// not an error.
pub fn probe<I: I2c>(i2c: &mut I, address: u8) -> bool {
    i2c.write(address, &[]).is_ok()
}

/// Read from an 8-bit register address
pub fn read_reg8<I: I2c>(
    i2c: &mut I,
    address: u8,
    reg: u8,
    buf: &mut [u8],
) -> Result<(), DriverError<I::Error>> {
    i2c.write_read(address, &[reg], buf)?;
    Ok(())
}

/// Write one byte to an 8-bit register address
pub fn write_reg8<I: I2c>(
    i2c: &mut I,
    address: u8,
    reg: u8,
    value: u8,
) -> Result<(), DriverError<I::Error>> {
    i2c.write(address, &[reg, value])?;
    Ok(())
}

/// Read from a 16-bit register address (sent big-endian)
pub fn read_reg16<I: I2c>(
    i2c: &mut I,
    address: u8,
    reg: u16,
    buf: &mut [u8],
) -> Result<(), DriverError<I::Error>> {
    i2c.write_read(address, &reg.to_be_bytes(), buf)?;
    Ok(())
}

/// Write one byte to a 16-bit register address (sent big-endian)
pub fn write_reg16<I: I2c>(
    i2c: &mut I,
    address: u8,
    reg: u16,
    value: u8,
) -> Result<(), DriverError<I::Error>> {
    let [hi, lo] = reg.to_be_bytes();
    i2c.write(address, &[hi, lo, value])?;
    Ok(())
}

/// Read a little-endian u16 at a byte offset
///
/// Register payloads are decoded by offset rather than by overlaying a
/// packed struct on the buffer.
pub fn le_u16(buf: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([buf[offset], buf[offset + 1]])
}
