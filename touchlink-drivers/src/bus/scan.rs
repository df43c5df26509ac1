//! I2C address scanner
//!
//! Diagnostic sweep of the 7-bit address space. Each address costs exactly
//! one zero-length write; a NACK just means "absent".

use core::fmt;

use embedded_hal::i2c::I2c;
use heapless::Vec;

use super::probe;

/// First address probed (0x00 is the general call address)
pub const SCAN_FIRST: u8 = 0x01;

/// Last address probed (0x7F is reserved)
pub const SCAN_LAST: u8 = 0x7E;

const SCAN_CAPACITY: usize = (SCAN_LAST - SCAN_FIRST + 1) as usize;

/// Addresses that acknowledged during a scan, ascending
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanReport {
    found: Vec<u8, SCAN_CAPACITY>,
}

impl ScanReport {
    /// Acknowledging addresses
    pub fn addresses(&self) -> &[u8] {
        &self.found
    }

    /// Returns true if `address` acknowledged
    pub fn contains(&self, address: u8) -> bool {
        self.found.contains(&address)
    }

    /// Returns true if nothing acknowledged
    pub fn is_empty(&self) -> bool {
        self.found.is_empty()
    }
}

impl fmt::Display for ScanReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("I2C scan:")?;
        if self.found.is_empty() {
            return f.write_str(" (none)");
        }
        for address in &self.found {
            write!(f, " 0x{:02X}", address)?;
        }
        Ok(())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ScanReport {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "I2C scan:");
        if self.found.is_empty() {
            defmt::write!(f, " (none)");
        }
        for address in &self.found {
            defmt::write!(f, " {=u8:#x}", *address);
        }
    }
}

/// Probe every address from [`SCAN_FIRST`] to [`SCAN_LAST`]
pub fn scan<I: I2c>(i2c: &mut I) -> ScanReport {
    let mut report = ScanReport::default();
    for address in SCAN_FIRST..=SCAN_LAST {
        if probe(i2c, address) {
            // Capacity equals the address range, so this cannot overflow
            let _ = report.found.push(address);
        }
    }
    report
}
