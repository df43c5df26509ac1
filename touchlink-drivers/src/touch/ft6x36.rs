//! FT6x36 touch controller (FT6206 / FT6236 / FT6336)
//!
//! FocalTech parts use 8-bit register addresses at a fixed bus address of
//! 0x38. Touch status and contact records are read through the
//! `ft6x06-rs` driver, which covers the whole FT6x06/FT6x36 register map
//! for polling. Only two things stay as raw register access:
//!
//! - the identification check used during detection, because an ACK at
//!   0x38 alone proves nothing on this bus
//! - the touch threshold written at start-up
//!
//! The decoder needs no acknowledge step; the controller refreshes its
//! registers on its own.

use embedded_hal::i2c::I2c;
use ft6x06_rs::FT6x06;
use touchlink_core::touch::{TouchPoint, FT6X36_ADDRESS};

use super::TouchDecoder;
use crate::bus::{read_reg8, write_reg8, DriverError};

/// FT6x36 register addresses
pub mod reg {
    /// Number of touch points (3:0)
    pub const TD_STATUS: u8 = 0x02;
    /// First contact, X high nibble + event flag
    pub const P1_XH: u8 = 0x03;
    /// Touch detection threshold
    pub const TH_GROUP: u8 = 0x80;
    /// Chip identifier
    pub const CHIP_ID: u8 = 0xA8;
    /// Vendor / firmware identifier
    pub const VENDOR_ID: u8 = 0xA3;
}

/// Chip identifier values accepted as FT6x36
pub const VALID_CHIP_IDS: [u8; 2] = [0x06, 0x36];

/// Identification bytes read during detection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Ft6x36Ids {
    /// Value of [`reg::CHIP_ID`]
    pub chip_id: u8,
    /// Value of [`reg::VENDOR_ID`]
    pub vendor_id: u8,
}

impl Ft6x36Ids {
    /// Returns true if the chip id is one of the known FT6x36 values
    pub fn is_ft6x36(&self) -> bool {
        VALID_CHIP_IDS.contains(&self.chip_id)
    }
}

/// Read and check the identification registers at 0x38
///
/// Both one-byte reads must succeed and the chip id must be known;
/// otherwise the device at 0x38 is something else sharing the bus.
pub fn identify<I: I2c>(i2c: &mut I) -> Result<Ft6x36Ids, DriverError<I::Error>> {
    let mut chip = [0u8; 1];
    let mut vendor = [0u8; 1];
    read_reg8(i2c, FT6X36_ADDRESS, reg::CHIP_ID, &mut chip)?;
    read_reg8(i2c, FT6X36_ADDRESS, reg::VENDOR_ID, &mut vendor)?;

    let ids = Ft6x36Ids {
        chip_id: chip[0],
        vendor_id: vendor[0],
    };
    info!(
        "[touch][FT] CHIPID={=u8:#x} VENDID={=u8:#x}",
        ids.chip_id,
        ids.vendor_id
    );

    if ids.is_ft6x36() {
        Ok(ids)
    } else {
        Err(DriverError::InvalidResponse)
    }
}

/// Library-backed FT6x36 decoder
#[derive(Debug, Clone, Default)]
pub struct Ft6x36Decoder;

impl Ft6x36Decoder {
    /// Decoder for the controller at 0x38
    pub fn new() -> Self {
        Self
    }

    /// Bring the controller up with a touch threshold
    ///
    /// This corresponds to the `TH_GROUP` register. Lower is more
    /// sensitive.
    pub fn init<I: I2c>(&mut self, i2c: &mut I, threshold: u8) -> Result<(), DriverError<I::Error>> {
        write_reg8(i2c, FT6X36_ADDRESS, reg::TH_GROUP, threshold)
    }
}

impl<I: I2c> TouchDecoder<I> for Ft6x36Decoder {
    fn read(&mut self, i2c: &mut I, _now_ms: u32) -> Option<TouchPoint> {
        // The driver borrows the bus only for this poll
        let mut device = FT6x06::new(i2c);
        match device.get_touch_event() {
            Ok(Some(event)) => Some(touch_point_from_library(&event.primary_point)),
            Ok(None) | Err(_) => None,
        }
    }
}

/// Convert the driver's primary contact into a [`TouchPoint`]
fn touch_point_from_library(point: &ft6x06_rs::TouchPoint) -> TouchPoint {
    TouchPoint {
        x: point.x,
        y: point.y,
        size: u16::from(point.weight),
        id: point.touch_id,
        valid: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{MockDevice, MockI2c};

    fn ft_bus(chip_id: u8) -> MockI2c {
        let mut bus = MockI2c::new();
        let mut dev = MockDevice::narrow(FT6X36_ADDRESS);
        dev.set(u16::from(reg::CHIP_ID), chip_id);
        dev.set(u16::from(reg::VENDOR_ID), 0x11);
        bus.add_device(dev);
        bus
    }

    #[test]
    fn test_identify_accepts_known_chip_ids() {
        for chip_id in VALID_CHIP_IDS {
            let mut bus = ft_bus(chip_id);
            let ids = identify(&mut bus).unwrap();
            assert_eq!(ids.chip_id, chip_id);
            assert_eq!(ids.vendor_id, 0x11);
        }
    }

    #[test]
    fn test_identify_rejects_unknown_chip_id() {
        let mut bus = ft_bus(0x64);
        assert!(matches!(
            identify(&mut bus),
            Err(DriverError::InvalidResponse)
        ));
    }

    #[test]
    fn test_identify_needs_both_reads() {
        let mut bus = ft_bus(0x36);
        bus.device_mut(FT6X36_ADDRESS).unwrap().failing_register = Some(u16::from(reg::VENDOR_ID));
        assert!(matches!(identify(&mut bus), Err(DriverError::I2c(_))));
    }

    #[test]
    fn test_init_writes_threshold() {
        let mut bus = ft_bus(0x36);
        let mut decoder = Ft6x36Decoder::new();
        decoder.init(&mut bus, 30).unwrap();
        assert_eq!(bus.writes.as_slice(), &[(0x38, 0x80, 30)]);
    }

    #[test]
    fn test_init_failure_is_reported() {
        let mut bus = ft_bus(0x36);
        bus.device_mut(FT6X36_ADDRESS).unwrap().fail_writes = true;
        let mut decoder = Ft6x36Decoder::new();
        assert!(matches!(decoder.init(&mut bus, 30), Err(DriverError::I2c(_))));
    }

    #[test]
    fn test_decoder_reads_first_point() {
        let mut bus = ft_bus(0x36);
        let dev = bus.device_mut(FT6X36_ADDRESS).unwrap();
        dev.set(u16::from(reg::TD_STATUS), 0x01);
        // x = 0x123 (press-down flag), y = 0x045 with touch id 1
        dev.set_bytes(u16::from(reg::P1_XH), &[0x01, 0x23, 0x10, 0x45, 0x20, 0x30]);

        let mut decoder = Ft6x36Decoder::new();
        let point = decoder.read(&mut bus, 0).unwrap();

        assert_eq!(point.x, 0x123);
        assert_eq!(point.y, 0x045);
        assert_eq!(point.id, 1);
        assert_eq!(point.size, 0x20);
        assert!(point.valid);
        // No acknowledge write for this family
        assert!(bus.writes.is_empty());
    }

    #[test]
    fn test_decoder_uses_first_of_two_contacts() {
        let mut bus = ft_bus(0x36);
        let dev = bus.device_mut(FT6X36_ADDRESS).unwrap();
        dev.set(u16::from(reg::TD_STATUS), 0x02);
        dev.set_bytes(u16::from(reg::P1_XH), &[0x80, 0x64, 0x00, 0xC8, 0, 0]);
        dev.set_bytes(0x09, &[0x81, 0x00, 0x11, 0x00, 0, 0]);

        let mut decoder = Ft6x36Decoder::new();
        let point = decoder.read(&mut bus, 0).unwrap();

        assert_eq!((point.x, point.y), (100, 200));
        assert_eq!(point.id, 0);
    }

    #[test]
    fn test_decoder_no_touch() {
        let mut bus = ft_bus(0x36);
        let mut decoder = Ft6x36Decoder::new();

        assert_eq!(decoder.read(&mut bus, 0), None);

        // More than two points is treated as garbage
        bus.device_mut(FT6X36_ADDRESS)
            .unwrap()
            .set(u16::from(reg::TD_STATUS), 0x0F);
        assert_eq!(decoder.read(&mut bus, 0), None);
        assert!(bus.writes.is_empty());
    }

    #[test]
    fn test_decoder_bus_error_is_no_contact() {
        let mut bus = ft_bus(0x36);
        bus.device_mut(FT6X36_ADDRESS).unwrap().fail_reads = true;
        let mut decoder = Ft6x36Decoder::new();
        assert_eq!(decoder.read(&mut bus, 0), None);
    }
}
