//! GT911 touch controller, raw register protocol
//!
//! Goodix parts use 16-bit big-endian register addresses. The bus address
//! is 0x5D or 0x14 depending on the INT level latched at reset, which is a
//! board strap outside software control.
//!
//! # Status handshake
//!
//! The status register at 0x814E carries a "buffer ready" flag (bit 7)
//! and the contact count (bits 3:0). After the host has seen the ready
//! flag it must write 0 back, or the controller never raises the flag
//! again and input freezes. The write happens on every ready poll, even
//! when the record turned out to be garbage.
//!
//! Only the first of up to five contact records is read.

use embedded_hal::i2c::I2c;
use touchlink_core::touch::TouchPoint;

use super::TouchDecoder;
use crate::bus::{le_u16, read_reg16, write_reg16};

/// GT911 register addresses
pub mod reg {
    /// X output max (u16 LE), Y output max follows at 0x804A
    pub const X_RESOLUTION: u16 = 0x8048;
    /// Product id, 4 ASCII bytes
    pub const PRODUCT_ID: u16 = 0x8140;
    /// Buffer status: [7] ready, [3:0] contact count
    pub const STATUS: u16 = 0x814E;
    /// First contact record
    pub const POINT_1: u16 = 0x8150;
}

/// Buffer ready flag in the status register
pub const STATUS_BUFFER_READY: u8 = 0x80;

/// Contact count field in the status register
pub const STATUS_COUNT_MASK: u8 = 0x0F;

/// Coordinate value meaning "no data / torn read"
pub const COORD_SENTINEL: u16 = 0xFFFF;

/// Minimum time between raw diagnostic dumps (ms)
pub const DUMP_INTERVAL_MS: u32 = 500;

/// Contact record: x u16 LE, y u16 LE, size u16 LE, id u8, reserved u8
pub const POINT_RECORD_LEN: usize = 8;

/// Decoded status register
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Status(pub u8);

impl Status {
    /// Controller has a fresh buffer for the host
    pub fn buffer_ready(&self) -> bool {
        self.0 & STATUS_BUFFER_READY != 0
    }

    /// Number of contacts reported
    pub fn contact_count(&self) -> u8 {
        self.0 & STATUS_COUNT_MASK
    }
}

/// Decode the first contact record
///
/// The point is valid only if the controller reported at least one
/// contact and neither coordinate is the all-ones sentinel.
pub fn decode_point_record(record: &[u8; POINT_RECORD_LEN], status: Status) -> TouchPoint {
    let x = le_u16(record, 0);
    let y = le_u16(record, 2);
    TouchPoint {
        x,
        y,
        size: le_u16(record, 4),
        id: record[6],
        valid: status.contact_count() > 0 && x != COORD_SENTINEL && y != COORD_SENTINEL,
    }
}

/// Product information read at detection time, for diagnostics only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Gt911Info {
    /// ASCII product id, e.g. `b"911\0"`
    pub product_id: Option<[u8; 4]>,
    /// Configured output resolution (x, y)
    pub resolution: Option<(u16, u16)>,
}

/// Read product id and configured resolution
///
/// Best effort: either field is `None` if its read failed. Nothing here
/// decides whether the device really is a GT911.
pub fn read_info<I: I2c>(i2c: &mut I, address: u8) -> Gt911Info {
    let mut info = Gt911Info::default();

    let mut id = [0u8; 4];
    if read_reg16(i2c, address, reg::PRODUCT_ID, &mut id).is_ok() {
        info!(
            "[touch][GT] Product ID: {=[u8]:a}",
            &id[..]
        );
        info.product_id = Some(id);
    }

    let mut res = [0u8; 4];
    if read_reg16(i2c, address, reg::X_RESOLUTION, &mut res).is_ok() {
        let resolution = (le_u16(&res, 0), le_u16(&res, 2));
        info!("[touch][GT] cfg: {} x {}", resolution.0, resolution.1);
        info.resolution = Some(resolution);
    }

    info
}

/// Rate limiter for the raw diagnostic dump
#[derive(Debug, Clone)]
pub struct DumpThrottle {
    interval_ms: u32,
    last_ms: Option<u32>,
}

impl DumpThrottle {
    /// Allow one dump per `interval_ms`
    pub const fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms,
            last_ms: None,
        }
    }

    /// Returns true (and arms the next interval) if a dump is due
    pub fn ready(&mut self, now_ms: u32) -> bool {
        let due = match self.last_ms {
            None => true,
            Some(last) => now_ms.wrapping_sub(last) > self.interval_ms,
        };
        if due {
            self.last_ms = Some(now_ms);
        }
        due
    }
}

/// GT911 decoder using raw register reads
#[derive(Debug, Clone)]
pub struct Gt911Decoder {
    address: u8,
    throttle: DumpThrottle,
}

impl Gt911Decoder {
    /// Decoder for the controller at `address`
    pub fn new(address: u8) -> Self {
        Self {
            address,
            throttle: DumpThrottle::new(DUMP_INTERVAL_MS),
        }
    }
}

impl<I: I2c> TouchDecoder<I> for Gt911Decoder {
    fn read(&mut self, i2c: &mut I, now_ms: u32) -> Option<TouchPoint> {
        let mut status = [0u8; 1];
        read_reg16(i2c, self.address, reg::STATUS, &mut status).ok()?;
        let status = Status(status[0]);

        if !status.buffer_ready() {
            return None;
        }

        // Some firmwares raise the flag before the count is filled in, so
        // the record is read whatever the count says.
        let mut record = [0u8; POINT_RECORD_LEN];
        let point = match read_reg16(i2c, self.address, reg::POINT_1, &mut record) {
            Ok(()) => {
                let point = decode_point_record(&record, status);
                if self.throttle.ready(now_ms) {
                    debug!(
                        "[touch][GT] status={=u8:#x} n={} peek: x={} y={} id={} size={}",
                        status.0,
                        status.contact_count(),
                        point.x,
                        point.y,
                        point.id,
                        point.size
                    );
                }
                Some(point)
            }
            Err(_) => None,
        };

        // Clear buffer-ready on every ready poll
        if write_reg16(i2c, self.address, reg::STATUS, 0x00).is_err() {
            debug!("[touch][GT] status clear failed");
        }

        point.filter(|p| p.valid)
    }
}
