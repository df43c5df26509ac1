//! Touch controller identification
//!
//! There is no common identification protocol across the two families,
//! so detection is address-driven with different levels of trust:
//!
//! - **FT6x36 (0x38)**: other parts on this bus answer at 0x38 too, so an
//!   ACK alone is not enough. The chip id register has to match.
//! - **GT911 (0x5D / 0x14)**: nothing else on the known board population
//!   answers there, and its register protocol tolerates being polled
//!   blind, so an ACK selects it. Its product id is read afterwards for
//!   diagnostics and never checked.
//!
//! FT6x36 is tried first. The result is deterministic for a given bus.

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;
use touchlink_core::touch::{
    ControllerIdentity, FT6X36_ADDRESS, GT911_ADDRESS_PRIMARY, GT911_ADDRESS_SECONDARY,
};
use touchlink_hal::FlexPin;

use super::ft6x36;
use crate::bus::{probe, DriverError};

/// Reset pulse low / settle time (ms)
const RESET_PULSE_MS: u32 = 10;

/// Optional controller reset and interrupt lines
pub struct ControlLines<P> {
    /// Reset line (active low)
    pub reset: Option<P>,
    /// Interrupt line; also selects the GT911 address during reset
    pub interrupt: Option<P>,
}

impl<P> ControlLines<P> {
    /// Lines as wired on the board
    pub fn new(reset: Option<P>, interrupt: Option<P>) -> Self {
        Self { reset, interrupt }
    }

    /// Neither line wired
    pub fn none() -> Self {
        Self {
            reset: None,
            interrupt: None,
        }
    }
}

/// Best-effort hardware reset
///
/// Holds INT low through the RST pulse so a GT911 latches address 0x5D.
/// Harmless for FT6x36. Does nothing but configure INT if RST is not
/// wired.
pub fn reset_pulse<P: FlexPin, D: DelayNs>(lines: &mut ControlLines<P>, delay: &mut D) {
    if let Some(rst) = lines.reset.as_mut() {
        rst.set_as_output();
        rst.set_high();
    }
    if let Some(int) = lines.interrupt.as_mut() {
        int.set_as_input_pullup();
    }

    let Some(rst) = lines.reset.as_mut() else {
        debug!("[touch] no reset line, skipping reset pulse");
        return;
    };

    if let Some(int) = lines.interrupt.as_mut() {
        int.set_as_output();
        int.set_low();
    }
    rst.set_low();
    delay.delay_ms(RESET_PULSE_MS);
    rst.set_high();
    delay.delay_ms(RESET_PULSE_MS);
    if let Some(int) = lines.interrupt.as_mut() {
        int.set_as_input_pullup();
    }
}

/// Work out which touch controller is on the bus
///
/// Runs one deterministic pass and never fails: "nothing found" is
/// [`ControllerIdentity::NONE`].
pub fn detect<I, P, D>(i2c: &mut I, lines: &mut ControlLines<P>, delay: &mut D) -> ControllerIdentity
where
    I: I2c,
    P: FlexPin,
    D: DelayNs,
{
    reset_pulse(lines, delay);

    let has_ft = probe(i2c, FT6X36_ADDRESS);
    info!("[touch][probe] 0x38={}", has_ft);

    if has_ft {
        match ft6x36::identify(i2c) {
            Ok(_) => {
                info!("[touch] FT6x36 detected @ 0x38");
                return ControllerIdentity::ft6x36();
            }
            Err(DriverError::InvalidResponse) => {
                warn!("[touch][FT] 0x38 ACKed but IDs not FT -> ignoring");
            }
            Err(DriverError::I2c(_)) => {
                warn!("[touch][FT] 0x38 ACKed but ID read failed -> ignoring");
            }
        }
    }

    let has_gt_primary = probe(i2c, GT911_ADDRESS_PRIMARY);
    let has_gt_secondary = probe(i2c, GT911_ADDRESS_SECONDARY);
    info!(
        "[touch][probe] 0x5D={} 0x14={}",
        has_gt_primary,
        has_gt_secondary
    );

    if has_gt_primary || has_gt_secondary {
        let address = if has_gt_primary {
            GT911_ADDRESS_PRIMARY
        } else {
            GT911_ADDRESS_SECONDARY
        };
        info!("[touch] GT911 selected @ {=u8:#x}", address);
        return ControllerIdentity::gt911(address);
    }

    info!("[touch] No FT/GT touch IC found (0x38/0x5D/0x14)");
    ControllerIdentity::NONE
}
