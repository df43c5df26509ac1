//! Touch controller identification, decoding, and pointer output
//!
//! # Data flow
//!
//! ```text
//! recover_bus → scan → detect ──► Decoder (one family) ──► PointerSource
//!   (start-up, once)                (polled every UI input cycle)
//! ```

pub mod detect;
pub mod ft6x36;
pub mod gt911;
pub mod input;
pub mod pointer;

pub use detect::{detect, reset_pulse, ControlLines};
pub use ft6x36::Ft6x36Decoder;
pub use gt911::{Gt911Decoder, Gt911Info};
pub use input::TouchInput;
pub use pointer::PointerSource;

use embedded_hal::i2c::I2c;
use touchlink_core::touch::{ControllerIdentity, TouchIc, TouchPoint};

/// Register protocol decoder for one controller family
///
/// A decoder turns one poll into at most one contact. Bus errors are
/// swallowed and reported as "no contact"; the next poll simply tries
/// again.
pub trait TouchDecoder<I: I2c> {
    /// Read the first contact, if any
    ///
    /// `now_ms` is only used to rate-limit diagnostics.
    fn read(&mut self, i2c: &mut I, now_ms: u32) -> Option<TouchPoint>;
}

/// The decoder chosen at detection time
#[derive(Debug, Clone)]
pub enum Decoder {
    /// FT6x36 through the `ft6x06-rs` driver
    Ft6x36(Ft6x36Decoder),
    /// GT911 through raw register reads
    Gt911(Gt911Decoder),
}

impl Decoder {
    /// Build the decoder matching a detected controller
    ///
    /// Returns `None` when no controller was found.
    pub fn for_identity(identity: ControllerIdentity) -> Option<Self> {
        match identity.ic {
            TouchIc::Ft6x36 => Some(Decoder::Ft6x36(Ft6x36Decoder::new())),
            TouchIc::Gt911 => Some(Decoder::Gt911(Gt911Decoder::new(identity.address))),
            TouchIc::None => None,
        }
    }

    /// Controller family this decoder speaks to
    pub fn family(&self) -> TouchIc {
        match self {
            Decoder::Ft6x36(_) => TouchIc::Ft6x36,
            Decoder::Gt911(_) => TouchIc::Gt911,
        }
    }
}

impl<I: I2c> TouchDecoder<I> for Decoder {
    fn read(&mut self, i2c: &mut I, now_ms: u32) -> Option<TouchPoint> {
        match self {
            Decoder::Ft6x36(decoder) => decoder.read(i2c, now_ms),
            Decoder::Gt911(decoder) => decoder.read(i2c, now_ms),
        }
    }
}
