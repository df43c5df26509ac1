//! Pointer event source
//!
//! The single entry point the UI input loop polls. Each poll yields at
//! most one contact; multi-touch is not reported.

use embedded_hal::i2c::I2c;
use touchlink_core::config::{OrientationConfig, ScreenGeometry};
use touchlink_core::touch::TouchIc;
use touchlink_core::traits::{PointerData, PointerDevice};
use touchlink_hal::Clock;

use super::{Decoder, TouchDecoder};

/// Polled pointer device backed by one touch controller
pub struct PointerSource<I, C> {
    i2c: I,
    decoder: Decoder,
    orientation: OrientationConfig,
    screen: ScreenGeometry,
    clock: C,
}

impl<I: I2c, C: Clock> PointerSource<I, C> {
    /// Create a source for an already-detected controller
    pub fn new(
        i2c: I,
        decoder: Decoder,
        orientation: OrientationConfig,
        screen: ScreenGeometry,
        clock: C,
    ) -> Self {
        Self {
            i2c,
            decoder,
            orientation,
            screen,
            clock,
        }
    }

    /// Controller family being polled
    pub fn family(&self) -> TouchIc {
        self.decoder.family()
    }

    /// Poll the controller once
    ///
    /// Released at (0, 0) unless the decoder produced a valid contact, in
    /// which case the mapped screen position is reported as pressed.
    pub fn poll(&mut self) -> PointerData {
        let now_ms = self.clock.now_ms();
        match self.decoder.read(&mut self.i2c, now_ms) {
            Some(point) if point.valid => {
                let (x, y) = self.orientation.map(point.x, point.y, self.screen);
                PointerData::pressed(x, y)
            }
            _ => PointerData::RELEASED,
        }
    }

    /// Give back the bus handle
    pub fn release(self) -> I {
        self.i2c
    }
}

impl<I: I2c, C: Clock> PointerDevice for PointerSource<I, C> {
    fn read(&mut self) -> PointerData {
        self.poll()
    }
}
