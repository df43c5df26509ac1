//! Touch subsystem start-up and queries
//!
//! [`TouchInput::start`] runs the whole bring-up sequence once:
//!
//! 1. start the bus at standard mode
//! 2. recover it if a device is holding SDA
//! 3. scan and log every acknowledging address
//! 4. identify the touch controller
//! 5. run the controller's own init, then raise the bus clock
//!
//! The result is a small owned value that answers diagnostic queries and
//! hands a [`PointerSource`] to the UI. If no controller was found, the UI
//! never gets a pointer device at all.

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;
use touchlink_core::config::{OrientationConfig, ScreenGeometry, TouchConfig};
use touchlink_core::touch::ControllerIdentity;
use touchlink_core::traits::PointerRegistry;
use touchlink_hal::{BusController, Clock, FlexPin, I2cConfig};

use super::gt911::{self, Gt911Info};
use super::{detect, ControlLines, Decoder, PointerSource};
use crate::bus::{recover_bus, scan, BusLines, BusRecovery, ScanReport};

/// Settle time after starting the bus controller (ms)
const BUS_SETTLE_MS: u32 = 3;

/// Detected touch hardware, fixed after start-up
#[derive(Debug, Clone)]
pub struct TouchInput {
    identity: ControllerIdentity,
    decoder: Option<Decoder>,
    gt911_info: Option<Gt911Info>,
    recovery: BusRecovery,
    scan: ScanReport,
    orientation: OrientationConfig,
    screen: ScreenGeometry,
}

impl TouchInput {
    /// Bring up the bus and find the touch controller
    ///
    /// Never fails: every problem degrades to "no touch device".
    pub fn start<B, SCL, SDA, P, D>(
        bus: &mut B,
        lines: &mut BusLines<SCL, SDA>,
        control: &mut ControlLines<P>,
        config: &TouchConfig,
        delay: &mut D,
    ) -> Self
    where
        B: I2c + BusController,
        SCL: FlexPin,
        SDA: FlexPin,
        P: FlexPin,
        D: DelayNs,
    {
        bus.begin(I2cConfig::STANDARD);
        delay.delay_ms(BUS_SETTLE_MS);

        let recovery = recover_bus(bus, lines, delay);
        let report = scan(bus);
        info!("{}", report);

        let mut identity = detect(bus, control, delay);
        let mut decoder = Decoder::for_identity(identity);
        let mut gt911_info = None;

        let ready = match decoder.as_mut() {
            Some(Decoder::Ft6x36(ft)) => match ft.init(bus, config.threshold) {
                Ok(()) => {
                    info!("[touch] FT6x36 ready");
                    true
                }
                Err(_) => {
                    warn!("[touch] FT6x36 init failed");
                    false
                }
            },
            Some(Decoder::Gt911(_)) => {
                gt911_info = Some(gt911::read_info(bus, identity.address));
                info!("[touch] GT911 lib not present; using raw I2C");
                true
            }
            None => false,
        };

        if ready {
            bus.set_frequency(config.frequency);
        } else {
            identity = ControllerIdentity::NONE;
            decoder = None;
        }

        Self {
            identity,
            decoder,
            gt911_info,
            recovery,
            scan: report,
            orientation: config.orientation,
            screen: config.screen,
        }
    }

    /// Returns true if a touch controller is active
    pub fn touch_present(&self) -> bool {
        self.decoder.is_some()
    }

    /// Name of the active controller family, "NONE" if absent
    pub fn touch_ic_name(&self) -> &'static str {
        self.identity.ic.name()
    }

    /// Bus address of the active controller, 0 if absent
    pub fn touch_i2c_address(&self) -> u8 {
        self.identity.address
    }

    /// Detected controller and address
    pub fn identity(&self) -> ControllerIdentity {
        self.identity
    }

    /// Product id and resolution read from a GT911 at start-up
    ///
    /// `None` unless the active controller is a GT911.
    pub fn gt911_info(&self) -> Option<Gt911Info> {
        self.gt911_info
    }

    /// Outcome of the start-up bus recovery
    pub fn recovery(&self) -> BusRecovery {
        self.recovery
    }

    /// Addresses that answered during the start-up scan
    pub fn scan_report(&self) -> &ScanReport {
        &self.scan
    }

    /// Scan the bus again and log the result
    pub fn rescan<I: I2c>(&mut self, i2c: &mut I) -> &ScanReport {
        self.scan = scan(i2c);
        info!("{}", self.scan);
        &self.scan
    }

    /// Build the pointer device, if a controller was found
    ///
    /// `i2c` may be a shared-bus handle; the source only issues short
    /// bounded transactions on it.
    pub fn pointer_source<I: I2c, C: Clock>(&self, i2c: I, clock: C) -> Option<PointerSource<I, C>> {
        let decoder = self.decoder.clone()?;
        Some(PointerSource::new(
            i2c,
            decoder,
            self.orientation,
            self.screen,
            clock,
        ))
    }

    /// Hand the pointer device to the UI
    ///
    /// Returns false, without touching the registry, when no controller
    /// was found.
    pub fn register<I, C, R>(&self, registry: &mut R, i2c: I, clock: C) -> bool
    where
        I: I2c,
        C: Clock,
        R: PointerRegistry<PointerSource<I, C>>,
    {
        match self.pointer_source(i2c, clock) {
            Some(source) => {
                registry.register_pointer(source);
                info!(
                    "[touch] pointer device registered ({=str} @ {=u8:#x})",
                    self.touch_ic_name(),
                    self.touch_i2c_address()
                );
                true
            }
            None => {
                info!("[touch] Skipping pointer device (no touch detected)");
                false
            }
        }
    }
}
