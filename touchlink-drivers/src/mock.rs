//! Mock peripherals for driver tests

use core::cell::{Cell, RefCell};

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::{ErrorKind, ErrorType, I2c, NoAcknowledgeSource, Operation};
use heapless::Vec;
use touchlink_hal::{BusController, Clock, FlexPin, I2cConfig};

/// One simulated device on the mock bus
#[derive(Debug, Clone)]
pub struct MockDevice {
    pub address: u8,
    /// 16-bit register addresses (Goodix) instead of 8-bit (FocalTech)
    pub wide: bool,
    /// Every read transaction fails
    pub fail_reads: bool,
    /// Reads starting at this register fail
    pub failing_register: Option<u16>,
    /// Every write with payload fails
    pub fail_writes: bool,
    regs: Vec<(u16, u8), 64>,
    pointer: u16,
}

impl MockDevice {
    pub fn narrow(address: u8) -> Self {
        Self::new(address, false)
    }

    pub fn wide(address: u8) -> Self {
        Self::new(address, true)
    }

    fn new(address: u8, wide: bool) -> Self {
        Self {
            address,
            wide,
            fail_reads: false,
            failing_register: None,
            fail_writes: false,
            regs: Vec::new(),
            pointer: 0,
        }
    }

    pub fn set(&mut self, reg: u16, value: u8) {
        if let Some(slot) = self.regs.iter_mut().find(|(r, _)| *r == reg) {
            slot.1 = value;
        } else {
            self.regs.push((reg, value)).unwrap();
        }
    }

    pub fn set_bytes(&mut self, reg: u16, values: &[u8]) {
        for (i, &value) in values.iter().enumerate() {
            self.set(reg + i as u16, value);
        }
    }

    /// Unset registers read as zero
    pub fn get(&self, reg: u16) -> u8 {
        self.regs
            .iter()
            .find(|(r, _)| *r == reg)
            .map(|(_, v)| *v)
            .unwrap_or(0)
    }
}

/// Mock I2C bus with bus-controller bookkeeping
#[derive(Debug, Default)]
pub struct MockI2c {
    devices: Vec<MockDevice, 4>,
    /// Addresses hit by zero-length writes, in order
    pub probes: Vec<u8, 512>,
    /// Register writes as (address, register, value)
    pub writes: Vec<(u8, u16, u8), 64>,
    /// Register reads as (address, start register, length)
    pub reads: Vec<(u8, u16, usize), 64>,
    pub releases: u32,
    /// Frequencies passed to `begin`
    pub begins: Vec<u32, 8>,
    pub frequency: u32,
}

impl MockI2c {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_device(&mut self, device: MockDevice) {
        self.devices.push(device).unwrap();
    }

    pub fn device(&self, address: u8) -> Option<&MockDevice> {
        self.devices.iter().find(|d| d.address == address)
    }

    pub fn device_mut(&mut self, address: u8) -> Option<&mut MockDevice> {
        self.devices.iter_mut().find(|d| d.address == address)
    }

    pub fn writes_to(&self, address: u8, reg: u16) -> usize {
        self.writes
            .iter()
            .filter(|(a, r, _)| *a == address && *r == reg)
            .count()
    }

    pub fn clear_log(&mut self) {
        self.probes.clear();
        self.writes.clear();
        self.reads.clear();
    }
}

impl ErrorType for MockI2c {
    type Error = ErrorKind;
}

impl I2c for MockI2c {
    fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        if let [Operation::Write(bytes)] = operations {
            if bytes.is_empty() {
                self.probes.push(address).unwrap();
            }
        }

        let Some(dev) = self.devices.iter_mut().find(|d| d.address == address) else {
            return Err(ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address));
        };

        for op in operations.iter_mut() {
            match op {
                Operation::Write(bytes) => {
                    if bytes.is_empty() {
                        continue;
                    }
                    let width = if dev.wide { 2 } else { 1 };
                    if bytes.len() < width {
                        return Err(ErrorKind::Other);
                    }
                    let reg = if dev.wide {
                        u16::from_be_bytes([bytes[0], bytes[1]])
                    } else {
                        u16::from(bytes[0])
                    };
                    dev.pointer = reg;

                    let payload = &bytes[width..];
                    if !payload.is_empty() && dev.fail_writes {
                        return Err(ErrorKind::NoAcknowledge(NoAcknowledgeSource::Data));
                    }
                    for (i, &value) in payload.iter().enumerate() {
                        let r = reg + i as u16;
                        dev.set(r, value);
                        self.writes.push((address, r, value)).unwrap();
                    }
                }
                Operation::Read(buf) => {
                    let _ = self.reads.push((address, dev.pointer, buf.len()));
                    if dev.fail_reads || dev.failing_register == Some(dev.pointer) {
                        return Err(ErrorKind::Bus);
                    }
                    for (i, b) in buf.iter_mut().enumerate() {
                        *b = dev.get(dev.pointer + i as u16);
                    }
                }
            }
        }
        Ok(())
    }
}

impl BusController for MockI2c {
    fn release(&mut self) {
        self.releases += 1;
    }

    fn begin(&mut self, config: I2cConfig) {
        self.begins.push(config.frequency).unwrap();
        self.frequency = config.frequency;
    }

    fn set_frequency(&mut self, frequency: u32) {
        self.frequency = frequency;
    }
}

/// Which line a pin event happened on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line {
    Scl,
    Sda,
    Reset,
    Int,
}

/// Pin operation recorded by [`MockLine`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinEvent {
    InputPullup,
    Output,
    High,
    Low,
}

/// Shared electrical state for a set of mock lines
///
/// A device "holding" SDA keeps it low until SCL has been clocked
/// `release_after` times.
#[derive(Debug, Default)]
pub struct MockWire {
    pub log: RefCell<Vec<(Line, PinEvent), 128>>,
    hold_sda: Cell<bool>,
    release_after: Cell<Option<u8>>,
    scl_edges: Cell<u8>,
    sda_output: Cell<bool>,
    sda_level: Cell<bool>,
    scl_output: Cell<bool>,
}

impl MockWire {
    /// Idle bus
    pub fn new() -> Self {
        Self::default()
    }

    /// SDA held low; released after `clocks` SCL pulses (`None` = never)
    pub fn stuck(clocks: Option<u8>) -> Self {
        let wire = Self::default();
        wire.hold_sda.set(true);
        wire.release_after.set(clocks);
        wire
    }

    pub fn line(&self, line: Line) -> MockLine<'_> {
        MockLine {
            wire: self,
            line,
            level: true,
        }
    }

    pub fn scl_pulses(&self) -> u8 {
        self.scl_edges.get()
    }

    pub fn events(&self, line: Line) -> Vec<PinEvent, 128> {
        self.log
            .borrow()
            .iter()
            .filter(|(l, _)| *l == line)
            .map(|(_, e)| *e)
            .collect()
    }

    fn sda_high(&self) -> bool {
        let holding = self.hold_sda.get()
            && match self.release_after.get() {
                Some(n) => self.scl_edges.get() < n,
                None => true,
            };
        if holding {
            false
        } else if self.sda_output.get() {
            self.sda_level.get()
        } else {
            true
        }
    }

    fn record(&self, line: Line, event: PinEvent) {
        let _ = self.log.borrow_mut().push((line, event));
    }
}

/// Mock GPIO line bound to a [`MockWire`]
pub struct MockLine<'a> {
    wire: &'a MockWire,
    line: Line,
    level: bool,
}

impl FlexPin for MockLine<'_> {
    fn set_as_input_pullup(&mut self) {
        self.wire.record(self.line, PinEvent::InputPullup);
        match self.line {
            Line::Sda => self.wire.sda_output.set(false),
            Line::Scl => self.wire.scl_output.set(false),
            _ => {}
        }
    }

    fn set_as_output(&mut self) {
        self.wire.record(self.line, PinEvent::Output);
        match self.line {
            Line::Sda => self.wire.sda_output.set(true),
            Line::Scl => self.wire.scl_output.set(true),
            _ => {}
        }
    }

    fn set_high(&mut self) {
        self.wire.record(self.line, PinEvent::High);
        self.level = true;
        match self.line {
            Line::Sda => self.wire.sda_level.set(true),
            Line::Scl if self.wire.scl_output.get() => {
                self.wire.scl_edges.set(self.wire.scl_edges.get() + 1)
            }
            _ => {}
        }
    }

    fn set_low(&mut self) {
        self.wire.record(self.line, PinEvent::Low);
        self.level = false;
        if self.line == Line::Sda {
            self.wire.sda_level.set(false);
        }
    }

    fn is_high(&self) -> bool {
        match self.line {
            Line::Sda => self.wire.sda_high(),
            _ => self.level,
        }
    }
}

/// Delay that only accumulates the requested time
#[derive(Debug, Default)]
pub struct MockDelay {
    pub total_ns: u64,
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ns += u64::from(ns);
    }
}

/// Manually advanced clock
#[derive(Debug, Default)]
pub struct MockClock {
    now: Cell<u32>,
}

impl MockClock {
    pub fn set(&self, ms: u32) {
        self.now.set(ms);
    }
}

impl Clock for MockClock {
    fn now_ms(&self) -> u32 {
        self.now.get()
    }
}
