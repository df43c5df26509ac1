//! Touch controller drivers for a shared I2C bus
//!
//! This crate implements the bus-facing half of the touch subsystem:
//!
//! - Bus recovery (un-sticking SDA) and address scanning
//! - Controller identification (FT6x36 vs GT911)
//! - Register protocol decoders for both families
//! - The pointer source polled by the UI input loop
//!
//! Start-up goes through [`touch::TouchInput::start`]; steady-state polling
//! goes through [`touch::PointerSource`].

#![no_std]
#![deny(unsafe_code)]

#[macro_use]
mod fmt;

pub mod bus;
pub mod touch;

#[cfg(test)]
mod mock;
