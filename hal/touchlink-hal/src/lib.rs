//! Touchlink Hardware Abstraction Layer
//!
//! `embedded-hal` covers I2C transactions and delays. This crate defines
//! the extra hardware hooks the touch subsystem needs on top of that,
//! implemented by the board support code:
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  touchlink-drivers (recovery, decoders) │
//! └─────────────────────────────────────────┘
//!          │                     │
//!          ▼                     ▼
//! ┌─────────────────┐   ┌─────────────────────┐
//! │  embedded-hal   │   │ touchlink-hal       │
//! │  I2c, DelayNs   │   │ (this crate)        │
//! └─────────────────┘   └─────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`i2c::BusController`] - Release and re-initialize the I2C peripheral
//! - [`gpio::FlexPin`] - Lines that switch between input and output
//! - [`time::Clock`] - Monotonic millisecond clock

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod i2c;
pub mod time;

// Re-export key traits at crate root for convenience
pub use gpio::FlexPin;
pub use i2c::{BusController, I2cConfig};
pub use time::Clock;
