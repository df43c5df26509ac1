//! Board-agnostic core logic for the touch input subsystem
//!
//! This crate contains everything that does not touch the bus:
//!
//! - Configuration types and the `[touch]` config parser
//! - Controller identity and decoded touch point types
//! - Orientation mapping (swap / invert / clamp)
//! - Pointer device traits shared with the UI input loop

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod orientation;
pub mod touch;
pub mod traits;
