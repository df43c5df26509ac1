//! Traits shared with the UI input loop
//!
//! The UI framework polls pointer devices; these traits are the only
//! contact surface between it and the touch drivers.

pub mod pointer;

pub use pointer::{PointerData, PointerDevice, PointerRegistry, PointerState};
