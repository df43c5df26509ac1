//! Configuration types
//!
//! Board-level touch configuration, fixed at boot.

pub mod toml;
pub mod types;

pub use self::toml::parse_touch_config;
pub use types::*;
