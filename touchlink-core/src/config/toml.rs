//! `[touch]` section parser
//!
//! Minimal TOML subset reader for the touch configuration. It only looks
//! at the `[touch]` section; everything else in the file belongs to other
//! subsystems and is skipped.
//!
//! Supported:
//! - `key = value` pairs (integer, boolean, quoted pin string)
//! - `[section]` headers
//! - Comments (`# ...`), including trailing comments after headers and
//!   values
//!
//! Pins may be written as `8`, `"gpio8"`, or `-1` / `"none"` for lines
//! that are not wired. Booleans accept `true`/`false` and `1`/`0`.

use super::types::{ConfigError, TouchConfig};

/// Parse the `[touch]` section of a config file
///
/// Keys that are absent keep their [`TouchConfig::default`] values. The
/// result is validated before it is returned.
pub fn parse_touch_config(input: &str) -> Result<TouchConfig, ConfigError> {
    let mut config = TouchConfig::default();
    let mut in_touch = false;

    for line in input.lines() {
        let line = strip_comment(line).trim();

        if line.is_empty() {
            continue;
        }

        if line.starts_with('[') && line.ends_with(']') {
            in_touch = line[1..line.len() - 1].trim() == "touch";
            continue;
        }

        if !in_touch {
            continue;
        }

        let (key, value) = parse_key_value(line).ok_or(ConfigError::InvalidLine)?;
        apply_value(&mut config, key, value)?;
    }

    config.validate()?;
    Ok(config)
}

fn apply_value(config: &mut TouchConfig, key: &str, value: &str) -> Result<(), ConfigError> {
    match key {
        "sda" => config.bus.sda = parse_pin(value)?.ok_or(ConfigError::InvalidValue)?,
        "scl" => config.bus.scl = parse_pin(value)?.ok_or(ConfigError::InvalidValue)?,
        "frequency" => config.frequency = parse_int(value)?,
        "width" => config.screen.width = parse_int(value)?,
        "height" => config.screen.height = parse_int(value)?,
        "swap_xy" => config.orientation.swap_xy = parse_bool(value)?,
        "invert_x" => config.orientation.invert_x = parse_bool(value)?,
        "invert_y" => config.orientation.invert_y = parse_bool(value)?,
        "offset_x" => config.orientation.offset_x = parse_int(value)?,
        "offset_y" => config.orientation.offset_y = parse_int(value)?,
        "reset_pin" => config.control.reset = parse_pin(value)?,
        "int_pin" => config.control.interrupt = parse_pin(value)?,
        "threshold" => config.threshold = parse_int(value)?,
        _ => return Err(ConfigError::UnknownKey),
    }
    Ok(())
}

/// Drop a `#` comment that is not inside a quoted string
fn strip_comment(line: &str) -> &str {
    let mut in_quotes = false;
    for (i, c) in line.char_indices() {
        match c {
            '"' => in_quotes = !in_quotes,
            '#' if !in_quotes => return &line[..i],
            _ => {}
        }
    }
    line
}

/// Split `key = value`
fn parse_key_value(line: &str) -> Option<(&str, &str)> {
    let eq_pos = line.find('=')?;
    let key = line[..eq_pos].trim();
    let value = line[eq_pos + 1..].trim();

    if key.is_empty() || value.is_empty() {
        return None;
    }

    Some((key, value))
}

/// Strip surrounding quotes, if any
fn unquote(value: &str) -> &str {
    if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
        &value[1..value.len() - 1]
    } else {
        value
    }
}

fn parse_int<T: core::str::FromStr>(value: &str) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidValue)
}

fn parse_bool(value: &str) -> Result<bool, ConfigError> {
    match value {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        _ => Err(ConfigError::InvalidValue),
    }
}

/// Parse a pin; `Ok(None)` means "not wired"
fn parse_pin(value: &str) -> Result<Option<u8>, ConfigError> {
    let s = unquote(value).trim();

    if s == "none" || s == "-1" {
        return Ok(None);
    }

    let digits = s.strip_prefix("gpio").unwrap_or(s);
    digits
        .parse::<u8>()
        .map(Some)
        .map_err(|_| ConfigError::InvalidValue)
}
