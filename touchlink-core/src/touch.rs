//! Touch controller identity and decoded point types

/// FT6x36 fixed bus address
pub const FT6X36_ADDRESS: u8 = 0x38;

/// GT911 address when INT is held low during reset
pub const GT911_ADDRESS_PRIMARY: u8 = 0x5D;

/// GT911 address when INT is held high during reset
pub const GT911_ADDRESS_SECONDARY: u8 = 0x14;

/// Touch controller family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TouchIc {
    /// No controller found
    #[default]
    None,
    /// FocalTech FT6206 / FT6236 / FT6336
    Ft6x36,
    /// Goodix GT911
    Gt911,
}

impl TouchIc {
    /// Display name for diagnostics
    pub fn name(&self) -> &'static str {
        match self {
            TouchIc::None => "NONE",
            TouchIc::Ft6x36 => "FT6x36",
            TouchIc::Gt911 => "GT911",
        }
    }
}

/// Detected controller and the address it answered on
///
/// Fixed after detection. `address` is 0 when `ic` is [`TouchIc::None`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ControllerIdentity {
    /// Controller family
    pub ic: TouchIc,
    /// 7-bit bus address
    pub address: u8,
}

impl ControllerIdentity {
    /// No controller present
    pub const NONE: Self = Self {
        ic: TouchIc::None,
        address: 0x00,
    };

    /// FT6x36 at its fixed address
    pub const fn ft6x36() -> Self {
        Self {
            ic: TouchIc::Ft6x36,
            address: FT6X36_ADDRESS,
        }
    }

    /// GT911 at the given strap-selected address
    pub const fn gt911(address: u8) -> Self {
        Self {
            ic: TouchIc::Gt911,
            address,
        }
    }

    /// Returns true if a controller was found
    pub fn is_present(&self) -> bool {
        self.ic != TouchIc::None
    }
}

/// One contact as decoded from the controller registers
///
/// Coordinates are in the controller's native space. A fresh value is
/// produced on every poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TouchPoint {
    /// Native X
    pub x: u16,
    /// Native Y
    pub y: u16,
    /// Contact size (area or weight, depending on the controller)
    pub size: u16,
    /// Contact / track id
    pub id: u8,
    /// Decoder judged this point trustworthy
    pub valid: bool,
}
