//! Pointer device trait for the UI input loop

/// Pressed / released state of a pointer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PointerState {
    /// No contact
    #[default]
    Released,
    /// Finger down at the reported coordinate
    Pressed,
}

/// Result of one pointer poll
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PointerData {
    /// Screen X in pixels
    pub x: u16,
    /// Screen Y in pixels
    pub y: u16,
    /// Contact state
    pub state: PointerState,
    /// Ask the input loop to read again in the same cycle
    pub continue_reading: bool,
}

impl PointerData {
    /// Released at the origin
    pub const RELEASED: Self = Self {
        x: 0,
        y: 0,
        state: PointerState::Released,
        continue_reading: false,
    };

    /// Pressed at a screen coordinate
    pub const fn pressed(x: u16, y: u16) -> Self {
        Self {
            x,
            y,
            state: PointerState::Pressed,
            continue_reading: false,
        }
    }

    /// Returns true if the pointer is down
    pub fn is_pressed(&self) -> bool {
        self.state == PointerState::Pressed
    }
}

/// A pointer input device polled by the UI
pub trait PointerDevice {
    /// Read the current pointer state
    ///
    /// Called once per input cycle. Must not block beyond a few short bus
    /// transactions.
    fn read(&mut self) -> PointerData;
}

/// UI-side registry of pointer devices
///
/// The touch subsystem hands its device over here only when a controller
/// was actually found.
pub trait PointerRegistry<D: PointerDevice> {
    /// Take ownership of a device and start polling it
    fn register_pointer(&mut self, device: D);
}
