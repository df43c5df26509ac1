//! Orientation mapping
//!
//! Converts controller-native coordinates into screen coordinates for the
//! way the panel is mounted. The steps always run in the same order:
//!
//! 1. swap axes
//! 2. invert X
//! 3. invert Y
//! 4. add the fixed offsets
//! 5. clamp into `[0, dim - 1]`
//!
//! Swapping first means the invert flags name the physical screen axes,
//! whatever the sensor's own axis layout is.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::config::ScreenGeometry;

/// Panel mounting transform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OrientationConfig {
    /// Exchange the X and Y axes
    pub swap_xy: bool,
    /// Mirror along the screen X axis
    pub invert_x: bool,
    /// Mirror along the screen Y axis
    pub invert_y: bool,
    /// Pixel offset added to X after inversion
    pub offset_x: i16,
    /// Pixel offset added to Y after inversion
    pub offset_y: i16,
}

impl OrientationConfig {
    /// Map a raw controller coordinate onto the screen
    ///
    /// The result is always inside the screen: `x < width`, `y < height`.
    /// A zero-sized axis maps to 0.
    pub fn map(&self, x: u16, y: u16, screen: ScreenGeometry) -> (u16, u16) {
        let width = i32::from(screen.width);
        let height = i32::from(screen.height);

        let (mut x, mut y) = (i32::from(x), i32::from(y));

        if self.swap_xy {
            core::mem::swap(&mut x, &mut y);
        }
        if self.invert_x {
            x = width - 1 - x;
        }
        if self.invert_y {
            y = height - 1 - y;
        }

        x += i32::from(self.offset_x);
        y += i32::from(self.offset_y);

        (clamp_axis(x, width), clamp_axis(y, height))
    }
}

/// Clamp into `[0, dim - 1]`
fn clamp_axis(value: i32, dim: i32) -> u16 {
    let max = (dim - 1).max(0);
    // max fits in u16 because dim came from a u16
    value.clamp(0, max) as u16
}
