//! Time source abstraction

/// Monotonic millisecond clock
///
/// Only used for rate-limiting diagnostics, so resolution and drift do not
/// matter much. Wrapping is handled by callers with `wrapping_sub`.
pub trait Clock {
    /// Milliseconds since some fixed point (usually boot)
    fn now_ms(&self) -> u32;
}

impl<T: Clock + ?Sized> Clock for &T {
    fn now_ms(&self) -> u32 {
        T::now_ms(self)
    }
}
