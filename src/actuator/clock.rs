//! Millisecond time sources.

/// Monotonic millisecond counter.
///
/// The counter may wrap; consumers compare timestamps with wrapping arithmetic.
pub trait Clock {
    /// Milliseconds since an arbitrary fixed origin.
    fn now_ms(&self) -> u32;
}

impl<F> Clock for F
where
    F: Fn() -> u32,
{
    fn now_ms(&self) -> u32 {
        self()
    }
}

/// Clock backed by `std::time::Instant`, counting from its creation.
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy)]
pub struct StdClock {
    origin: std::time::Instant,
}

#[cfg(feature = "std")]
impl StdClock {
    /// Create a clock starting at zero now.
    pub fn new() -> Self {
        Self {
            origin: std::time::Instant::now(),
        }
    }
}

#[cfg(feature = "std")]
impl Default for StdClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "std")]
impl Clock for StdClock {
    fn now_ms(&self) -> u32 {
        // Truncation wraps roughly every 49 days.
        self.origin.elapsed().as_millis() as u32
    }
}
