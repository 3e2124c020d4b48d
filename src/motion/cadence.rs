//! Tick throttling.

/// Rate limiter for the motion state machine.
///
/// Profile speeds are calibrated per tick, so a tick only counts once at least
/// `period_ms` has elapsed since the last one that did. Elapsed time uses
/// wrapping arithmetic and survives millisecond counter overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cadence {
    period_ms: u32,
    last_ms: u32,
}

impl Cadence {
    /// Create a cadence whose first window starts at `now_ms`.
    pub const fn new(period_ms: u32, now_ms: u32) -> Self {
        Self {
            period_ms,
            last_ms: now_ms,
        }
    }

    /// Minimum interval between counted ticks.
    #[inline]
    pub fn period_ms(&self) -> u32 {
        self.period_ms
    }

    /// Timestamp of the last counted tick.
    #[inline]
    pub fn last_ms(&self) -> u32 {
        self.last_ms
    }

    /// Start a new window at `now_ms`.
    #[inline]
    pub fn reset(&mut self, now_ms: u32) {
        self.last_ms = now_ms;
    }

    /// Check whether a tick is due at `now_ms`, consuming the window if so.
    pub fn ready(&mut self, now_ms: u32) -> bool {
        if now_ms.wrapping_sub(self.last_ms) >= self.period_ms {
            self.last_ms = now_ms;
            true
        } else {
            false
        }
    }
}
