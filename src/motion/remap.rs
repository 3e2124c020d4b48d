//! Logical-to-physical position mapping.

use crate::config::units::{LogicalPos, LOGICAL_MAX};
use crate::config::OutputRange;

/// Linear map from logical `[0, 180]` onto a physical output range.
///
/// The slope is kept for inspection only; outputs are computed in integers so
/// half-way values always round up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Remapper {
    range: OutputRange,
    slope: f32,
}

impl Remapper {
    /// Create a remapper for a range.
    pub fn new(range: OutputRange) -> Self {
        let mut remap = Self { range, slope: 0.0 };
        remap.configure(range);
        remap
    }

    /// Store a new range and recompute the slope.
    pub fn configure(&mut self, range: OutputRange) {
        self.range = range;
        self.slope = (f32::from(range.max) - f32::from(range.min)) / f32::from(LOGICAL_MAX);
    }

    /// Current output range.
    #[inline]
    pub fn range(&self) -> OutputRange {
        self.range
    }

    /// Output units per logical degree.
    #[inline]
    pub fn slope(&self) -> f32 {
        self.slope
    }

    /// Map a logical position to the physical output.
    ///
    /// Computes `round(min + (max - min) / 180 * position)` exactly, rounding
    /// halves up. Positions above 180 extrapolate along the same line; the
    /// result saturates at the `u16` bounds.
    #[inline]
    pub fn remap(&self, position: LogicalPos) -> u16 {
        let full = i64::from(LOGICAL_MAX);
        let span = i64::from(self.range.max) - i64::from(self.range.min);
        let scaled = i64::from(self.range.min) * full + span * i64::from(position.0);
        let rounded = (2 * scaled + full).div_euclid(2 * full);
        rounded.clamp(0, i64::from(u16::MAX)) as u16
    }
}

impl Default for Remapper {
    fn default() -> Self {
        Self::new(OutputRange::default())
    }
}
