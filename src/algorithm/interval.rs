//! Half-open sub-ranges of the unit interval that remain eligible for sampling

use std::fmt;

/// A half-open range `[start, end)` inside `[0, 1)` with positive length
///
/// Stored by its endpoints so that an interval touching 1 keeps `end == 1.0`
/// exactly when only its start moves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    start: f64,
    end: f64,
}

impl Interval {
    /// The whole circle `[0, 1)`
    pub const FULL: Self = Self {
        start: 0.0,
        end: 1.0,
    };

    /// Build `[start, end)`, or `None` when the range has no positive length
    pub fn new(start: f64, end: f64) -> Option<Self> {
        (end > start).then_some(Self { start, end })
    }

    /// Lower bound
    pub const fn start(&self) -> f64 {
        self.start
    }

    /// Upper bound, excluded
    pub const fn end(&self) -> f64 {
        self.end
    }

    /// Width of the range
    pub fn length(&self) -> f64 {
        self.end - self.start
    }

    /// Move the start to `new_start`, keeping the end
    ///
    /// Returns `None` if nothing of the interval is left.
    pub fn with_start(self, new_start: f64) -> Option<Self> {
        Self::new(new_start, self.end)
    }

    /// Move the end to `new_end`, keeping the start
    ///
    /// Returns `None` if nothing of the interval is left.
    pub fn with_end(self, new_end: f64) -> Option<Self> {
        Self::new(self.start, new_end)
    }

    /// Whether the interval begins exactly at 0
    #[allow(clippy::float_cmp)]
    pub fn touches_zero(&self) -> bool {
        self.start == 0.0
    }

    /// Whether the interval runs exactly up to 1
    #[allow(clippy::float_cmp)]
    pub fn touches_one(&self) -> bool {
        self.end == 1.0
    }

    /// Point at fraction `t` of the way through the interval
    ///
    /// Always strictly below `end`, even when `t` is so close to 1 that the
    /// interpolation rounds up onto it.
    pub fn point_at(&self, t: f64) -> f64 {
        self.length()
            .mul_add(t, self.start)
            .min(self.end.next_down())
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.3}, {:.3})", self.start, self.end)
    }
}
