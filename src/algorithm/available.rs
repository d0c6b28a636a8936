//! Ordered collection of the disjoint intervals still open for sampling

use crate::algorithm::interval::Interval;
use std::fmt;

/// Disjoint intervals of `[0, 1)` kept sorted by start
///
/// Intervals are never edited while stored: every change removes the old
/// value and inserts its replacement at the sorted position.
#[derive(Debug, Clone, PartialEq)]
pub struct AvailableSet {
    intervals: Vec<Interval>,
}

impl Default for AvailableSet {
    fn default() -> Self {
        Self::full()
    }
}

impl AvailableSet {
    /// A set covering the whole circle
    pub fn full() -> Self {
        Self {
            intervals: vec![Interval::FULL],
        }
    }

    /// A set with nothing left to sample
    pub const fn empty() -> Self {
        Self {
            intervals: Vec::new(),
        }
    }

    /// Build a set from arbitrary intervals, sorting them by start
    ///
    /// The caller is responsible for the intervals being disjoint.
    pub fn from_intervals(intervals: impl IntoIterator<Item = Interval>) -> Self {
        let mut set = Self::empty();
        for interval in intervals {
            set.insert(interval);
        }
        set
    }

    /// Number of intervals
    pub const fn len(&self) -> usize {
        self.intervals.len()
    }

    /// True once the whole circle has been excluded
    pub const fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Sum of all interval lengths
    pub fn total_length(&self) -> f64 {
        self.intervals.iter().map(Interval::length).sum()
    }

    /// Intervals in ascending order of start
    pub fn iter(&self) -> impl Iterator<Item = &Interval> {
        self.intervals.iter()
    }

    /// Intervals in ascending order of start
    pub fn as_slice(&self) -> &[Interval] {
        &self.intervals
    }

    /// Interval at `index`, if any
    pub fn get(&self, index: usize) -> Option<Interval> {
        self.intervals.get(index).copied()
    }

    /// Select the interval a spinner in `[0, total_length)` lands on
    ///
    /// The interval at position `i` owns the spinner range
    /// `(cumulative, cumulative + length]`, so longer intervals are picked
    /// proportionally more often. A spinner of exactly zero lands on the
    /// first interval and one past the accumulated total (rounding) on the
    /// last.
    pub fn pick(&self, spinner: f64) -> Option<usize> {
        let mut cumulative = 0.0;
        for (index, interval) in self.intervals.iter().enumerate() {
            cumulative += interval.length();
            if spinner <= cumulative {
                return Some(index);
            }
        }
        self.intervals.len().checked_sub(1)
    }

    /// Index of the interval starting at 0, if present
    pub fn first_touching_zero(&self) -> Option<usize> {
        self.intervals
            .first()
            .filter(|interval| interval.touches_zero())
            .map(|_| 0)
    }

    /// Index of the interval ending at 1, if present
    pub fn last_touching_one(&self) -> Option<usize> {
        self.intervals.iter().rposition(Interval::touches_one)
    }

    /// Add an interval at its sorted position
    pub fn insert(&mut self, interval: Interval) {
        let position = self
            .intervals
            .partition_point(|existing| existing.start() < interval.start());
        self.intervals.insert(position, interval);
    }

    /// Drop the interval at `index`, returning it
    pub fn remove(&mut self, index: usize) -> Option<Interval> {
        (index < self.intervals.len()).then(|| self.intervals.remove(index))
    }

    /// Swap the interval at `index` for `replacement`
    ///
    /// A `None` replacement (the interval shrank to nothing) just removes it.
    pub fn replace(&mut self, index: usize, replacement: Option<Interval>) {
        if self.remove(index).is_none() {
            return;
        }
        if let Some(interval) = replacement {
            self.insert(interval);
        }
    }

    /// Check that intervals are sorted, disjoint, positive and within `[0, 1]`
    pub fn is_well_formed(&self) -> bool {
        let bounded = self.intervals.iter().all(|interval| {
            interval.length() > 0.0 && interval.start() >= 0.0 && interval.end() <= 1.0
        });
        let ordered = self
            .intervals
            .windows(2)
            .all(|pair| matches!(pair, [a, b] if a.end() <= b.start()));
        bounded && ordered
    }
}

impl fmt::Display for AvailableSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.intervals.is_empty() {
            return write!(f, "{{}}");
        }
        let rendered: Vec<String> = self.intervals.iter().map(ToString::to_string).collect();
        write!(f, "{{{}}}", rendered.join(", "))
    }
}
