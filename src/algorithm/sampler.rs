//! Random points on the unit circle with a guaranteed minimum separation
//!
//! The sampler keeps the set of sub-intervals of `[0, 1)` where a new point
//! could still land without coming within `sep` of an earlier one. Each draw
//! picks an interval weighted by length, samples uniformly inside it and then
//! cuts the exclusion zone `[v - sep, v + sep]` out of the set, wrapping
//! round at 0 and 1.

use crate::algorithm::available::AvailableSet;
use crate::algorithm::interval::Interval;
use crate::math::random::UniformSource;
use rand::{SeedableRng, rngs::StdRng};
use std::iter::FusedIterator;

/// Outcome of a single draw
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Draw {
    /// A point in `[0, 1)` at least `sep` away from every earlier point
    Sample(f64),
    /// No eligible region is left; every later draw is exhausted too
    Exhausted,
}

impl Draw {
    /// The sampled value, if there is one
    pub const fn value(self) -> Option<f64> {
        match self {
            Self::Sample(v) => Some(v),
            Self::Exhausted => None,
        }
    }

    /// True for [`Draw::Exhausted`]
    pub const fn is_exhausted(&self) -> bool {
        matches!(self, Self::Exhausted)
    }
}

/// Generator of mutually separated points on the unit circle
///
/// `sep` is expected in `[0, 0.5)`. Larger values are accepted and simply
/// exclude the whole circle after the first draw.
#[derive(Debug, Clone)]
pub struct SeparatedSampler<R> {
    sep: f64,
    available: AvailableSet,
    source: R,
    draws: usize,
}

impl SeparatedSampler<StdRng> {
    /// Sampler driven by a seeded standard generator
    pub fn seeded(sep: f64, seed: u64) -> Self {
        Self::new(sep, StdRng::seed_from_u64(seed))
    }
}

impl<R: UniformSource> SeparatedSampler<R> {
    /// Sampler with the whole circle available
    pub fn new(sep: f64, source: R) -> Self {
        Self {
            sep,
            available: AvailableSet::full(),
            source,
            draws: 0,
        }
    }

    /// Sampler resuming from a previously reduced set of intervals
    pub const fn with_available(sep: f64, available: AvailableSet, source: R) -> Self {
        Self {
            sep,
            available,
            source,
            draws: 0,
        }
    }

    /// Minimum circular distance between emitted points
    pub const fn sep(&self) -> f64 {
        self.sep
    }

    /// Intervals still open for sampling
    pub const fn available(&self) -> &AvailableSet {
        &self.available
    }

    /// Total length still open for sampling
    pub fn total_available(&self) -> f64 {
        self.available.total_length()
    }

    /// Number of points emitted so far
    pub const fn draws(&self) -> usize {
        self.draws
    }

    /// True once no point can be drawn any more
    pub const fn is_exhausted(&self) -> bool {
        self.available.is_empty()
    }

    /// Draw the next separated point
    pub fn draw(&mut self) -> Draw {
        if self.available.is_empty() {
            log::debug!("sampler exhausted after {} draws", self.draws);
            return Draw::Exhausted;
        }

        let spinner = self.available.total_length() * self.source.next_uniform();
        let Some(index) = self.available.pick(spinner) else {
            return Draw::Exhausted;
        };
        let Some(chosen) = self.available.get(index) else {
            return Draw::Exhausted;
        };

        let v = chosen.point_at(self.source.next_uniform());
        self.exclude(index, chosen, v);
        self.draws += 1;

        log::trace!("draw {} = {v:.6}, available {}", self.draws, self.available);
        Draw::Sample(v)
    }

    /// Cut `[v - sep, v + sep]` out of the available set
    ///
    /// `index` is the position of `chosen`, the interval `v` was drawn from.
    /// Only `chosen` and, when the zone wraps, the interval touching the
    /// opposite end of the circle are affected.
    fn exclude(&mut self, index: usize, chosen: Interval, v: f64) {
        let sep = self.sep();

        if v <= sep {
            // Zone crosses 0 into the region just below 1
            let trimmed = if v + sep > chosen.end() {
                None
            } else {
                chosen.with_start(v + sep)
            };
            self.available.replace(index, trimmed);

            if let Some(last_index) = self.available.last_touching_one() {
                if let Some(last) = self.available.get(last_index) {
                    let wrapped_end = 1.0 + v - sep;
                    let replacement = if last.start() < wrapped_end {
                        last.with_end(wrapped_end)
                    } else {
                        None
                    };
                    self.available.replace(last_index, replacement);
                }
            }
            return;
        }

        if v + sep > 1.0 {
            // Zone crosses 1 into the region just above 0
            let trimmed = if v - sep < chosen.start() {
                None
            } else {
                chosen.with_end(v - sep)
            };
            self.available.replace(index, trimmed);

            if let Some(first_index) = self.available.first_touching_zero() {
                if let Some(first) = self.available.get(first_index) {
                    let wrapped_start = v + sep - 1.0;
                    let replacement = if wrapped_start < first.end() {
                        first.with_start(wrapped_start)
                    } else {
                        None
                    };
                    self.available.replace(first_index, replacement);
                }
            }
            return;
        }

        if v - sep > chosen.start() {
            if v + sep <= chosen.end() {
                self.available.replace(index, Interval::new(chosen.start(), v - sep));
                if let Some(right) = Interval::new(v + sep, chosen.end()) {
                    self.available.insert(right);
                }
            } else {
                self.available.replace(index, chosen.with_end(v - sep));
            }
        } else if v + sep > chosen.end() {
            self.available.replace(index, None);
        } else {
            self.available.replace(index, chosen.with_start(v + sep));
        }
    }
}

impl<R: UniformSource> Iterator for SeparatedSampler<R> {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        self.draw().value()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.available.is_empty() {
            (0, Some(0))
        } else {
            (1, None)
        }
    }
}

impl<R: UniformSource> FusedIterator for SeparatedSampler<R> {}
