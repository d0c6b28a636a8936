//! Summaries of driver runs and their text rendering

use crate::io::configuration::DISPLAY_PRECISION;
use crate::io::error::{Result, computation_error};
use crate::math::circular::min_circular_gap;
use std::fmt;

/// What a single run of the sampler produced
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    /// Seed the run was driven by
    pub seed: u64,
    /// Samples in the order they were drawn
    pub samples: Vec<f64>,
    /// Samples in ascending order
    pub sorted: Vec<f64>,
    /// Smallest circular gap between samples, `None` with fewer than two
    pub min_gap: Option<f64>,
    /// Draw at which the sampler first reported exhaustion, if it did
    pub exhausted_after: Option<usize>,
}

impl RunReport {
    /// Build a report from the drawn samples
    pub fn new(seed: u64, samples: Vec<f64>, exhausted_after: Option<usize>) -> Self {
        let mut sorted = samples.clone();
        sorted.sort_by(f64::total_cmp);
        let min_gap = min_circular_gap(&samples);
        Self {
            seed,
            samples,
            sorted,
            min_gap,
            exhausted_after,
        }
    }

    /// Whether every pair of samples is at least `sep` apart
    ///
    /// `tolerance` absorbs rounding in the interval arithmetic.
    pub fn respects(&self, sep: f64, tolerance: f64) -> bool {
        self.min_gap.is_none_or(|gap| gap + tolerance >= sep)
    }
}

/// Listing of raw values, sorted values and the minimum gap
impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = DISPLAY_PRECISION;
        for value in &self.samples {
            writeln!(f, "{value:.precision$}")?;
        }
        if let Some(draw) = self.exhausted_after {
            writeln!(f, "(exhausted at draw {draw})")?;
        }
        writeln!(f, "\nSorted List:")?;
        for value in &self.sorted {
            writeln!(f, "{value:.precision$}")?;
        }
        match self.min_gap {
            Some(gap) => writeln!(f, "\nThe minimum deviation is {gap:.precision$}"),
            None => writeln!(f, "\nToo few samples for a minimum deviation"),
        }
    }
}

/// Aggregate over several independent runs
#[derive(Debug, Clone, PartialEq)]
pub struct BatchSummary {
    /// Number of runs aggregated
    pub runs: usize,
    /// Smallest gap seen in any run
    pub min_gap: Option<f64>,
    /// Mean number of samples per run
    pub mean_samples: f64,
    /// Runs that ran out of room before the requested count
    pub exhausted_runs: usize,
    /// Runs whose minimum gap fell below the separation
    pub violations: usize,
}

impl BatchSummary {
    /// Aggregate run reports against the configured separation
    ///
    /// # Errors
    ///
    /// Returns a computation error when `reports` is empty
    pub fn from_reports(reports: &[RunReport], sep: f64, tolerance: f64) -> Result<Self> {
        if reports.is_empty() {
            return Err(computation_error("batch summary", &"no runs to summarise"));
        }

        let min_gap = reports
            .iter()
            .filter_map(|report| report.min_gap)
            .reduce(f64::min);
        let total_samples: usize = reports.iter().map(|report| report.samples.len()).sum();
        let exhausted_runs = reports
            .iter()
            .filter(|report| report.exhausted_after.is_some())
            .count();
        let violations = reports
            .iter()
            .filter(|report| !report.respects(sep, tolerance))
            .count();

        Ok(Self {
            runs: reports.len(),
            min_gap,
            mean_samples: total_samples as f64 / reports.len() as f64,
            exhausted_runs,
            violations,
        })
    }

    /// One-paragraph description of the batch
    pub fn render(&self) -> String {
        let precision = DISPLAY_PRECISION;
        let gap = self.min_gap.map_or_else(
            || "n/a".to_string(),
            |gap| format!("{gap:.precision$}"),
        );
        format!(
            "Runs: {}\nMean samples per run: {:.2}\nExhausted runs: {}\nMinimum deviation: {gap}\nSeparation violations: {}\n",
            self.runs, self.mean_samples, self.exhausted_runs, self.violations
        )
    }
}
