//! Command-line driver that draws separated samples and checks their spacing

use crate::algorithm::sampler::{Draw, SeparatedSampler};
use crate::io::configuration::{
    DEFAULT_DRAW_COUNT, DEFAULT_RUNS, DEFAULT_SEED, DEFAULT_SEP, MAX_SEP,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::progress::ProgressManager;
use crate::io::report::{BatchSummary, RunReport};
use clap::Parser;

/// Slack allowed when comparing measured gaps against the separation
pub const GAP_TOLERANCE: f64 = 1e-12;

#[derive(Parser, Debug, Clone)]
#[command(name = "randsep")]
#[command(
    author,
    version,
    about = "Draw random numbers on the unit circle with a minimum separation"
)]
/// Command-line arguments for the sampling driver
pub struct Cli {
    /// Minimum circular distance between samples, in [0, 0.5)
    #[arg(short = 'd', long, default_value_t = DEFAULT_SEP)]
    pub sep: f64,

    /// Number of draws per run
    #[arg(short, long, default_value_t = DEFAULT_DRAW_COUNT)]
    pub count: usize,

    /// Random seed for reproducible runs
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Number of independent runs, seeded consecutively from the seed
    #[arg(short, long, default_value_t = DEFAULT_RUNS)]
    pub runs: usize,

    /// Only print the batch summary
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check that the arguments describe a meaningful run
    ///
    /// # Errors
    ///
    /// Returns an invalid parameter error for a separation outside
    /// `[0, 0.5)` or a zero draw or run count
    pub fn validate(&self) -> Result<()> {
        if !(0.0..MAX_SEP).contains(&self.sep) {
            return Err(invalid_parameter(
                "sep",
                &self.sep,
                &format!("must lie in [0, {MAX_SEP})"),
            ));
        }
        if self.count == 0 {
            return Err(invalid_parameter("count", &self.count, &"must be positive"));
        }
        if self.runs == 0 {
            return Err(invalid_parameter("runs", &self.runs, &"must be positive"));
        }
        Ok(())
    }
}

/// Runs samplers as configured on the command line and reports on them
pub struct Driver {
    cli: Cli,
}

impl Driver {
    /// Create a driver, validating the arguments
    ///
    /// # Errors
    ///
    /// Returns an error if the arguments fail [`Cli::validate`]
    pub fn new(cli: Cli) -> Result<Self> {
        cli.validate()?;
        Ok(Self { cli })
    }

    /// Draw `count` times from a fresh sampler seeded with `seed`
    ///
    /// Exhausted draws are dropped from the samples; the first one is
    /// remembered in the report.
    pub fn run_once(&self, seed: u64) -> RunReport {
        let mut sampler = SeparatedSampler::seeded(self.cli.sep, seed);
        let mut samples = Vec::with_capacity(self.cli.count);
        let mut exhausted_after = None;

        for draw_index in 1..=self.cli.count {
            match sampler.draw() {
                Draw::Sample(v) => samples.push(v),
                Draw::Exhausted => {
                    exhausted_after = Some(draw_index);
                    break;
                }
            }
        }

        let report = RunReport::new(seed, samples, exhausted_after);
        log::info!(
            "seed {seed}: {} samples, minimum gap {:?}",
            report.samples.len(),
            report.min_gap
        );
        report
    }

    /// Run every configured seed and aggregate the results
    ///
    /// # Errors
    ///
    /// Returns an error if the summary cannot be computed
    pub fn run_batch(&self) -> Result<(Vec<RunReport>, BatchSummary)> {
        let progress = if self.cli.quiet {
            ProgressManager::hidden()
        } else {
            ProgressManager::new(self.cli.runs)
        };

        let mut reports = Vec::with_capacity(self.cli.runs);
        for offset in 0..self.cli.runs as u64 {
            reports.push(self.run_once(self.cli.seed.wrapping_add(offset)));
            progress.complete_run();
        }
        progress.finish();

        let summary = BatchSummary::from_reports(&reports, self.cli.sep, GAP_TOLERANCE)?;
        if summary.violations > 0 {
            log::warn!(
                "{} of {} runs fell below the separation {}",
                summary.violations,
                summary.runs,
                self.cli.sep
            );
        }
        Ok((reports, summary))
    }

    /// Run the batch and produce the text to print
    ///
    /// A single run is listed in full; batches print the summary only,
    /// preceded by each run's listing unless quiet.
    ///
    /// # Errors
    ///
    /// Returns an error if the batch fails
    pub fn process(&self) -> Result<String> {
        let (reports, summary) = self.run_batch()?;

        let mut out = String::new();
        if let [single] = reports.as_slice() {
            out.push_str(&single.to_string());
            return Ok(out);
        }

        if !self.cli.quiet {
            for report in &reports {
                out.push_str(&format!("# seed {}\n", report.seed));
                out.push_str(&report.to_string());
                out.push('\n');
            }
        }
        out.push_str(&summary.render());
        Ok(out)
    }
}
