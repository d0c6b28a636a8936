//! Progress display for batches of sampler runs

use crate::io::configuration::{MIN_RUNS_FOR_PROGRESS, PROGRESS_BAR_WIDTH};
use indicatif::{ProgressBar, ProgressStyle};

/// Tracks completed runs of a batch on a single progress bar
///
/// Batches smaller than [`MIN_RUNS_FOR_PROGRESS`] get no bar at all.
pub struct ProgressManager {
    bar: Option<ProgressBar>,
}

impl ProgressManager {
    /// Create a manager for a batch of `runs`
    pub fn new(runs: usize) -> Self {
        let bar = (runs >= MIN_RUNS_FOR_PROGRESS).then(|| {
            let bar = ProgressBar::new(runs as u64);
            bar.set_style(Self::batch_style());
            bar
        });
        Self { bar }
    }

    /// A manager that never draws anything
    pub const fn hidden() -> Self {
        Self { bar: None }
    }

    /// Whether a bar is being shown
    pub const fn is_visible(&self) -> bool {
        self.bar.is_some()
    }

    /// Record one finished run
    pub fn complete_run(&self) {
        if let Some(ref bar) = self.bar {
            bar.inc(1);
        }
    }

    /// Clear the bar
    pub fn finish(&self) {
        if let Some(ref bar) = self.bar {
            bar.finish_and_clear();
        }
    }

    fn batch_style() -> ProgressStyle {
        let template =
            format!("[{{elapsed_precise}}] Runs: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}}");
        ProgressStyle::default_bar()
            .template(&template)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
    }
}
