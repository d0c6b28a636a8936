//! Driver defaults and validation bounds

/// Default minimum separation between samples
pub const DEFAULT_SEP: f64 = 0.1;

/// Default number of draws per run
pub const DEFAULT_DRAW_COUNT: usize = 8;

/// Fixed seed for reproducible runs
pub const DEFAULT_SEED: u64 = 42;

/// Default number of independent runs
pub const DEFAULT_RUNS: usize = 1;

// Separation of half the circle or more leaves room for a single point
/// Exclusive upper bound accepted for the separation on the command line
pub const MAX_SEP: f64 = 0.5;

/// Decimal places used when printing samples and gaps
pub const DISPLAY_PRECISION: usize = 3;

// Progress bar display settings
/// Width of the batch progress bar in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
/// Smallest batch that gets a progress bar
pub const MIN_RUNS_FOR_PROGRESS: usize = 2;
