/// Command-line arguments and the sampling driver
pub mod cli;
/// Driver defaults and validation bounds
pub mod configuration;
/// Error types for the driver
pub mod error;
/// Batch progress display
pub mod progress;
/// Run reports and batch summaries
pub mod report;
