//! Random numbers in `[0, 1)` with a guaranteed minimum circular separation
//!
//! Instead of rejection sampling, the sampler tracks the sub-intervals of the
//! unit circle that are still far enough from every earlier point and draws
//! uniformly from what remains, cutting an exclusion zone out after each draw.

#![forbid(unsafe_code)]

/// Interval bookkeeping and the separated sampler
pub mod algorithm;
/// Command-line driver, configuration, reporting and error handling
pub mod io;
/// Circular distances and randomness sources
pub mod math;

pub use algorithm::sampler::{Draw, SeparatedSampler};
pub use io::error::{Result, SamplerError};
pub use math::random::{ScriptedUniform, UniformSource};
