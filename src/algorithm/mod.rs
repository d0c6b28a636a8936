/// Ordered set of intervals still open for sampling
pub mod available;
/// Interval value type
pub mod interval;
/// Separated sampler and its exclusion update
pub mod sampler;
