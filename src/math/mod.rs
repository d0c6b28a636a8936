/// Distances and gaps measured round the unit circle
pub mod circular;
/// Uniform randomness sources, seeded or scripted
pub mod random;
