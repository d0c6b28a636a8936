//! Sources of uniform random reals consumed by the sampler

use rand::{Rng, RngCore};

/// Anything able to hand out uniform reals in `[0, 1)`
///
/// Every `rand` generator qualifies through the blanket implementation;
/// [`ScriptedUniform`] replays fixed values for reproducible tests.
pub trait UniformSource {
    /// Next value in `[0, 1)`
    fn next_uniform(&mut self) -> f64;
}

impl<R: RngCore> UniformSource for R {
    fn next_uniform(&mut self) -> f64 {
        self.random::<f64>()
    }
}

/// Replays a fixed list of values, starting over once it runs out
///
/// An empty script always yields `0.0`.
#[derive(Debug, Clone, Default)]
pub struct ScriptedUniform {
    values: Vec<f64>,
    cursor: usize,
}

impl ScriptedUniform {
    /// Script the values returned by successive calls
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        Self {
            values: values.into(),
            cursor: 0,
        }
    }

    /// How many values have been handed out so far
    pub const fn consumed(&self) -> usize {
        self.cursor
    }
}

impl UniformSource for ScriptedUniform {
    fn next_uniform(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self
            .values
            .get(self.cursor % self.values.len())
            .copied()
            .unwrap_or_default();
        self.cursor += 1;
        value
    }
}
