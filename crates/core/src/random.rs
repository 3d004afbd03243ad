use rand::Rng;
use rand::rngs::{StdRng, ThreadRng};

/// Source of uniformly distributed integers for problem generation.
///
/// Production code passes a `StdRng` or `ThreadRng`; tests pass a
/// `ScriptedRandom` or a seeded `StdRng`.
pub trait RandomSource {
    /// Returns a value in `[0, upper)`, or `0` when `upper` is zero.
    fn below(&mut self, upper: u32) -> u32;
}

fn uniform_below<R: Rng + ?Sized>(rng: &mut R, upper: u32) -> u32 {
    if upper == 0 {
        return 0;
    }
    rng.random_range(0..upper)
}

impl RandomSource for StdRng {
    fn below(&mut self, upper: u32) -> u32 {
        uniform_below(self, upper)
    }
}

impl RandomSource for ThreadRng {
    fn below(&mut self, upper: u32) -> u32 {
        uniform_below(self, upper)
    }
}

/// Replays a fixed sequence of draws, cycling when exhausted.
///
/// Each draw is reduced modulo the requested bound so the contract of
/// `RandomSource::below` holds for any script.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    values: Vec<u32>,
    cursor: usize,
}

impl ScriptedRandom {
    #[must_use]
    pub fn new(values: Vec<u32>) -> Self {
        Self { values, cursor: 0 }
    }

    /// Number of draws served so far.
    #[must_use]
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedRandom {
    fn below(&mut self, upper: u32) -> u32 {
        if upper == 0 || self.values.is_empty() {
            self.cursor += 1;
            return 0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value % upper
    }
}
