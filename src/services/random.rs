//! Randomness abstraction, mirroring the time-source pattern.
//!
//! Crash-variant selection and rain-field generation draw from a
//! `RandomSource` so tests can script exact outcomes instead of asserting
//! "any of three".

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;

/// Abstraction over pseudo-random draws.
pub trait RandomSource: std::fmt::Debug {
    /// Uniform index in `0..len`. `len` must be non-zero.
    fn pick_index(&mut self, len: usize) -> usize;

    /// Uniform float in `[0, 1)`.
    fn unit(&mut self) -> f32;
}

/// Production implementation backed by an entropy-seeded PRNG.
#[derive(Debug)]
pub struct SystemRandom {
    rng: StdRng,
}

impl SystemRandom {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Seeded variant, handy for reproducing a session.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for SystemRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for SystemRandom {
    fn pick_index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }

    fn unit(&mut self) -> f32 {
        self.rng.gen()
    }
}

/// Test implementation replaying a scripted sequence of draws.
///
/// Index draws are taken modulo `len`; unit draws replay scripted floats.
/// Both fall back to zero when the script runs dry, which keeps rain-field
/// generation total.
#[derive(Debug, Default)]
pub struct ScriptedRandom {
    indices: VecDeque<usize>,
    units: VecDeque<f32>,
}

impl ScriptedRandom {
    pub fn new(indices: impl IntoIterator<Item = usize>) -> Self {
        Self {
            indices: indices.into_iter().collect(),
            units: VecDeque::new(),
        }
    }

    pub fn with_units(mut self, units: impl IntoIterator<Item = f32>) -> Self {
        self.units = units.into_iter().collect();
        self
    }
}

impl RandomSource for ScriptedRandom {
    fn pick_index(&mut self, len: usize) -> usize {
        self.indices.pop_front().unwrap_or(0) % len
    }

    fn unit(&mut self) -> f32 {
        self.units.pop_front().unwrap_or(0.0)
    }
}
