//! Randomness capability for burst generation

use ember_core::Vec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Uniform random draws used when launching fireworks.
///
/// Injected so tests can supply a seeded or fixed source.
pub trait RandomSource {
    /// Float in [min, max). Returns `min` for an empty range.
    fn range(&mut self, min: f32, max: f32) -> f32;

    /// Index in [0, len). `len` must be non-zero.
    fn index(&mut self, len: usize) -> usize;

    /// Integer microseconds in [min, max], inclusive
    fn range_us(&mut self, min: u64, max: u64) -> u64;

    /// Uniform direction on the unit sphere
    fn unit_vector(&mut self) -> Vec3 {
        // Marsaglia method for uniform sphere sampling
        loop {
            let x = self.range(-1.0, 1.0);
            let y = self.range(-1.0, 1.0);
            let s = x * x + y * y;
            if s < 1.0 {
                let factor = 2.0 * (1.0 - s).sqrt();
                return Vec3::new(x * factor, y * factor, 1.0 - 2.0 * s);
            }
        }
    }
}

/// `StdRng`-backed source; reproducible when built from a seed
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl RandomSource for SeededRandom {
    fn range(&mut self, min: f32, max: f32) -> f32 {
        if min >= max {
            return min;
        }
        self.rng.gen_range(min..max)
    }

    fn index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }

    fn range_us(&mut self, min: u64, max: u64) -> u64 {
        if min >= max {
            return min;
        }
        self.rng.gen_range(min..=max)
    }
}
