//! Injected randomness
//!
//! The simulation only ever asks for a uniform value in `[0, 1)`, so tests can
//! swap in a constant source and get exact, repeatable trajectories.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Source of uniform values in `[0, 1)`
pub trait RandomSource {
    fn unit(&mut self) -> f32;
}

/// Seeded PCG generator used for real sessions
#[derive(Debug, Clone)]
pub struct SimRng {
    seed: u64,
    rng: Pcg32,
}

impl SimRng {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Seed picked from the thread RNG
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for SimRng {
    #[inline]
    fn unit(&mut self) -> f32 {
        self.rng.random::<f32>()
    }
}

/// Always returns the same value (clamped into `[0, 1)`)
#[derive(Debug, Clone, Copy)]
pub struct FixedRandom(pub f32);

impl RandomSource for FixedRandom {
    #[inline]
    fn unit(&mut self) -> f32 {
        self.0.clamp(0.0, 1.0 - f32::EPSILON)
    }
}
