use crate::domain::ports::RandomSource;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// `rand`-backed source for the periodic breakage roll.
///
/// `StdRng` is `Send`, so rotors holding one can run on any runtime worker.
pub struct StdRandom(StdRng);

impl StdRandom {
    pub fn from_os_rng() -> Self {
        Self(StdRng::from_os_rng())
    }

    /// Reproducible rolls, e.g. for replaying a session.
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl RandomSource for StdRandom {
    fn next_f64(&mut self) -> f64 {
        self.0.random::<f64>()
    }
}
