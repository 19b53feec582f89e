//! `rand`-backed [`PointsSource`] drawing uniformly from the claim range.

use std::sync::Mutex;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::domain::ports::PointsSource;
use crate::domain::{ClaimPoints, MAX_CLAIM_POINTS, MIN_CLAIM_POINTS};

/// Uniform draw over `MIN_CLAIM_POINTS..=MAX_CLAIM_POINTS`.
#[derive(Debug)]
pub struct RandomPointsSource {
    rng: Mutex<SmallRng>,
}

impl RandomPointsSource {
    /// Seed from the operating system.
    pub fn from_entropy() -> Self {
        Self {
            rng: Mutex::new(SmallRng::from_entropy()),
        }
    }

    /// Deterministic source for reproducible runs.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(SmallRng::seed_from_u64(seed)),
        }
    }
}

impl Default for RandomPointsSource {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl PointsSource for RandomPointsSource {
    fn draw(&self) -> ClaimPoints {
        let value = self
            .rng
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .gen_range(MIN_CLAIM_POINTS..=MAX_CLAIM_POINTS);
        ClaimPoints::new(value).unwrap_or(ClaimPoints::MIN)
    }
}
