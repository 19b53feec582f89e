//! Port supplying claim awards.

use crate::domain::ClaimPoints;

/// Source of claim awards, uniform over `1..=10` in production.
#[cfg_attr(test, mockall::automock)]
pub trait PointsSource: Send + Sync {
    /// Draw the award for the next claim.
    fn draw(&self) -> ClaimPoints;
}

/// Source that always awards the same amount. Used by tests and demos that
/// need deterministic balances.
#[derive(Debug, Clone, Copy)]
pub struct FixedPointsSource(pub ClaimPoints);

impl PointsSource for FixedPointsSource {
    fn draw(&self) -> ClaimPoints {
        self.0
    }
}
