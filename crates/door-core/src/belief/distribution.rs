use serde::Serialize;

use crate::error::FilterError;
use crate::model::state::DoorState;

/// Maximum deviation from 1 tolerated for the sum of a belief.
pub const NORMALIZATION_TOLERANCE: f64 = 1e-9;

/// Probability that the door is open or closed. Always normalized.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BeliefDistribution {
    p_open: f64,
    p_closed: f64,
}

impl BeliefDistribution {
    /// Validates that both probabilities lie in `[0, 1]` and sum to 1.
    pub fn new(p_open: f64, p_closed: f64) -> Result<Self, FilterError> {
        let in_range = |p: f64| p.is_finite() && (0.0..=1.0).contains(&p);
        if !in_range(p_open)
            || !in_range(p_closed)
            || ((p_open + p_closed) - 1.0).abs() > NORMALIZATION_TOLERANCE
        {
            return Err(FilterError::InvalidBelief { p_open, p_closed });
        }
        Ok(Self { p_open, p_closed })
    }

    /// Maximum-uncertainty prior.
    pub const fn uniform() -> Self {
        Self {
            p_open: 0.5,
            p_closed: 0.5,
        }
    }

    pub(crate) const fn from_normalized(p_open: f64, p_closed: f64) -> Self {
        Self { p_open, p_closed }
    }

    pub fn p_open(&self) -> f64 {
        self.p_open
    }

    pub fn p_closed(&self) -> f64 {
        self.p_closed
    }

    pub fn probability(&self, state: DoorState) -> f64 {
        match state {
            DoorState::Open => self.p_open,
            DoorState::Closed => self.p_closed,
        }
    }
}

impl Default for BeliefDistribution {
    fn default() -> Self {
        Self::uniform()
    }
}
