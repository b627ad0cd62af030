use serde::Serialize;

use super::action::Action;
use super::observation::Observation;
use crate::error::FilterError;

/// One filter input: the action taken, then the reading observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Step {
    pub action: Action,
    pub observation: Observation,
}

impl Step {
    pub const fn new(action: Action, observation: Observation) -> Self {
        Self {
            action,
            observation,
        }
    }

    /// Builds a step from numeric action/observation codes, rejecting anything undefined.
    pub fn from_codes(action: u8, observation: u8) -> Result<Self, FilterError> {
        Ok(Self::new(
            Action::from_code(action)?,
            Observation::from_code(observation)?,
        ))
    }
}
