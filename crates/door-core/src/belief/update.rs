//! Prediction, correction and normalization steps of the filter.

use tracing::debug;

use super::distribution::BeliefDistribution;
use super::tables::{ActionModel, SensorModel};
use crate::error::FilterError;
use crate::model::action::Action;
use crate::model::observation::Observation;
use crate::model::state::DoorState;
use crate::model::step::Step;

/// Per-state weights that have not been normalized yet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightedBelief {
    pub open: f64,
    pub closed: f64,
}

impl WeightedBelief {
    pub fn total(&self) -> f64 {
        self.open + self.closed
    }

    /// Scales the weights by `eta = 1 / total`.
    pub fn normalize(self) -> Result<BeliefDistribution, FilterError> {
        let total = self.total();
        if !(total.is_finite() && total > 0.0) {
            return Err(FilterError::DegenerateBelief {
                corrected_open: self.open,
                corrected_closed: self.closed,
            });
        }
        let eta = 1.0 / total;
        if !eta.is_finite() {
            return Err(FilterError::DegenerateBelief {
                corrected_open: self.open,
                corrected_closed: self.closed,
            });
        }
        // A lone non-zero weight can round a hair past 1.
        Ok(BeliefDistribution::from_normalized(
            (eta * self.open).clamp(0.0, 1.0),
            (eta * self.closed).clamp(0.0, 1.0),
        ))
    }
}

/// Action update: marginalizes the prior over the transition table for `action`.
pub fn predict(
    prior: &BeliefDistribution,
    action: Action,
    action_model: &ActionModel,
) -> WeightedBelief {
    let table = action_model.table(action);
    let towards = |next: DoorState| {
        table.probability(next, DoorState::Open) * prior.p_open()
            + table.probability(next, DoorState::Closed) * prior.p_closed()
    };
    WeightedBelief {
        open: towards(DoorState::Open),
        closed: towards(DoorState::Closed),
    }
}

/// Measurement update: weights each predicted state by the likelihood of `observation`.
pub fn correct(
    predicted: &WeightedBelief,
    observation: Observation,
    sensor_model: &SensorModel,
) -> WeightedBelief {
    let likelihoods = sensor_model.likelihoods(observation);
    WeightedBelief {
        open: likelihoods.open * predicted.open,
        closed: likelihoods.closed * predicted.closed,
    }
}

/// Runs one full filter step and returns the posterior belief.
pub fn update(
    prior: BeliefDistribution,
    step: Step,
    action_model: &ActionModel,
    sensor_model: &SensorModel,
) -> Result<BeliefDistribution, FilterError> {
    let predicted = predict(&prior, step.action, action_model);
    let corrected = correct(&predicted, step.observation, sensor_model);
    debug!(
        action = %step.action,
        observation = %step.observation,
        predicted_open = predicted.open,
        predicted_closed = predicted.closed,
        corrected_open = corrected.open,
        corrected_closed = corrected.closed,
        eta = 1.0 / corrected.total(),
        "belief update"
    );
    corrected.normalize()
}

/// Filter bound to a fixed pair of action and sensor models.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BeliefUpdater {
    action_model: ActionModel,
    sensor_model: SensorModel,
}

impl BeliefUpdater {
    pub fn new(action_model: ActionModel, sensor_model: SensorModel) -> Self {
        Self {
            action_model,
            sensor_model,
        }
    }

    pub fn lecture() -> Self {
        Self::new(ActionModel::lecture(), SensorModel::lecture())
    }

    pub fn action_model(&self) -> &ActionModel {
        &self.action_model
    }

    pub fn apply(
        &self,
        prior: BeliefDistribution,
        step: Step,
    ) -> Result<BeliefDistribution, FilterError> {
        update(prior, step, &self.action_model, &self.sensor_model)
    }
}
