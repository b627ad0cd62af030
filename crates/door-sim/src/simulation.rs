//! Drives the belief filter through a fixed sequence of steps.

use door_core::FilterError;
use door_core::belief::{BeliefDistribution, BeliefUpdater};
use door_core::model::action::Action;
use door_core::model::observation::Observation;
use door_core::model::step::Step;
use serde::Serialize;
use tracing::info;

/// Initial belief, ordered inputs and the models they run through.
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    pub initial: BeliefDistribution,
    pub steps: Vec<Step>,
    pub updater: BeliefUpdater,
}

impl Scenario {
    /// The five-step run from the lecture, starting from a uniform belief.
    pub fn lecture() -> Self {
        Self {
            initial: BeliefDistribution::uniform(),
            steps: vec![
                Step::new(Action::DoNothing, Observation::SenseClosed),
                Step::new(Action::Push, Observation::SenseClosed),
                Step::new(Action::DoNothing, Observation::SenseClosed),
                Step::new(Action::Push, Observation::SenseOpen),
                Step::new(Action::DoNothing, Observation::SenseOpen),
            ],
            updater: BeliefUpdater::lecture(),
        }
    }
}

/// Posterior after one step, tagged with its zero-based index.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IterationRecord {
    pub iteration: usize,
    pub step: Step,
    pub belief: BeliefDistribution,
}

pub struct Simulation;

impl Simulation {
    /// Feeds every posterior back in as the next prior.
    pub fn run(scenario: &Scenario) -> Result<Vec<IterationRecord>, FilterError> {
        let mut belief = scenario.initial;
        let mut records = Vec::with_capacity(scenario.steps.len());
        for (iteration, step) in scenario.steps.iter().copied().enumerate() {
            belief = scenario.updater.apply(belief, step)?;
            info!(
                iteration,
                action = %step.action,
                observation = %step.observation,
                p_open = belief.p_open(),
                p_closed = belief.p_closed(),
                "belief updated"
            );
            records.push(IterationRecord {
                iteration,
                step,
                belief,
            });
        }
        Ok(records)
    }
}
