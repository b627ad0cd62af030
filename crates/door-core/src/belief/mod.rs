//! Discrete Bayes filter over the two door states.
//!
//! This module is composed of:
//! - `distribution`: the normalized belief (`BeliefDistribution`).
//! - `tables`: fixed action and sensor probability tables.
//! - `update`: prediction, correction and normalization (`BeliefUpdater`).

mod distribution;
mod tables;
mod update;

pub use distribution::{BeliefDistribution, NORMALIZATION_TOLERANCE};
pub use tables::{ActionModel, Likelihoods, SensorModel, TransitionTable};
pub use update::{BeliefUpdater, WeightedBelief, correct, predict, update};
