//! Fixed probability tables consumed by the filter.

use crate::error::FilterError;
use crate::model::action::Action;
use crate::model::observation::Observation;
use crate::model::state::DoorState;

fn check_probability(table: &'static str, value: f64) -> Result<f64, FilterError> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(FilterError::InvalidProbability { table, value })
    }
}

/// Pair of probabilities indexed by door state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Likelihoods {
    pub open: f64,
    pub closed: f64,
}

impl Likelihoods {
    pub const fn new(open: f64, closed: f64) -> Self {
        Self { open, closed }
    }

    pub fn get(&self, state: DoorState) -> f64 {
        match state {
            DoorState::Open => self.open,
            DoorState::Closed => self.closed,
        }
    }

    fn validated(self, table: &'static str) -> Result<Self, FilterError> {
        check_probability(table, self.open)?;
        check_probability(table, self.closed)?;
        Ok(self)
    }
}

/// `p(next_state | action, prev_state)` for one action, keyed by the previous state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionTable {
    from_open: Likelihoods,
    from_closed: Likelihoods,
}

impl TransitionTable {
    /// Each row holds `(p_next_open, p_next_closed)` for the given previous state.
    pub fn new(from_open: Likelihoods, from_closed: Likelihoods) -> Result<Self, FilterError> {
        Ok(Self {
            from_open: from_open.validated("transition")?,
            from_closed: from_closed.validated("transition")?,
        })
    }

    /// Distribution over the next state given the previous one.
    pub fn row(&self, prev: DoorState) -> Likelihoods {
        match prev {
            DoorState::Open => self.from_open,
            DoorState::Closed => self.from_closed,
        }
    }

    /// `p(next | prev)` for a single pair of states.
    pub fn probability(&self, next: DoorState, prev: DoorState) -> f64 {
        self.row(prev).get(next)
    }
}

/// Transition tables for both robot actions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActionModel {
    push: TransitionTable,
    do_nothing: TransitionTable,
}

impl ActionModel {
    pub const fn new(push: TransitionTable, do_nothing: TransitionTable) -> Self {
        Self { push, do_nothing }
    }

    /// Pushing opens a closed door 80% of the time; doing nothing never changes the door.
    pub fn lecture() -> Self {
        Self {
            push: TransitionTable {
                from_open: Likelihoods::new(1.0, 0.0),
                from_closed: Likelihoods::new(0.8, 0.2),
            },
            do_nothing: TransitionTable {
                from_open: Likelihoods::new(1.0, 0.0),
                from_closed: Likelihoods::new(0.0, 1.0),
            },
        }
    }

    pub fn table(&self, action: Action) -> &TransitionTable {
        match action {
            Action::Push => &self.push,
            Action::DoNothing => &self.do_nothing,
        }
    }
}

/// `p(observation | true_state)`, keyed by the true state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensorModel {
    when_open: Likelihoods,
    when_closed: Likelihoods,
}

impl SensorModel {
    /// Rows hold `(p_sense_open, p_sense_closed)` for a door that is truly open/closed.
    ///
    /// Zero likelihoods are accepted; a reading that is impossible under every state
    /// surfaces later as [`FilterError::DegenerateBelief`].
    pub fn new(when_open: Likelihoods, when_closed: Likelihoods) -> Result<Self, FilterError> {
        Ok(Self {
            when_open: when_open.validated("sensor")?,
            when_closed: when_closed.validated("sensor")?,
        })
    }

    /// Sensor reports the true state 60% of the time when open and 80% when closed.
    pub fn lecture() -> Self {
        Self {
            when_open: Likelihoods::new(0.6, 0.4),
            when_closed: Likelihoods::new(0.2, 0.8),
        }
    }

    /// `p(observation | state)`.
    pub fn likelihood(&self, observation: Observation, state: DoorState) -> f64 {
        let row = match state {
            DoorState::Open => self.when_open,
            DoorState::Closed => self.when_closed,
        };
        row.get(observation.reported_state())
    }

    /// Likelihood of `observation` under each true state.
    pub fn likelihoods(&self, observation: Observation) -> Likelihoods {
        Likelihoods::new(
            self.likelihood(observation, DoorState::Open),
            self.likelihood(observation, DoorState::Closed),
        )
    }
}
