use core::fmt;
use core::str::FromStr;
use serde::Serialize;

use crate::error::FilterError;
use crate::model::state::DoorState;

/// Noisy sensor reading of the door.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Observation {
    SenseOpen,
    SenseClosed,
}

impl Observation {
    pub const ALL: [Observation; 2] = [Observation::SenseOpen, Observation::SenseClosed];

    /// Decodes the numeric encoding used by recorded runs: `0` senses closed, `1` senses open.
    pub fn from_code(code: u8) -> Result<Self, FilterError> {
        match code {
            0 => Ok(Observation::SenseClosed),
            1 => Ok(Observation::SenseOpen),
            other => Err(FilterError::invalid_input("observation", other)),
        }
    }

    /// The door state this reading reports.
    pub const fn reported_state(self) -> DoorState {
        match self {
            Observation::SenseOpen => DoorState::Open,
            Observation::SenseClosed => DoorState::Closed,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Observation::SenseOpen => "sense_open",
            Observation::SenseClosed => "sense_closed",
        }
    }
}

impl FromStr for Observation {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sense_open" => Ok(Observation::SenseOpen),
            "sense_closed" => Ok(Observation::SenseClosed),
            other => Err(FilterError::invalid_input("observation", other)),
        }
    }
}

impl fmt::Display for Observation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
