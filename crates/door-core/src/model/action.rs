use core::fmt;
use core::str::FromStr;
use serde::Serialize;

use crate::error::FilterError;

/// Robot action applied before each observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Push,
    DoNothing,
}

impl Action {
    pub const ALL: [Action; 2] = [Action::Push, Action::DoNothing];

    /// Decodes the numeric encoding used by recorded runs: `0` does nothing, `1` pushes.
    pub fn from_code(code: u8) -> Result<Self, FilterError> {
        match code {
            0 => Ok(Action::DoNothing),
            1 => Ok(Action::Push),
            other => Err(FilterError::invalid_input("action", other)),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Action::Push => "push",
            Action::DoNothing => "do_nothing",
        }
    }
}

impl FromStr for Action {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "push" => Ok(Action::Push),
            "do_nothing" => Ok(Action::DoNothing),
            other => Err(FilterError::invalid_input("action", other)),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
