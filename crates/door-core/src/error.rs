use thiserror::Error;

/// Failures surfaced by the belief filter and its inputs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FilterError {
    #[error("invalid {axis}: {value}")]
    InvalidInput { axis: &'static str, value: String },
    #[error(
        "degenerate belief: corrected weights ({corrected_open}, {corrected_closed}) cannot be normalized"
    )]
    DegenerateBelief {
        corrected_open: f64,
        corrected_closed: f64,
    },
    #[error("invalid belief distribution ({p_open}, {p_closed})")]
    InvalidBelief { p_open: f64, p_closed: f64 },
    #[error("{table}: probability {value} is outside [0, 1]")]
    InvalidProbability { table: &'static str, value: f64 },
}

impl FilterError {
    pub(crate) fn invalid_input(axis: &'static str, value: impl ToString) -> Self {
        FilterError::InvalidInput {
            axis,
            value: value.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::FilterError;

    #[test]
    fn invalid_input_names_axis_and_value() {
        let err = FilterError::invalid_input("action", 7);
        assert_eq!(err.to_string(), "invalid action: 7");
    }

    #[test]
    fn invalid_probability_names_table() {
        let err = FilterError::InvalidProbability {
            table: "sensor",
            value: 1.5,
        };
        assert_eq!(err.to_string(), "sensor: probability 1.5 is outside [0, 1]");
    }
}
