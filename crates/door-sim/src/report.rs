use std::io::Write;

use door_core::model::action::Action;
use door_core::model::observation::Observation;
use door_core::model::state::DoorState;
use serde::Serialize;
use thiserror::Error;

use crate::config::OutputFormat;
use crate::simulation::IterationRecord;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("writing belief report: {0}")]
    Io(#[from] std::io::Error),
    #[error("encoding belief report: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Serialize)]
struct JsonRow {
    iteration: usize,
    action: Action,
    observation: Observation,
    p_open: f64,
    p_closed: f64,
}

impl From<&IterationRecord> for JsonRow {
    fn from(record: &IterationRecord) -> Self {
        Self {
            iteration: record.iteration,
            action: record.step.action,
            observation: record.step.observation,
            p_open: record.belief.p_open(),
            p_closed: record.belief.p_closed(),
        }
    }
}

pub fn write_report<W: Write>(
    out: &mut W,
    records: &[IterationRecord],
    format: OutputFormat,
) -> Result<(), ReportError> {
    match format {
        OutputFormat::Text => write_text(out, records),
        OutputFormat::Jsonl => write_jsonl(out, records),
    }
}

/// Beliefs use `f64` `Display` (shortest round-trip digits), not a fixed six-digit precision.
fn write_text<W: Write>(out: &mut W, records: &[IterationRecord]) -> Result<(), ReportError> {
    for record in records {
        for state in DoorState::ALL {
            writeln!(
                out,
                "iteration {} {} with belief: {}",
                record.iteration,
                state,
                record.belief.probability(state)
            )?;
        }
    }
    Ok(())
}

fn write_jsonl<W: Write>(out: &mut W, records: &[IterationRecord]) -> Result<(), ReportError> {
    for record in records {
        serde_json::to_writer(&mut *out, &JsonRow::from(record))?;
        out.write_all(b"\n")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use door_core::belief::BeliefDistribution;
    use door_core::model::step::Step;

    fn sample() -> Vec<IterationRecord> {
        vec![IterationRecord {
            iteration: 0,
            step: Step::new(Action::DoNothing, Observation::SenseClosed),
            belief: BeliefDistribution::new(0.25, 0.75).expect("valid belief"),
        }]
    }

    #[test]
    fn text_report_lists_open_then_closed() {
        let mut out = Vec::new();
        write_report(&mut out, &sample(), OutputFormat::Text).expect("write");
        assert_eq!(
            String::from_utf8(out).expect("utf8"),
            "iteration 0 open with belief: 0.25\niteration 0 closed with belief: 0.75\n"
        );
    }

    #[test]
    fn text_report_keeps_full_precision() {
        let records = vec![IterationRecord {
            iteration: 3,
            step: Step::new(Action::Push, Observation::SenseOpen),
            belief: BeliefDistribution::new(1.0 / 3.0, 2.0 / 3.0).expect("valid belief"),
        }];
        let mut out = Vec::new();
        write_report(&mut out, &records, OutputFormat::Text).expect("write");
        assert_eq!(
            String::from_utf8(out).expect("utf8"),
            "iteration 3 open with belief: 0.3333333333333333\n\
             iteration 3 closed with belief: 0.6666666666666666\n"
        );
    }

    #[test]
    fn jsonl_report_has_one_object_per_iteration() {
        let mut out = Vec::new();
        write_report(&mut out, &sample(), OutputFormat::Jsonl).expect("write");
        let text = String::from_utf8(out).expect("utf8");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 1);
        let value: serde_json::Value = serde_json::from_str(lines[0]).expect("valid json");
        assert_eq!(value["iteration"], 0);
        assert_eq!(value["action"], "do_nothing");
        assert_eq!(value["observation"], "sense_closed");
        assert_eq!(value["p_open"], 0.25);
        assert_eq!(value["p_closed"], 0.75);
    }
}
