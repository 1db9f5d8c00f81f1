use crate::calculator::constants::{CALORIES_LABEL_PREFIX, COST_LABEL_PREFIX};
use crate::calculator::{calories_line, cost_line};
use crate::controller::pipeline::{CalculationOutcome, Confirmation};
use crate::controller::{ControllerEvent, ControllerPhase};
use crate::error::Result;

/// Output labels and status owned by the form side.
///
/// Only the receiver of controller events mutates this; background tasks never do.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayState {
    pub calories_label: String,
    pub cost_label: String,
    pub phase: ControllerPhase,
    pub confirmation: Option<Confirmation>,
    pub last_error: Option<String>,
}

impl Default for DisplayState {
    fn default() -> Self {
        Self {
            calories_label: CALORIES_LABEL_PREFIX.to_string(),
            cost_label: COST_LABEL_PREFIX.to_string(),
            phase: ControllerPhase::Idle,
            confirmation: None,
            last_error: None,
        }
    }
}

impl DisplayState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one controller event.
    pub fn handle(&mut self, event: &ControllerEvent) {
        match event {
            ControllerEvent::Phase(phase) => self.phase = *phase,
            ControllerEvent::Finished(result) => self.apply(result),
        }
    }

    /// Apply a finished calculation. Both labels come from the same outcome.
    pub fn apply(&mut self, result: &Result<CalculationOutcome>) {
        self.phase = ControllerPhase::Idle;

        match result {
            Ok(outcome) => {
                self.calories_label = calories_line(outcome.record.calories);
                self.cost_label = cost_line(outcome.record.cost);
                self.confirmation = Some(outcome.confirmation());
                self.last_error = None;
            }
            Err(err) => {
                self.confirmation = None;
                self.last_error = Some(err.to_string());
            }
        }
    }
}
