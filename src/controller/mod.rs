pub mod display;
pub mod pipeline;
pub mod task;

use crate::error::Result;

pub use display::DisplayState;
pub use pipeline::{
    CalculationOutcome, Confirmation, FormInput, OutcomeSummary, run_calculation,
    run_calculation_with_progress,
};
pub use task::TaskController;

/// Where the form is in its Idle → Collecting Input → Calculating → Reporting cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerPhase {
    Idle,
    CollectingInput,
    Calculating,
    Reporting,
}

/// Messages from the background calculation to the form side.
#[derive(Debug)]
pub enum ControllerEvent {
    Phase(ControllerPhase),
    Finished(Result<CalculationOutcome>),
}
