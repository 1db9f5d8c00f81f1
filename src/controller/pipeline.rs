use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::controller::ControllerPhase;
use crate::error::{RecipeError, Result};
use crate::models::{Quantities, Recipe, RecipeKind, ReportRecord};
use crate::report::{self, ReportFormat};
use crate::store::RecordSink;

const SAVED_TITLE: &str = "Сохранено";
const FAILED_TITLE: &str = "Ошибка сохранения";

/// Raw form contents, exactly as typed or selected.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormInput {
    pub recipe: String,
    pub meat: String,
    pub cheese: String,
    pub vegetables: String,
    pub sauce: String,
    /// Report format selection; empty means no report file.
    pub report_format: String,
}

/// Everything one calculation produced.
///
/// The report and the store write succeed or fail independently.
#[derive(Debug)]
pub struct CalculationOutcome {
    pub record: ReportRecord,
    /// `None` when no report format was selected.
    pub report: Option<Result<PathBuf>>,
    pub stored: Result<()>,
}

/// Message shown to the user once a calculation finishes.
#[derive(Debug, Clone, PartialEq)]
pub struct Confirmation {
    pub title: &'static str,
    pub message: String,
    pub is_error: bool,
}

/// Flat view of an outcome for JSON output.
#[derive(Debug, Serialize)]
pub struct OutcomeSummary {
    pub name: String,
    pub calories: f64,
    pub cost: f64,
    pub report: Option<String>,
    pub report_error: Option<String>,
    pub stored: bool,
    pub store_error: Option<String>,
}

impl CalculationOutcome {
    pub fn report_path(&self) -> Option<&Path> {
        match &self.report {
            Some(Ok(path)) => Some(path.as_path()),
            _ => None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.stored.is_ok() && !matches!(self.report, Some(Err(_)))
    }

    /// Build the confirmation; a file name is mentioned only if a report was written.
    pub fn confirmation(&self) -> Confirmation {
        let report = self.report.as_ref().map(|r| match r {
            Ok(path) => Ok(path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string())),
            Err(e) => Err(e),
        });

        let message = match (report, &self.stored) {
            (Some(Ok(file)), Ok(())) => format!("Отчет сохранен в файл {} и в MongoDB", file),
            (Some(Ok(file)), Err(e)) => format!(
                "Отчет сохранен в файл {}, но запись в MongoDB не выполнена: {}",
                file, e
            ),
            (Some(Err(re)), Ok(())) => {
                format!("Отчет не сохранен: {}. Результат сохранен в MongoDB", re)
            }
            (Some(Err(re)), Err(e)) => format!(
                "Отчет не сохранен: {}. Запись в MongoDB не выполнена: {}",
                re, e
            ),
            (None, Ok(())) => "Результат сохранен в MongoDB".to_string(),
            (None, Err(e)) => format!("Запись в MongoDB не выполнена: {}", e),
        };

        let is_error = !self.is_success();
        Confirmation {
            title: if is_error { FAILED_TITLE } else { SAVED_TITLE },
            message,
            is_error,
        }
    }

    pub fn summary(&self) -> OutcomeSummary {
        OutcomeSummary {
            name: self.record.name.clone(),
            calories: self.record.calories,
            cost: self.record.cost,
            report: self.report_path().map(|p| p.display().to_string()),
            report_error: match &self.report {
                Some(Err(e)) => Some(e.to_string()),
                _ => None,
            },
            stored: self.stored.is_ok(),
            store_error: self.stored.as_ref().err().map(|e| e.to_string()),
        }
    }
}

/// Run one calculation without progress reporting.
pub async fn run_calculation(
    input: FormInput,
    output_dir: &Path,
    sink: &dyn RecordSink,
) -> Result<CalculationOutcome> {
    run_calculation_with_progress(input, output_dir, sink, &|_: ControllerPhase| {}).await
}

/// Parse, calculate, write the report, store the record.
///
/// Selections are resolved before any side effect, so an unknown recipe or
/// format never leaves a file or a record behind.
pub async fn run_calculation_with_progress<F>(
    input: FormInput,
    output_dir: &Path,
    sink: &dyn RecordSink,
    on_phase: &F,
) -> Result<CalculationOutcome>
where
    F: Fn(ControllerPhase) + Send + Sync,
{
    let kind = RecipeKind::from_selection(&input.recipe)?;
    let format = ReportFormat::from_selection(&input.report_format)?;
    let quantities = Quantities::parse(&input.meat, &input.cheese, &input.vegetables, &input.sauce)?;

    let recipe = Recipe::new(kind, quantities);
    debug!(%recipe, "calculating");

    let record = ReportRecord::new(kind.label(), recipe.calculate());
    info!(
        name = %record.name,
        calories = record.calories,
        cost = record.cost,
        "calculated"
    );

    on_phase(ControllerPhase::Reporting);

    let report = match format {
        Some(format) => Some(write_report_blocking(record.clone(), format, output_dir).await),
        None => None,
    };
    if let Some(Err(err)) = &report {
        warn!(error = %err, "report not written");
    }

    let stored = sink.insert(&record).await;

    Ok(CalculationOutcome {
        record,
        report,
        stored,
    })
}

async fn write_report_blocking(
    record: ReportRecord,
    format: ReportFormat,
    output_dir: &Path,
) -> Result<PathBuf> {
    let dir = output_dir.to_path_buf();
    tokio::task::spawn_blocking(move || report::write_report(&record, format, &dir))
        .await
        .map_err(|e| RecipeError::TaskFailed(e.to_string()))?
}
