use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use tempfile::TempDir;
use tokio::sync::{Notify, mpsc};

use recipe_calc_rs::config::StoreSettings;
use recipe_calc_rs::controller::{
    ControllerEvent, ControllerPhase, DisplayState, FormInput, TaskController, run_calculation,
};
use recipe_calc_rs::error::{RecipeError, Result};
use recipe_calc_rs::models::ReportRecord;
use recipe_calc_rs::store::{MongoSink, RecordSink};

/// Sink that keeps records in memory.
#[derive(Default)]
struct MemorySink {
    records: Mutex<Vec<ReportRecord>>,
}

impl MemorySink {
    fn records(&self) -> Vec<ReportRecord> {
        self.records.lock().unwrap().clone()
    }
}

#[async_trait]
impl RecordSink for MemorySink {
    async fn insert(&self, record: &ReportRecord) -> Result<()> {
        self.records.lock().unwrap().push(record.clone());
        Ok(())
    }
}

/// Sink that blocks each insert until the gate is opened.
struct GatedSink {
    gate: Arc<Notify>,
    inner: MemorySink,
}

#[async_trait]
impl RecordSink for GatedSink {
    async fn insert(&self, record: &ReportRecord) -> Result<()> {
        self.gate.notified().await;
        self.inner.insert(record).await
    }
}

fn form(recipe: &str, meat: &str, format: &str) -> FormInput {
    FormInput {
        recipe: recipe.to_string(),
        meat: meat.to_string(),
        cheese: "1".to_string(),
        vegetables: "4".to_string(),
        sauce: "0".to_string(),
        report_format: format.to_string(),
    }
}

fn unreachable_store() -> MongoSink {
    MongoSink::new(StoreSettings {
        uri: "mongodb://127.0.0.1:1/".to_string(),
        timeout: Duration::from_millis(300),
        ..StoreSettings::default()
    })
}

async fn next_finished(
    events: &mut mpsc::UnboundedReceiver<ControllerEvent>,
    display: &mut DisplayState,
) {
    while let Some(event) = events.recv().await {
        display.handle(&event);
        if matches!(event, ControllerEvent::Finished(_)) {
            return;
        }
    }
    panic!("event channel closed before the calculation finished");
}

#[tokio::test]
async fn test_pipeline_writes_report_and_record() {
    let dir = TempDir::new().unwrap();
    let sink = MemorySink::default();

    let outcome = run_calculation(form("Бургер", "2", "Word (.docx)"), dir.path(), &sink)
        .await
        .unwrap();

    assert_eq!(outcome.record.name, "Бургер");
    assert_eq!(outcome.record.calories, 7.5);
    assert_eq!(outcome.record.cost, 33.0);
    assert_eq!(
        outcome.report_path(),
        Some(dir.path().join("Бургер_report.docx").as_path())
    );
    assert!(outcome.is_success());
    assert_eq!(sink.records(), vec![outcome.record.clone()]);

    let confirmation = outcome.confirmation();
    assert!(!confirmation.is_error);
    assert_eq!(
        confirmation.message,
        "Отчет сохранен в файл Бургер_report.docx и в MongoDB"
    );
}

#[tokio::test]
async fn test_pipeline_without_report_only_stores() {
    let dir = TempDir::new().unwrap();
    let sink = MemorySink::default();

    let outcome = run_calculation(form("Вок", "1", ""), dir.path(), &sink)
        .await
        .unwrap();

    assert!(outcome.report.is_none());
    assert_eq!(sink.records().len(), 1);
    assert_eq!(outcome.confirmation().message, "Результат сохранен в MongoDB");
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn test_unknown_recipe_has_no_side_effects() {
    let dir = TempDir::new().unwrap();
    let sink = MemorySink::default();

    let err = run_calculation(form("Salad", "2", "Excel (.xlsx)"), dir.path(), &sink)
        .await
        .unwrap_err();

    assert!(matches!(err, RecipeError::UnknownRecipe { ref input, .. } if input == "Salad"));
    assert!(sink.records().is_empty());
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn test_unknown_report_format_has_no_side_effects() {
    let dir = TempDir::new().unwrap();
    let sink = MemorySink::default();

    let err = run_calculation(form("Пицца", "2", "PDF"), dir.path(), &sink)
        .await
        .unwrap_err();

    assert!(matches!(err, RecipeError::UnknownReportFormat(_)));
    assert!(sink.records().is_empty());
}

#[tokio::test]
async fn test_unparseable_quantity_is_invalid_input() {
    let dir = TempDir::new().unwrap();
    let sink = MemorySink::default();

    let err = run_calculation(form("Пицца", "два", "Word (.docx)"), dir.path(), &sink)
        .await
        .unwrap_err();

    assert!(matches!(err, RecipeError::InvalidInput(ref msg) if msg.contains("meat")));
    assert!(sink.records().is_empty());
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn test_unreachable_store_is_reported_and_report_still_written() {
    let dir = TempDir::new().unwrap();
    let sink = unreachable_store();

    let outcome = run_calculation(form("Бургер", "2", "Excel (.xlsx)"), dir.path(), &sink)
        .await
        .unwrap();

    assert!(matches!(outcome.stored, Err(RecipeError::StoreUnavailable(_))));
    assert!(dir.path().join("Бургер_report.xlsx").exists());
    assert!(!outcome.is_success());

    let confirmation = outcome.confirmation();
    assert!(confirmation.is_error);
    assert!(confirmation.message.contains("Бургер_report.xlsx"));
    assert!(confirmation.message.contains("не выполнена"));

    let summary = outcome.summary();
    assert!(!summary.stored);
    assert!(summary.store_error.is_some());
}

#[tokio::test]
async fn test_mongo_sink_unreachable_store() {
    let sink = unreachable_store();
    let record = ReportRecord {
        name: "Бургер".to_string(),
        calories: 7.5,
        cost: 33.0,
    };

    let err = sink.insert(&record).await.unwrap_err();
    assert!(matches!(err, RecipeError::StoreUnavailable(_)), "got {err}");
}

#[tokio::test]
async fn test_controller_rejects_second_submission_while_busy() {
    let dir = TempDir::new().unwrap();
    let gate = Arc::new(Notify::new());
    let sink = Arc::new(GatedSink {
        gate: Arc::clone(&gate),
        inner: MemorySink::default(),
    });

    let (controller, mut events) = TaskController::new(dir.path().to_path_buf(), sink.clone());
    let mut display = DisplayState::new();

    controller.submit(form("Бургер", "2", "")).unwrap();
    assert!(controller.is_busy());

    let second = controller.submit(form("Пицца", "100", ""));
    assert!(matches!(second, Err(RecipeError::Busy)));

    gate.notify_one();
    next_finished(&mut events, &mut display).await;

    assert!(!controller.is_busy());
    assert_eq!(display.phase, ControllerPhase::Idle);
    assert_eq!(display.calories_label, "Энергетическая ценность: 7.5 ккал");
    assert_eq!(display.cost_label, "Стоимость: 33.0 руб.");
    assert_eq!(sink.inner.records().len(), 1);
}

#[tokio::test]
async fn test_controller_accepts_new_submission_after_finish() {
    let dir = TempDir::new().unwrap();
    let sink = Arc::new(MemorySink::default());
    let (controller, mut events) = TaskController::new(dir.path().to_path_buf(), sink.clone());
    let mut display = DisplayState::new();

    controller.submit(form("Бургер", "2", "")).unwrap();
    next_finished(&mut events, &mut display).await;

    controller.submit(form("Пицца", "2", "")).unwrap();
    next_finished(&mut events, &mut display).await;

    // Pizza (2, 1, 4, 0): calories 3 + 2 + 4 = 9, cost 16 + 6 + 12 = 34
    assert_eq!(display.calories_label, "Энергетическая ценность: 9.0 ккал");
    assert_eq!(display.cost_label, "Стоимость: 34.0 руб.");
    let names: Vec<String> = sink.records().into_iter().map(|r| r.name).collect();
    assert_eq!(names, vec!["Бургер", "Пицца"]);
}

#[tokio::test]
async fn test_controller_delivers_errors_as_events() {
    let dir = TempDir::new().unwrap();
    let sink = Arc::new(MemorySink::default());
    let (controller, mut events) = TaskController::new(dir.path().to_path_buf(), sink);
    let mut display = DisplayState::new();

    controller.submit(form("Salad", "2", "")).unwrap();
    next_finished(&mut events, &mut display).await;

    assert_eq!(display.calories_label, "Энергетическая ценность: ");
    assert!(display.confirmation.is_none());
    assert!(display.last_error.as_deref().unwrap().contains("Salad"));
    assert!(!controller.is_busy());
}
