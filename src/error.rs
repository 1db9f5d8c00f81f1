use thiserror::Error;

#[derive(Debug, Error)]
pub enum RecipeError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error(
        "Unknown recipe: '{}'{}",
        .input,
        .suggestion.as_ref().map(|s| format!(" (did you mean '{}'?)", s)).unwrap_or_default()
    )]
    UnknownRecipe {
        input: String,
        suggestion: Option<String>,
    },

    #[error("Unknown report format: '{0}'")]
    UnknownReportFormat(String),

    #[error("Record store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Record store error: {0}")]
    Store(#[from] mongodb::error::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("Spreadsheet error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("Document error: {0}")]
    Docx(String),

    #[error("A calculation is already in progress")]
    Busy,

    #[error("Background task failed: {0}")]
    TaskFailed(String),
}

pub type Result<T> = std::result::Result<T, RecipeError>;
