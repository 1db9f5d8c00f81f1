pub mod docx;
pub mod xlsx;

use std::path::{Path, PathBuf};

use tracing::info;

use crate::calculator::constants::{DOCX_LABEL, XLSX_LABEL};
use crate::error::{RecipeError, Result};
use crate::models::ReportRecord;

pub use docx::write_docx;
pub use xlsx::write_xlsx;

/// Report file formats offered by the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Docx,
    Xlsx,
}

impl ReportFormat {
    pub const ALL: [ReportFormat; 2] = [ReportFormat::Docx, ReportFormat::Xlsx];

    pub fn label(&self) -> &'static str {
        match self {
            ReportFormat::Docx => DOCX_LABEL,
            ReportFormat::Xlsx => XLSX_LABEL,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Docx => "docx",
            ReportFormat::Xlsx => "xlsx",
        }
    }

    /// Resolve a form selection.
    ///
    /// An empty selection means "no report". Labels and bare extensions are
    /// accepted case-insensitively; anything else is an error.
    pub fn from_selection(input: &str) -> Result<Option<Self>> {
        let needle = input.trim().to_lowercase();
        if needle.is_empty() {
            return Ok(None);
        }

        Self::ALL
            .into_iter()
            .find(|f| {
                f.label().to_lowercase() == needle
                    || f.extension() == needle.trim_start_matches('.')
            })
            .map(Some)
            .ok_or_else(|| RecipeError::UnknownReportFormat(input.trim().to_string()))
    }
}

/// File name for a report: `{name}_report.{ext}`.
pub fn report_filename(recipe_name: &str, format: ReportFormat) -> String {
    format!("{}_report.{}", recipe_name, format.extension())
}

/// Write the record in the chosen format into `dir`, overwriting any existing file.
///
/// Returns the path of the written report.
pub fn write_report(record: &ReportRecord, format: ReportFormat, dir: &Path) -> Result<PathBuf> {
    let path = dir.join(report_filename(&record.name, format));

    match format {
        ReportFormat::Docx => write_docx(record, &path)?,
        ReportFormat::Xlsx => write_xlsx(record, &path)?,
    }

    info!(path = %path.display(), format = format.extension(), "report written");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_selection() {
        assert_eq!(
            ReportFormat::from_selection("Word (.docx)").unwrap(),
            Some(ReportFormat::Docx)
        );
        assert_eq!(
            ReportFormat::from_selection("excel (.XLSX)").unwrap(),
            Some(ReportFormat::Xlsx)
        );
        assert_eq!(ReportFormat::from_selection(".docx").unwrap(), Some(ReportFormat::Docx));
        assert_eq!(ReportFormat::from_selection("  ").unwrap(), None);
    }

    #[test]
    fn test_from_selection_unknown() {
        let err = ReportFormat::from_selection("PDF").unwrap_err();
        assert!(matches!(err, RecipeError::UnknownReportFormat(ref s) if s == "PDF"));
    }

    #[test]
    fn test_report_filename() {
        assert_eq!(report_filename("Вок", ReportFormat::Xlsx), "Вок_report.xlsx");
        assert_eq!(report_filename("Бургер", ReportFormat::Docx), "Бургер_report.docx");
    }
}
