use std::fs::File;
use std::path::Path;

use docx_rs::{Docx, Paragraph, Run};

use crate::calculator::{calories_line, cost_line};
use crate::error::{RecipeError, Result};
use crate::models::ReportRecord;

const TITLE_PREFIX: &str = "Отчет по рецепту: ";
const TITLE_SIZE: usize = 52;

fn paragraph(text: String) -> Paragraph {
    Paragraph::new().add_run(Run::new().add_text(text))
}

/// Write a title line and two body lines (calories, cost) as a Word document.
pub fn write_docx(record: &ReportRecord, path: &Path) -> Result<()> {
    let title = Paragraph::new().style("Title").add_run(
        Run::new()
            .add_text(format!("{}{}", TITLE_PREFIX, record.name))
            .size(TITLE_SIZE)
            .bold(),
    );

    let calories = paragraph(calories_line(record.calories));
    let cost = paragraph(cost_line(record.cost));

    let file = File::create(path)?;
    Docx::new()
        .add_paragraph(title)
        .add_paragraph(calories)
        .add_paragraph(cost)
        .build()
        .pack(file)
        .map_err(|e| RecipeError::Docx(e.to_string()))?;

    Ok(())
}
