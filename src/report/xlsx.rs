use std::path::Path;

use rust_xlsxwriter::{Format, Workbook};

use crate::error::Result;
use crate::models::ReportRecord;

const SHEET_NAME: &str = "Отчет";
const HEADER: [&str; 3] = ["Рецепт", "Калории (ккал)", "Стоимость (руб.)"];

/// Write a single-sheet workbook: one header row and one data row.
pub fn write_xlsx(record: &ReportRecord, path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    let bold = Format::new().set_bold();

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    for (col, title) in HEADER.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *title, &bold)?;
    }

    worksheet.write_string(1, 0, record.name.as_str())?;
    worksheet.write_number(1, 1, record.calories)?;
    worksheet.write_number(1, 2, record.cost)?;

    workbook.save(path)?;
    Ok(())
}
