use std::fs::File;
use std::io::Read;
use std::path::Path;

use tempfile::TempDir;

use recipe_calc_rs::models::{Nutrition, ReportRecord};
use recipe_calc_rs::report::{ReportFormat, write_report};

fn burger_record() -> ReportRecord {
    ReportRecord::new(
        "Бургер",
        Nutrition {
            calories: 7.5,
            cost: 33.0,
        },
    )
}

/// Read one member of an Office Open XML package.
fn read_part(path: &Path, part: &str) -> String {
    let file = File::open(path).unwrap();
    let mut archive = zip::ZipArchive::new(file).unwrap();
    let mut entry = archive.by_name(part).unwrap();
    let mut content = String::new();
    entry.read_to_string(&mut content).unwrap();
    content
}

#[test]
fn test_docx_report_contains_name_and_numbers() {
    let dir = TempDir::new().unwrap();
    let path = write_report(&burger_record(), ReportFormat::Docx, dir.path()).unwrap();

    assert_eq!(path, dir.path().join("Бургер_report.docx"));

    let body = read_part(&path, "word/document.xml");
    assert!(body.contains("Отчет по рецепту: Бургер"));
    assert!(body.contains("Энергетическая ценность: 7.5 ккал"));
    assert!(body.contains("Стоимость: 33.0 руб."));
}

#[test]
fn test_xlsx_report_contains_header_name_and_numbers() {
    let dir = TempDir::new().unwrap();
    let path = write_report(&burger_record(), ReportFormat::Xlsx, dir.path()).unwrap();

    assert_eq!(path, dir.path().join("Бургер_report.xlsx"));

    let strings = read_part(&path, "xl/sharedStrings.xml");
    for text in ["Рецепт", "Калории (ккал)", "Стоимость (руб.)", "Бургер"] {
        assert!(strings.contains(text), "missing shared string {text}");
    }

    let sheet = read_part(&path, "xl/worksheets/sheet1.xml");
    assert!(sheet.contains("7.5"));
    assert!(sheet.contains("33"));

    let workbook = read_part(&path, "xl/workbook.xml");
    assert!(workbook.contains("Отчет"));
}

#[test]
fn test_report_overwrites_existing_file() {
    let dir = TempDir::new().unwrap();
    let existing = dir.path().join("Бургер_report.xlsx");
    std::fs::write(&existing, b"stale").unwrap();

    let path = write_report(&burger_record(), ReportFormat::Xlsx, dir.path()).unwrap();

    assert_eq!(path, existing);
    let bytes = std::fs::read(&path).unwrap();
    assert!(bytes.starts_with(b"PK"));
}

#[test]
fn test_report_into_missing_directory_fails() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("does-not-exist");

    assert!(write_report(&burger_record(), ReportFormat::Docx, &missing).is_err());
    assert!(write_report(&burger_record(), ReportFormat::Xlsx, &missing).is_err());
}
