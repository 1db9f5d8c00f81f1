use dialoguer::{Confirm, Input, Select};

use crate::controller::FormInput;
use crate::error::Result;
use crate::models::RecipeKind;
use crate::report::ReportFormat;

const NO_REPORT_OPTION: &str = "Без отчета";

/// Prompt for the recipe kind.
pub fn prompt_recipe() -> Result<String> {
    let labels = RecipeKind::labels();
    let selection = Select::new()
        .with_prompt("Рецепт")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(labels[selection].to_string())
}

/// Prompt for one ingredient quantity.
///
/// The raw text is returned unparsed; the calculation rejects non-numbers.
pub fn prompt_quantity(label: &str) -> Result<String> {
    let input: String = Input::new()
        .with_prompt(label)
        .default("0".to_string())
        .interact_text()?;

    Ok(input)
}

/// Prompt for the report format. The last option skips the report file.
pub fn prompt_report_format() -> Result<String> {
    let mut options: Vec<&str> = ReportFormat::ALL.iter().map(|f| f.label()).collect();
    options.push(NO_REPORT_OPTION);

    let selection = Select::new()
        .with_prompt("Формат отчета")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(if selection < ReportFormat::ALL.len() {
        options[selection].to_string()
    } else {
        String::new()
    })
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Collect the whole form.
pub fn collect_form_input() -> Result<FormInput> {
    let recipe = prompt_recipe()?;
    let meat = prompt_quantity("Мясо")?;
    let cheese = prompt_quantity("Сыр")?;
    let vegetables = prompt_quantity("Овощи")?;
    let sauce = prompt_quantity("Соус")?;
    let report_format = prompt_report_format()?;

    Ok(FormInput {
        recipe,
        meat,
        cheese,
        vegetables,
        sauce,
        report_format,
    })
}
