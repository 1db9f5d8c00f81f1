use strsim::jaro_winkler;

use crate::calculator::constants::{
    CALORIES_LABEL_PREFIX, CALORIES_UNIT, COST_LABEL_PREFIX, COST_UNIT, Coefficients,
    SUGGESTION_THRESHOLD, Weights,
};
use crate::error::{RecipeError, Result};
use crate::models::{Nutrition, Quantities};

/// Dot product of the quantities with one weight row.
#[inline]
pub fn weighted_sum(quantities: &Quantities, weights: &Weights) -> f64 {
    quantities.meat * weights.meat
        + quantities.cheese * weights.cheese
        + quantities.vegetables * weights.vegetables
        + quantities.sauce * weights.sauce
}

/// Apply a coefficient table to the four quantities.
pub fn calculate(quantities: &Quantities, coefficients: &Coefficients) -> Nutrition {
    Nutrition {
        calories: weighted_sum(quantities, &coefficients.calories),
        cost: weighted_sum(quantities, &coefficients.cost),
    }
}

/// Parse one quantity field from raw form text.
///
/// Surrounding whitespace is ignored. Only finite reals are accepted; sign is not checked.
pub fn parse_quantity(field: &str, text: &str) -> Result<f64> {
    let trimmed = text.trim();
    let value: f64 = trimmed.parse().map_err(|_| {
        RecipeError::InvalidInput(format!("{}: '{}' is not a number", field, trimmed))
    })?;

    if !value.is_finite() {
        return Err(RecipeError::InvalidInput(format!(
            "{}: '{}' is not a finite number",
            field, trimmed
        )));
    }

    Ok(value)
}

/// Format a value for labels and reports.
///
/// Integral values keep one decimal place (`33.0`); everything else uses the
/// shortest representation that parses back to the same value.
pub fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e16 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}

/// `Энергетическая ценность: {calories} ккал`
pub fn calories_line(calories: f64) -> String {
    format!("{}{} {}", CALORIES_LABEL_PREFIX, format_number(calories), CALORIES_UNIT)
}

/// `Стоимость: {cost} руб.`
pub fn cost_line(cost: f64) -> String {
    format!("{}{} {}", COST_LABEL_PREFIX, format_number(cost), COST_UNIT)
}

/// Closest known label to `input`, if any scores above the suggestion threshold.
pub fn closest_label<'a>(input: &str, labels: &[&'a str]) -> Option<&'a str> {
    let needle = input.trim().to_lowercase();
    labels
        .iter()
        .map(|label| (*label, jaro_winkler(&label.to_lowercase(), &needle)))
        .filter(|(_, score)| *score > SUGGESTION_THRESHOLD)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(label, _)| label)
}
