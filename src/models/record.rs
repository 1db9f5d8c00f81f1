use serde::{Deserialize, Serialize};

/// Result of applying a recipe's coefficient table.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Nutrition {
    pub calories: f64,
    pub cost: f64,
}

/// The (name, calories, cost) triple written to reports and the record store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRecord {
    pub name: String,
    pub calories: f64,
    pub cost: f64,
}

impl ReportRecord {
    pub fn new(name: impl Into<String>, nutrition: Nutrition) -> Self {
        Self {
            name: name.into(),
            calories: nutrition.calories,
            cost: nutrition.cost,
        }
    }
}
