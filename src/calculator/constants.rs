/// Per-ingredient multipliers for one output quantity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weights {
    pub meat: f64,
    pub cheese: f64,
    pub vegetables: f64,
    pub sauce: f64,
}

/// Calorie and cost weights for one recipe kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coefficients {
    pub calories: Weights,
    pub cost: Weights,
}

// ─────────────────────────────────────────────────────────────────────────────
// Recipe coefficient tables
// ─────────────────────────────────────────────────────────────────────────────

pub const BURGER: Coefficients = Coefficients {
    calories: Weights {
        meat: 2.0,
        cheese: 1.5,
        vegetables: 0.5,
        sauce: 0.2,
    },
    cost: Weights {
        meat: 10.0,
        cheese: 5.0,
        vegetables: 2.0,
        sauce: 1.0,
    },
};

pub const PIZZA: Coefficients = Coefficients {
    calories: Weights {
        meat: 1.5,
        cheese: 2.0,
        vegetables: 1.0,
        sauce: 0.5,
    },
    cost: Weights {
        meat: 8.0,
        cheese: 6.0,
        vegetables: 3.0,
        sauce: 2.0,
    },
};

pub const WOK: Coefficients = Coefficients {
    calories: Weights {
        meat: 1.8,
        cheese: 1.2,
        vegetables: 1.5,
        sauce: 0.8,
    },
    cost: Weights {
        meat: 9.0,
        cheese: 4.0,
        vegetables: 2.5,
        sauce: 1.5,
    },
};

// ─────────────────────────────────────────────────────────────────────────────
// Display labels
// ─────────────────────────────────────────────────────────────────────────────

pub const BURGER_LABEL: &str = "Бургер";
pub const PIZZA_LABEL: &str = "Пицца";
pub const WOK_LABEL: &str = "Вок";

pub const DOCX_LABEL: &str = "Word (.docx)";
pub const XLSX_LABEL: &str = "Excel (.xlsx)";

pub const CALORIES_LABEL_PREFIX: &str = "Энергетическая ценность: ";
pub const COST_LABEL_PREFIX: &str = "Стоимость: ";
pub const CALORIES_UNIT: &str = "ккал";
pub const COST_UNIT: &str = "руб.";

/// Minimum Jaro-Winkler score for a "did you mean" suggestion.
pub const SUGGESTION_THRESHOLD: f64 = 0.7;

// ─────────────────────────────────────────────────────────────────────────────
// Record store defaults
// ─────────────────────────────────────────────────────────────────────────────

pub const DEFAULT_STORE_URI: &str = "mongodb://localhost:27017/";
pub const DEFAULT_DATABASE: &str = "recipes_db";
pub const DEFAULT_COLLECTION: &str = "recipes";

/// Server selection timeout before the store counts as unavailable.
pub const DEFAULT_STORE_TIMEOUT_MS: u64 = 5000;
