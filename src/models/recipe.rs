use std::fmt;

use crate::calculator::{self, Coefficients};
use crate::calculator::constants::{BURGER, BURGER_LABEL, PIZZA, PIZZA_LABEL, WOK, WOK_LABEL};
use crate::error::{RecipeError, Result};
use crate::models::Nutrition;

/// The closed set of recipe kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecipeKind {
    Burger,
    Pizza,
    Wok,
}

impl RecipeKind {
    pub const ALL: [RecipeKind; 3] = [RecipeKind::Burger, RecipeKind::Pizza, RecipeKind::Wok];

    /// Label shown in the form and written to reports.
    pub fn label(&self) -> &'static str {
        match self {
            RecipeKind::Burger => BURGER_LABEL,
            RecipeKind::Pizza => PIZZA_LABEL,
            RecipeKind::Wok => WOK_LABEL,
        }
    }

    /// English name, used by `Display` for recipes.
    pub fn name(&self) -> &'static str {
        match self {
            RecipeKind::Burger => "Burger",
            RecipeKind::Pizza => "Pizza",
            RecipeKind::Wok => "Wok",
        }
    }

    pub fn coefficients(&self) -> &'static Coefficients {
        match self {
            RecipeKind::Burger => &BURGER,
            RecipeKind::Pizza => &PIZZA,
            RecipeKind::Wok => &WOK,
        }
    }

    pub fn labels() -> Vec<&'static str> {
        Self::ALL.iter().map(|k| k.label()).collect()
    }

    /// Resolve a form selection by label or English name (case-insensitive).
    pub fn from_selection(input: &str) -> Result<Self> {
        let needle = input.trim().to_lowercase();

        let found = Self::ALL.into_iter().find(|kind| {
            kind.label().to_lowercase() == needle || kind.name().to_lowercase() == needle
        });

        found.ok_or_else(|| RecipeError::UnknownRecipe {
            input: input.trim().to_string(),
            suggestion: calculator::closest_label(input, &Self::labels()).map(str::to_string),
        })
    }
}

/// Ingredient amounts for one calculation request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quantities {
    pub meat: f64,
    pub cheese: f64,
    pub vegetables: f64,
    pub sauce: f64,
}

impl Quantities {
    pub fn new(meat: f64, cheese: f64, vegetables: f64, sauce: f64) -> Self {
        Self {
            meat,
            cheese,
            vegetables,
            sauce,
        }
    }

    /// Parse all four fields from raw form text.
    pub fn parse(meat: &str, cheese: &str, vegetables: &str, sauce: &str) -> Result<Self> {
        Ok(Self {
            meat: calculator::parse_quantity("meat", meat)?,
            cheese: calculator::parse_quantity("cheese", cheese)?,
            vegetables: calculator::parse_quantity("vegetables", vegetables)?,
            sauce: calculator::parse_quantity("sauce", sauce)?,
        })
    }
}

/// A recipe kind paired with its ingredient amounts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Recipe {
    pub kind: RecipeKind,
    pub quantities: Quantities,
}

impl Recipe {
    pub fn new(kind: RecipeKind, quantities: Quantities) -> Self {
        Self { kind, quantities }
    }

    pub fn calculate(&self) -> Nutrition {
        calculator::calculate(&self.quantities, self.kind.coefficients())
    }
}

impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}(meat={}, cheese={}, vegetables={}, sauce={})",
            self.kind.name(),
            self.quantities.meat,
            self.quantities.cheese,
            self.quantities.vegetables,
            self.quantities.sauce
        )
    }
}
