pub mod recipe;
pub mod record;

pub use recipe::{Quantities, Recipe, RecipeKind};
pub use record::{Nutrition, ReportRecord};
