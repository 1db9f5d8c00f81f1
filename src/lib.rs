pub mod calculator;
pub mod cli;
pub mod config;
pub mod controller;
pub mod error;
pub mod interface;
pub mod logging;
pub mod models;
pub mod report;
pub mod store;

pub use error::{RecipeError, Result};
pub use models::{Quantities, Recipe, RecipeKind, ReportRecord};
