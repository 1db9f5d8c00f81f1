pub mod calculations;
pub mod constants;

pub use calculations::{
    calculate, calories_line, closest_label, cost_line, format_number, parse_quantity,
    weighted_sum,
};
pub use constants::*;
