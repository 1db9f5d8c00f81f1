pub mod prompts;
pub mod render;

pub use prompts::{
    collect_form_input, prompt_quantity, prompt_recipe, prompt_report_format, prompt_yes_no,
};
pub use render::{display_confirmation, display_labels, display_result};
