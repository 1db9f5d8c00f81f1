use crate::controller::{Confirmation, DisplayState};

/// Print the two output labels.
pub fn display_labels(display: &DisplayState) {
    println!();
    println!("{}", display.calories_label);
    println!("{}", display.cost_label);
}

/// Print the confirmation box.
pub fn display_confirmation(confirmation: &Confirmation) {
    let marker = if confirmation.is_error { "!" } else { "*" };
    println!();
    println!("{} {} {}", marker, confirmation.title, marker);
    println!("  {}", confirmation.message);
    println!();
}

/// Print the full form result: labels, then the confirmation or the error.
pub fn display_result(display: &DisplayState) {
    display_labels(display);

    if let Some(confirmation) = &display.confirmation {
        display_confirmation(confirmation);
    } else if let Some(error) = &display.last_error {
        println!();
        println!("Ошибка: {}", error);
        println!();
    }
}
