use super::cli_examples::examples_menu;
use super::cli_simulation::{simulation_menu, structure_menu};
use crate::settings::SettingsManager;
use std::io::{self, Write};

pub fn run_interactive_menu(manager: &SettingsManager) {
    loop {
        show_main_menu();
        let Some(choice) = get_user_input() else {
            break;
        };

        match choice.trim() {
            "1" => structure_menu(manager.settings()),
            "2" => simulation_menu(manager),
            "3" => examples_menu(),
            "0" => {
                println!("Goodbye!");
                break;
            }
            _ => println!("Invalid choice. Please try again."),
        }
    }
}
/* colors
Blue (\x1b[34m) - Welcome header text

Yellow (\x1b[33m) - Menu options

Cyan (\x1b[36m) - "Enter your choice:" prompt

Reset (\x1b[0m) - Returns to normal color after each colored section
*/
fn show_main_menu() {
    println!(
        "\x1b[34m\n Welcome to ReactViz: structures, formulas and an illustrative\n
    reaction simulator (values are placeholders, not predictions) \n \x1b[0m"
    );
    println!("\x1b[33m1. Structure tokens and formula\x1b[0m");
    println!("\x1b[33m2. Simulate a reaction\x1b[0m");
    println!("\x1b[33m3. Examples\x1b[0m");
    println!("\x1b[33m0. Exit\x1b[0m");
    prompt("\x1b[36mEnter your choice: \x1b[0m");
}

pub(crate) fn prompt(text: &str) {
    print!("{}", text);
    // a failed flush only delays the prompt
    let _ = io::stdout().flush();
}

/// One line from stdin, `None` at end of input or on a read error.
pub(crate) fn get_user_input() -> Option<String> {
    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) => None,
        Ok(_) => Some(input),
        Err(e) => {
            log::error!("failed to read input: {}", e);
            None
        }
    }
}
