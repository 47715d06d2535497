use super::cli_main::{get_user_input, prompt};
use crate::Examples::simulation_examples::simulation_examples;

pub fn examples_menu() {
    loop {
        println!("\n=== Examples ===");
        println!("1. Tokens and formulas");
        println!("2. Seeded stream and scores");
        println!("3. Reaction time table");
        println!("4. Full mocked simulation");
        println!("5. Compound properties with fallbacks");
        println!("0. Back to main menu");
        prompt("Enter your choice: ");

        let Some(choice) = get_user_input() else {
            break;
        };
        match choice.trim() {
            "1" => simulation_examples(0),
            "2" => simulation_examples(1),
            "3" => simulation_examples(2),
            "4" => simulation_examples(3),
            "5" => simulation_examples(4),
            "0" => break,
            _ => println!("Invalid choice. Please try again."),
        }
    }
}
