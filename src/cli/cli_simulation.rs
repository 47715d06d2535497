use super::cli_main::{get_user_input, prompt};
use crate::Simulation::simulation_task::{
    DEFAULT_SOLVENT, ReactionTask, STANDARD_PRESSURE_ATM, STANDARD_TEMPERATURE_K,
};
use crate::Structure::elements::molar_mass_of_tokens;
use crate::Structure::formula::format_formula;
use crate::Structure::smiles_tokens::tokenize;
use crate::Utils::sanitize::sanitize_with_limit;
use crate::settings::{SettingsManager, SimulationSettings};

pub fn structure_menu(settings: &SimulationSettings) {
    loop {
        println!("\n=== Structure ===");
        prompt("SMILES (empty line to go back): ");
        let Some(line) = get_user_input() else {
            break;
        };
        if line.trim().is_empty() {
            break;
        }
        let clean = sanitize_with_limit(&line, settings.max_structure_len);
        let tokens = tokenize(&clean);
        let formula = format_formula(&tokens);
        let (mass, unknown) = molar_mass_of_tokens(&tokens);
        println!("sanitized: {}", clean);
        println!("tokens:    {:?}", tokens);
        println!(
            "formula:   {}",
            if formula.is_empty() {
                settings.placeholder.as_str()
            } else {
                formula.as_str()
            }
        );
        println!("mass:      {:.3} g/mol (heavy atoms only)", mass);
        if !unknown.is_empty() {
            println!("no data for: {}", unknown.join(", "));
        }
    }
}

pub fn simulation_menu(manager: &SettingsManager) {
    loop {
        println!("\n=== Reaction Simulation ===");
        println!("1. Run simulation");
        println!("2. List solvents");
        println!("0. Back to main menu");
        prompt("Choose option: ");
        let Some(choice) = get_user_input() else {
            break;
        };
        match choice.trim() {
            "1" => match read_task() {
                Ok(task) => {
                    let report = task.run_with(manager.settings());
                    report.pretty_print();
                }
                Err(e) => println!("Error: {}", e),
            },
            "2" => {
                let table = manager.solvent_table();
                for key in table.keys() {
                    println!("{:>16}  x{:.2}", key, table.factor(&key));
                }
            }
            "0" => break,
            _ => println!("Invalid option"),
        }
    }
}

fn read_task() -> Result<ReactionTask, String> {
    let reactants = read_list("Reactants, comma separated SMILES: ")?;
    let solutes = read_list("Solutes, comma separated SMILES (may be empty): ")?;
    let solvent = read_line(&format!("Solvent [{}]: ", DEFAULT_SOLVENT))?;
    let solvent = if solvent.is_empty() {
        DEFAULT_SOLVENT.to_string()
    } else {
        solvent
    };
    let temperature = read_number("Temperature, K", STANDARD_TEMPERATURE_K)?;
    let pressure = read_number("Pressure, atm", STANDARD_PRESSURE_ATM)?;
    Ok(ReactionTask::new()
        .with_reactants(&reactants)
        .with_solutes(&solutes)
        .with_solvent(&solvent)
        .with_conditions(temperature, pressure))
}

fn read_line(text: &str) -> Result<String, String> {
    prompt(text);
    get_user_input()
        .map(|s| s.trim().to_string())
        .ok_or_else(|| "input closed".to_string())
}

fn read_list(text: &str) -> Result<Vec<String>, String> {
    Ok(parse_list(&read_line(text)?))
}

fn read_number(name: &str, default: f64) -> Result<f64, String> {
    parse_number(&read_line(&format!("{} [{}]: ", name, default))?, default)
        .map_err(|e| format!("{}: {}", name, e))
}

pub(crate) fn parse_list(line: &str) -> Vec<String> {
    line.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

pub(crate) fn parse_number(text: &str, default: f64) -> Result<f64, String> {
    if text.trim().is_empty() {
        return Ok(default);
    }
    let value: f64 = text
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a number", text.trim()))?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err("value must be finite".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_list() {
        assert_eq!(parse_list("CCO, O ,,Cl"), vec!["CCO", "O", "Cl"]);
        assert!(parse_list("  ").is_empty());
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("", 298.15), Ok(298.15));
        assert_eq!(parse_number(" 350 ", 298.15), Ok(350.0));
        assert!(parse_number("hot", 1.0).is_err());
        assert!(parse_number("inf", 1.0).is_err());
    }
}
