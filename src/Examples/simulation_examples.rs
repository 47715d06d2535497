use crate::Simulation::reaction_time::{estimate_reaction_time, format_duration, solvent_table};
use crate::Simulation::scores::score_from_seed;
use crate::Simulation::seeded_rng::SeededRng;
use crate::Simulation::simulation_task::ReactionTask;
use crate::Structure::formula::{EMPTY_FORMULA_PLACEHOLDER, display_formula, format_formula};
use crate::Structure::smiles_tokens::tokenize;
use crate::Utils::compound_props::CompoundProperties;

pub fn simulation_examples(task: usize) {
    match task {
        0 => {
            // TOKENS AND FORMULAS
            for smiles in ["CCO", "ClCCl", "BrCCBr", "[Na+].[Cl-]", "c1ccccc1", "123()="] {
                let tokens = tokenize(smiles);
                println!(
                    "{:>14} -> tokens {:?}, formula {}",
                    smiles,
                    tokens,
                    display_formula(smiles, EMPTY_FORMULA_PLACEHOLDER)
                );
            }
            let ethanol = ["C", "C", "O", "H", "H", "H", "H", "H", "H"];
            assert_eq!(format_formula(&ethanol), "C2H6O");
        }
        1 => {
            // SEEDED STREAM AND SCORES
            let mut rng = SeededRng::new("CCO|water");
            let draws: Vec<f64> = (0..5).map(|_| rng.next()).collect();
            println!("first draws for 'CCO|water': {:?}", draws);
            for salt in ["toxicity", "flammability", "environment", "reactivity"] {
                println!("{:>12}: {}%", salt, score_from_seed("CCO|water", salt));
            }
        }
        2 => {
            // REACTION TIME
            for solvent in solvent_table().keys() {
                let minutes = estimate_reaction_time(2, 1, &solvent, 298.0, 1.0);
                println!("{:>16}: {}", solvent, format_duration(minutes));
            }
            for t in [273.0, 298.0, 373.0, 473.0, 573.0, 673.0] {
                let minutes = estimate_reaction_time(1, 0, "water", t, 1.0);
                println!("T = {} K: {}", t, format_duration(minutes));
            }
        }
        3 => {
            // FULL MOCKED SIMULATION
            let report = ReactionTask::new()
                .with_reactants(&["CC(=O)O", "OCC"])
                .with_solutes(&["[Na+].[Cl-]"])
                .with_solvent("toluene")
                .with_conditions(350.0, 1.0)
                .run();
            report.pretty_print();
        }
        4 => {
            // COMPOUND PROPERTIES WITH FALLBACKS
            let json = r#"{"PropertyTable": {"Properties": [
                {"CID": 702, "MolecularFormula": "C2H6O", "MolecularWeight": "46.07", "IUPACName": "ethanol"},
                {"CID": 0, "CanonicalSMILES": "ClCCl"}
            ]}}"#;
            match CompoundProperties::from_property_table_json(json) {
                Ok(records) => {
                    for r in records {
                        println!(
                            "{}: formula {}, weight {:.2} g/mol",
                            r.name_or_default(),
                            r.formula_or(""),
                            r.weight_or(r.canonical_smiles.as_deref().unwrap_or(""))
                        );
                    }
                }
                Err(e) => println!("could not parse compound properties: {}", e),
            }
        }
        _ => println!("no such example: {}", task),
    }
}
