use super::layout::{AtomLayout, layout_structures};
use super::reaction_time::{SolventTable, format_duration};
use super::scores::SafetyReport;
use crate::Structure::elements::molar_mass_of_tokens;
use crate::Structure::formula::{format_formula, formula_from_smiles};
use crate::Structure::smiles_tokens::tokenize;
use crate::Utils::sanitize::sanitize_with_limit;
use crate::error::ReactVizError;
use crate::settings::SimulationSettings;
use log::{debug, info};
use serde::{Deserialize, Serialize};

pub const DEFAULT_SOLVENT: &str = "water";
pub const STANDARD_TEMPERATURE_K: f64 = 298.15;
pub const STANDARD_PRESSURE_ATM: f64 = 1.0;

/// What the user asked for: structures, solvent and conditions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReactionTask {
    pub reactants: Vec<String>,
    pub solutes: Vec<String>,
    pub solvent: String,
    /// K
    pub temperature: f64,
    /// atm
    pub pressure: f64,
}

impl Default for ReactionTask {
    fn default() -> Self {
        Self::new()
    }
}

/// Per structure part of the report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructureSummary {
    pub input: String,
    pub sanitized: String,
    pub tokens: Vec<String>,
    /// display formula, placeholder when no tokens
    pub formula: String,
    /// heavy atoms only, g/mol
    pub molar_mass: f64,
    pub unknown_symbols: Vec<String>,
}

/// Everything the display needs for one simulated reaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationReport {
    pub seed: String,
    pub reactants: Vec<StructureSummary>,
    pub solutes: Vec<StructureSummary>,
    pub solvent: String,
    pub solvent_factor: f64,
    pub temperature: f64,
    pub pressure: f64,
    /// formula of all reactants taken together
    pub combined_formula: String,
    pub minutes: u64,
    pub duration: String,
    pub safety: SafetyReport,
    pub layout: AtomLayout,
}

impl ReactionTask {
    pub fn new() -> Self {
        Self {
            reactants: Vec::new(),
            solutes: Vec::new(),
            solvent: DEFAULT_SOLVENT.to_string(),
            temperature: STANDARD_TEMPERATURE_K,
            pressure: STANDARD_PRESSURE_ATM,
        }
    }

    pub fn with_reactants<S: AsRef<str>>(mut self, reactants: &[S]) -> Self {
        self.reactants = reactants.iter().map(|s| s.as_ref().to_string()).collect();
        self
    }

    pub fn with_solutes<S: AsRef<str>>(mut self, solutes: &[S]) -> Self {
        self.solutes = solutes.iter().map(|s| s.as_ref().to_string()).collect();
        self
    }

    pub fn with_solvent(mut self, solvent: &str) -> Self {
        self.solvent = solvent.to_string();
        self
    }

    pub fn with_conditions(mut self, temperature: f64, pressure: f64) -> Self {
        self.temperature = temperature;
        self.pressure = pressure;
        self
    }

    pub fn from_json(json: &str) -> Result<Self, ReactVizError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Seed shared by the layout and the scores: sanitized reactants joined with '.', then
    /// '|' and the normalized solvent key.
    pub fn seed(&self, max_len: usize) -> String {
        let reactants: Vec<String> = self
            .reactants
            .iter()
            .map(|r| sanitize_with_limit(r, max_len))
            .collect();
        format!(
            "{}|{}",
            reactants.join("."),
            self.solvent.trim().to_lowercase()
        )
    }

    /// Runs the mocked simulation with the built-in solvent table and default settings.
    pub fn run(&self) -> SimulationReport {
        self.run_with(&SimulationSettings::default())
    }

    pub fn run_with(&self, settings: &SimulationSettings) -> SimulationReport {
        let table = SolventTable::with_overrides(&settings.solvent_overrides);
        info!(
            "simulating {} reactant(s), {} solute(s) in {} at {} K, {} atm",
            self.reactants.len(),
            self.solutes.len(),
            self.solvent,
            self.temperature,
            self.pressure
        );
        let summarize = |s: &String| summarize_structure(s, settings);
        let reactants: Vec<StructureSummary> = self.reactants.iter().map(summarize).collect();
        let solutes: Vec<StructureSummary> = self.solutes.iter().map(summarize).collect();

        let all_reactant_tokens: Vec<String> = reactants
            .iter()
            .flat_map(|r| r.tokens.iter().cloned())
            .collect();
        let combined_formula = format_formula(&all_reactant_tokens);

        let seed = self.seed(settings.max_structure_len);
        debug!("simulation seed: {}", seed);

        let minutes = table.estimate(
            self.reactants.len(),
            self.solutes.len(),
            &self.solvent,
            self.temperature,
            self.pressure,
        );
        let scene: Vec<&str> = reactants
            .iter()
            .chain(solutes.iter())
            .map(|s| s.sanitized.as_str())
            .collect();
        let layout = layout_structures(&scene, &seed, settings.bond_length);
        info!(
            "estimated {} ({} atoms placed)",
            format_duration(minutes),
            layout.atoms.len()
        );

        SimulationReport {
            safety: SafetyReport::from_seed(&seed),
            seed,
            reactants,
            solutes,
            solvent: self.solvent.clone(),
            solvent_factor: table.factor(&self.solvent),
            temperature: self.temperature,
            pressure: self.pressure,
            combined_formula: if combined_formula.is_empty() {
                settings.placeholder.clone()
            } else {
                combined_formula
            },
            minutes,
            duration: format_duration(minutes),
            layout,
        }
    }
}

fn summarize_structure(input: &str, settings: &SimulationSettings) -> StructureSummary {
    let sanitized = sanitize_with_limit(input, settings.max_structure_len);
    let tokens = tokenize(&sanitized);
    let formula = formula_from_smiles(&sanitized);
    let (molar_mass, unknown_symbols) = molar_mass_of_tokens(&tokens);
    StructureSummary {
        input: input.to_string(),
        sanitized,
        tokens,
        formula: if formula.is_empty() {
            settings.placeholder.clone()
        } else {
            formula
        },
        molar_mass,
        unknown_symbols,
    }
}

impl SimulationReport {
    pub fn to_json(&self) -> Result<String, ReactVizError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
