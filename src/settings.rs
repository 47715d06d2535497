//! # Settings Module
//!
//! ## Purpose
//! Keeps the few tunables of ReactViz in one JSON file (`reactviz_config.json`) so the
//! placeholder glyph, input limit, log level, layout scale and solvent multipliers can be
//! changed without touching code.
//!
//! ## Behaviour
//! - A missing file is not an error: defaults are used.
//! - A malformed file is reported by [`SettingsManager::load_settings`]; the convenience
//!   constructors log a warning and fall back to defaults.
//! - Every update is validated before it is accepted.
//!
//! ## Configuration Format
//! ```json
//! {
//!   "placeholder": "—",
//!   "max_structure_len": 200,
//!   "log_level": "info",
//!   "bond_length": 1.5,
//!   "solvent_overrides": { "ionic_liquid": 1.4 }
//! }
//! ```
//!
//! ## Usage Pattern
//! ```rust
//! use ReactViz::settings::SettingsManager;
//!
//! let manager = SettingsManager::with_config_file("does_not_exist.json");
//! let table = manager.solvent_table();
//! assert_eq!(table.factor("water"), 1.0);
//! ```

use crate::Simulation::reaction_time::SolventTable;
use crate::Structure::formula::EMPTY_FORMULA_PLACEHOLDER;
use crate::Utils::sanitize::MAX_STRUCTURE_LEN;
use crate::error::ReactVizError;
use log::{LevelFilter, info, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

pub const DEFAULT_CONFIG_FILE: &str = "reactviz_config.json";

/// Serializable tunables. Missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationSettings {
    /// shown instead of an empty formula
    pub placeholder: String,
    /// sanitized structures are cut to this many characters
    pub max_structure_len: usize,
    /// one of off, error, warn, info, debug, trace
    pub log_level: String,
    /// scene units per bond in the 3D layout
    pub bond_length: f64,
    /// extra or replaced solvent multipliers
    pub solvent_overrides: HashMap<String, f64>,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            placeholder: EMPTY_FORMULA_PLACEHOLDER.to_string(),
            max_structure_len: MAX_STRUCTURE_LEN,
            log_level: "info".to_string(),
            bond_length: crate::Simulation::layout::DEFAULT_BOND_LENGTH,
            solvent_overrides: HashMap::new(),
        }
    }
}

fn invalid(name: &str, reason: impl Into<String>) -> ReactVizError {
    ReactVizError::InvalidSetting {
        name: name.to_string(),
        reason: reason.into(),
    }
}

impl SimulationSettings {
    pub fn validate(&self) -> Result<(), ReactVizError> {
        if self.max_structure_len == 0 {
            return Err(invalid("max_structure_len", "must be positive"));
        }
        if !(self.bond_length.is_finite() && self.bond_length > 0.0) {
            return Err(invalid("bond_length", "must be a positive number"));
        }
        parse_level(&self.log_level)?;
        for (solvent, factor) in &self.solvent_overrides {
            if solvent.trim().is_empty() {
                return Err(invalid("solvent_overrides", "empty solvent name"));
            }
            if !(factor.is_finite() && *factor > 0.0) {
                return Err(invalid(
                    "solvent_overrides",
                    format!("factor for '{}' must be a positive number", solvent),
                ));
            }
        }
        Ok(())
    }

    pub fn level_filter(&self) -> LevelFilter {
        parse_level(&self.log_level).unwrap_or(LevelFilter::Info)
    }
}

fn parse_level(level: &str) -> Result<LevelFilter, ReactVizError> {
    match level.trim().to_lowercase().as_str() {
        "off" => Ok(LevelFilter::Off),
        "error" => Ok(LevelFilter::Error),
        "warn" | "warning" => Ok(LevelFilter::Warn),
        "info" => Ok(LevelFilter::Info),
        "debug" => Ok(LevelFilter::Debug),
        "trace" => Ok(LevelFilter::Trace),
        other => Err(invalid("log_level", format!("unknown level '{}'", other))),
    }
}

/// Owner of the current settings and of the file they persist to.
#[derive(Debug, Clone)]
pub struct SettingsManager {
    settings: SimulationSettings,
    config_file: String,
}

impl SettingsManager {
    /// Loads `reactviz_config.json` from the working directory, or defaults.
    pub fn new() -> Self {
        Self::with_config_file(DEFAULT_CONFIG_FILE)
    }

    /// Loads settings from `config_file`. Unreadable or invalid files give defaults (with a
    /// warning); the path is still used by [`SettingsManager::save_settings`].
    pub fn with_config_file(config_file: &str) -> Self {
        let settings = match Self::load_settings(config_file) {
            Ok(settings) => settings,
            Err(e) => {
                warn!(
                    "Failed to load settings from '{}': {}, using defaults",
                    config_file, e
                );
                SimulationSettings::default()
            }
        };
        Self {
            settings,
            config_file: config_file.to_string(),
        }
    }

    /// Reads and validates a settings file. A missing file gives defaults.
    pub fn load_settings(config_file: &str) -> Result<SimulationSettings, ReactVizError> {
        if !Path::new(config_file).exists() {
            info!("No settings file '{}', using defaults", config_file);
            return Ok(SimulationSettings::default());
        }
        let content = fs::read_to_string(config_file)?;
        let settings: SimulationSettings = serde_json::from_str(&content)?;
        settings.validate()?;
        info!("Loaded settings from '{}'", config_file);
        Ok(settings)
    }

    pub fn save_settings(&self) -> Result<(), ReactVizError> {
        let content = serde_json::to_string_pretty(&self.settings)?;
        fs::write(&self.config_file, content)?;
        info!("Saved settings to '{}'", self.config_file);
        Ok(())
    }

    pub fn settings(&self) -> &SimulationSettings {
        &self.settings
    }

    pub fn config_file(&self) -> &str {
        &self.config_file
    }

    /// Replaces all settings at once, if they validate.
    pub fn update(&mut self, settings: SimulationSettings) -> Result<(), ReactVizError> {
        settings.validate()?;
        self.settings = settings;
        Ok(())
    }

    pub fn set_placeholder(&mut self, placeholder: &str) {
        self.settings.placeholder = placeholder.to_string();
    }

    pub fn set_log_level(&mut self, level: &str) -> Result<(), ReactVizError> {
        parse_level(level)?;
        self.settings.log_level = level.trim().to_lowercase();
        Ok(())
    }

    pub fn set_bond_length(&mut self, bond_length: f64) -> Result<(), ReactVizError> {
        let mut candidate = self.settings.clone();
        candidate.bond_length = bond_length;
        self.update(candidate)
    }

    pub fn set_solvent_factor(&mut self, solvent: &str, factor: f64) -> Result<(), ReactVizError> {
        let mut candidate = self.settings.clone();
        candidate
            .solvent_overrides
            .insert(solvent.trim().to_lowercase(), factor);
        self.update(candidate)
    }

    /// Back to defaults, keeping the file path.
    pub fn reset_to_defaults(&mut self) {
        self.settings = SimulationSettings::default();
    }

    /// Built-in solvent multipliers with the configured overrides applied.
    pub fn solvent_table(&self) -> SolventTable {
        SolventTable::with_overrides(&self.settings.solvent_overrides)
    }
}

impl Default for SettingsManager {
    fn default() -> Self {
        Self::new()
    }
}
