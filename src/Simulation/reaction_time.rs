//! Closed-form reaction time heuristic.
//!
//! ```text
//! base            = 30 + 20*reactants + 10*solutes
//! base           *= solvent factor (1.0 for unknown solvents)
//! temp_factor     = max(0.4, 1.6 - (T - 273)/300)
//! pressure_factor = max(0.7, 1.2 - (P - 1)*0.05)
//! minutes         = max(5, round(base*temp_factor*pressure_factor))
//! ```
//! Purely illustrative, no kinetics behind it.

use std::collections::HashMap;
use std::sync::OnceLock;

pub const DEFAULT_SOLVENT_FACTOR: f64 = 1.0;
pub const MIN_MINUTES: u64 = 5;
const MIN_TEMP_FACTOR: f64 = 0.4;
const MIN_PRESSURE_FACTOR: f64 = 0.7;

const SOLVENT_FACTORS: &[(&str, f64)] = &[
    ("water", 1.0),
    ("ethanol", 0.9),
    ("methanol", 0.85),
    ("acetone", 0.8),
    ("acetonitrile", 0.85),
    ("dmso", 1.2),
    ("dmf", 1.15),
    ("thf", 0.95),
    ("dichloromethane", 0.75),
    ("chloroform", 0.8),
    ("toluene", 1.1),
    ("hexane", 1.3),
    ("diethyl_ether", 0.7),
    ("ethyl_acetate", 0.9),
];

fn normalize_key(key: &str) -> String {
    key.trim().to_lowercase()
}

/// Immutable solvent key -> rate multiplier map.
#[derive(Debug, Clone, PartialEq)]
pub struct SolventTable {
    factors: HashMap<String, f64>,
}

impl SolventTable {
    /// The built-in table.
    pub fn builtin() -> Self {
        let factors = SOLVENT_FACTORS
            .iter()
            .map(|(k, v)| (k.to_string(), *v))
            .collect();
        Self { factors }
    }

    /// Built-in table with some factors replaced or added. Keys are normalized.
    pub fn with_overrides(overrides: &HashMap<String, f64>) -> Self {
        let mut table = Self::builtin();
        for (k, v) in overrides {
            table.factors.insert(normalize_key(k), *v);
        }
        table
    }

    /// Multiplier for a solvent, case-insensitive. Unknown keys give 1.0.
    pub fn factor(&self, solvent: &str) -> f64 {
        self.factors
            .get(&normalize_key(solvent))
            .copied()
            .unwrap_or(DEFAULT_SOLVENT_FACTOR)
    }

    pub fn contains(&self, solvent: &str) -> bool {
        self.factors.contains_key(&normalize_key(solvent))
    }

    /// Known solvent keys, sorted.
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.factors.keys().cloned().collect();
        keys.sort();
        keys
    }

    pub fn estimate(
        &self,
        reactants_count: usize,
        solutes_count: usize,
        solvent: &str,
        temperature_k: f64,
        pressure_atm: f64,
    ) -> u64 {
        let mut base = 30.0 + 20.0 * reactants_count as f64 + 10.0 * solutes_count as f64;
        base *= self.factor(solvent);
        let minutes =
            (base * temperature_factor(temperature_k) * pressure_factor(pressure_atm)).round();
        // a NaN condition ends up at the floor
        if minutes.is_nan() || minutes < MIN_MINUTES as f64 {
            MIN_MINUTES
        } else {
            minutes as u64
        }
    }
}

/// The built-in solvent table, created on first use.
pub fn solvent_table() -> &'static SolventTable {
    static TABLE: OnceLock<SolventTable> = OnceLock::new();
    TABLE.get_or_init(SolventTable::builtin)
}

pub fn solvent_factor(solvent: &str) -> f64 {
    solvent_table().factor(solvent)
}

pub fn temperature_factor(temperature_k: f64) -> f64 {
    (1.6 - (temperature_k - 273.0) / 300.0).max(MIN_TEMP_FACTOR)
}

pub fn pressure_factor(pressure_atm: f64) -> f64 {
    (1.2 - (pressure_atm - 1.0) * 0.05).max(MIN_PRESSURE_FACTOR)
}

/// Estimated reaction time in whole minutes (at least 5) using the built-in solvent table.
/// # Examples
/// ```
/// use ReactViz::Simulation::reaction_time::estimate_reaction_time;
/// assert_eq!(estimate_reaction_time(1, 0, "water", 298.0, 1.0), 91);
/// ```
pub fn estimate_reaction_time(
    reactants_count: usize,
    solutes_count: usize,
    solvent: &str,
    temperature_k: f64,
    pressure_atm: f64,
) -> u64 {
    solvent_table().estimate(
        reactants_count,
        solutes_count,
        solvent,
        temperature_k,
        pressure_atm,
    )
}

/// "{h}h {m}m" from one hour on, "{m} min" below.
pub fn format_duration(minutes: u64) -> String {
    if minutes >= 60 {
        format!("{}h {}m", minutes / 60, minutes % 60)
    } else {
        format!("{} min", minutes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_reference_point() {
        assert_relative_eq!(temperature_factor(298.0), 1.6 - 25.0 / 300.0, epsilon = 1e-12);
        assert_relative_eq!(pressure_factor(1.0), 1.2, epsilon = 1e-12);
        assert_eq!(estimate_reaction_time(1, 0, "water", 298.0, 1.0), 91);
    }

    #[test]
    fn test_temperature_clamp() {
        assert_relative_eq!(temperature_factor(573.0), 0.6, epsilon = 1e-12);
        assert_relative_eq!(temperature_factor(633.0), 0.4, epsilon = 1e-12);
        assert_relative_eq!(temperature_factor(900.0), 0.4, epsilon = 1e-12);
        assert_relative_eq!(temperature_factor(273.0), 1.6, epsilon = 1e-12);
        // base 50 * 0.4 * 1.2
        assert_eq!(estimate_reaction_time(1, 0, "water", 900.0, 1.0), 24);
    }

    #[test]
    fn test_pressure_clamp() {
        assert_relative_eq!(pressure_factor(10.0), 0.75, epsilon = 1e-12);
        assert_relative_eq!(pressure_factor(11.0), 0.7, epsilon = 1e-12);
        assert_relative_eq!(pressure_factor(50.0), 0.7, epsilon = 1e-12);
        // base 50 * 1.6 * 0.7
        assert_eq!(estimate_reaction_time(1, 0, "water", 273.0, 50.0), 56);
    }

    #[test]
    fn test_minimum_minutes() {
        // base 30 * 0.4 * 0.7 = 8.4
        assert_eq!(estimate_reaction_time(0, 0, "water", 5000.0, 500.0), 8);
        let tiny = SolventTable::with_overrides(&HashMap::from([("fast".to_string(), 0.01)]));
        assert_eq!(tiny.estimate(0, 0, "fast", 5000.0, 500.0), MIN_MINUTES);
        assert_eq!(tiny.estimate(0, 0, "fast", f64::NAN, 1.0), MIN_MINUTES);
    }

    #[test]
    fn test_solvent_lookup() {
        assert_eq!(solvent_factor("water"), 1.0);
        assert_eq!(solvent_factor("  Ethanol "), 0.9);
        assert_eq!(solvent_factor("unobtainium"), DEFAULT_SOLVENT_FACTOR);
        // 2 reactants + 1 solute: base 80 * 0.9 = 72, * 1.6 * 1.2 = 138.24
        assert_eq!(estimate_reaction_time(2, 1, "ethanol", 273.0, 1.0), 138);
        assert_eq!(
            estimate_reaction_time(2, 1, "unknown", 273.0, 1.0),
            estimate_reaction_time(2, 1, "water", 273.0, 1.0)
        );
    }

    #[test]
    fn test_overrides() {
        let table = SolventTable::with_overrides(&HashMap::from([
            ("Water".to_string(), 2.0),
            ("ionic_liquid".to_string(), 1.5),
        ]));
        assert_eq!(table.factor("water"), 2.0);
        assert_eq!(table.factor("IONIC_LIQUID"), 1.5);
        assert!(table.contains("toluene"));
        assert_eq!(table.estimate(1, 0, "water", 298.0, 1.0), 182);
        assert!(table.keys().windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_idempotent() {
        let a = estimate_reaction_time(3, 2, "dmso", 310.0, 2.5);
        let b = estimate_reaction_time(3, 2, "dmso", 310.0, 2.5);
        assert_eq!(a, b);
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(5), "5 min");
        assert_eq!(format_duration(59), "59 min");
        assert_eq!(format_duration(60), "1h 0m");
        assert_eq!(format_duration(91), "1h 31m");
        assert_eq!(format_duration(138), "2h 18m");
    }
}
