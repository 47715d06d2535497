//! Stable but arbitrary percentage indicators derived from strings.
//!
//! Scores are cosmetic: they keep the displayed bars inside a comfortable range and must not be
//! read as toxicity or regulatory data.

use super::seeded_rng::fnv1a_fold;
use serde::{Deserialize, Serialize};

pub const SCORE_MIN: u32 = 5;
pub const SCORE_MAX: u32 = 95;
const SCORE_SPAN: u32 = SCORE_MAX - SCORE_MIN + 1;

/// Score in [5, 95] for a `(seed, salt)` pair: a fresh FNV-1a fold of `seed|salt`.
pub fn score_from_seed(seed: &str, salt: &str) -> u32 {
    let h = fnv1a_fold(&format!("{seed}|{salt}"));
    SCORE_MIN + h % SCORE_SPAN
}

/// Boolean indicator: true when the salted score reaches `threshold`.
pub fn flag_from_seed(seed: &str, salt: &str, threshold: u32) -> bool {
    score_from_seed(seed, salt) >= threshold
}

pub const TOXICITY_SALT: &str = "toxicity";
pub const FLAMMABILITY_SALT: &str = "flammability";
pub const ENVIRONMENT_SALT: &str = "environment";
pub const REACTIVITY_SALT: &str = "reactivity";
pub const REACH_SALT: &str = "reach";
pub const GHS_SALT: &str = "ghs";
/// compliance flags are raised for scores at or above this value
pub const COMPLIANCE_THRESHOLD: u32 = 30;

/// Placeholder safety/compliance panel of a simulated reaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SafetyReport {
    pub toxicity: u32,
    pub flammability: u32,
    pub environmental_impact: u32,
    pub reactivity: u32,
    pub reach_compliant: bool,
    pub ghs_labelled: bool,
}

impl SafetyReport {
    pub fn from_seed(seed: &str) -> Self {
        Self {
            toxicity: score_from_seed(seed, TOXICITY_SALT),
            flammability: score_from_seed(seed, FLAMMABILITY_SALT),
            environmental_impact: score_from_seed(seed, ENVIRONMENT_SALT),
            reactivity: score_from_seed(seed, REACTIVITY_SALT),
            reach_compliant: flag_from_seed(seed, REACH_SALT, COMPLIANCE_THRESHOLD),
            ghs_labelled: flag_from_seed(seed, GHS_SALT, COMPLIANCE_THRESHOLD),
        }
    }

    /// Mean of the four percentage scores, rounded.
    pub fn overall_hazard(&self) -> u32 {
        let sum = self.toxicity + self.flammability + self.environmental_impact + self.reactivity;
        (sum as f64 / 4.0).round() as u32
    }

    /// Coarse label for the overall hazard.
    pub fn hazard_level(&self) -> &'static str {
        match self.overall_hazard() {
            0..=34 => "low",
            35..=64 => "moderate",
            _ => "high",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_range() {
        let seeds = ["", "C", "CCO", "ClCCl", "Ω", "[Na+].[Cl-]"];
        let salts = ["", "toxicity", "a|b", "reach"];
        for seed in seeds {
            for salt in salts {
                let s = score_from_seed(seed, salt);
                assert!((SCORE_MIN..=SCORE_MAX).contains(&s), "{seed}/{salt}: {s}");
            }
        }
    }

    #[test]
    fn test_score_matches_fold() {
        let h = fnv1a_fold("CCO|toxicity");
        assert_eq!(score_from_seed("CCO", "toxicity"), 5 + h % 91);
    }

    #[test]
    fn test_score_is_stable() {
        let first = score_from_seed("CCO", "toxicity");
        for _ in 0..100 {
            assert_eq!(score_from_seed("CCO", "toxicity"), first);
        }
    }

    #[test]
    fn test_separator_is_part_of_the_seed() {
        let h = fnv1a_fold("ab|c");
        assert_eq!(score_from_seed("ab", "c"), 5 + h % 91);
        assert_eq!(score_from_seed("a", "b|c"), score_from_seed("a|b", "c"));
    }

    #[test]
    fn test_flags_follow_scores() {
        let s = score_from_seed("CCO", REACH_SALT);
        assert_eq!(flag_from_seed("CCO", REACH_SALT, s), true);
        assert_eq!(flag_from_seed("CCO", REACH_SALT, s + 1), false);
        assert!(flag_from_seed("anything", "x", SCORE_MIN));
        assert!(!flag_from_seed("anything", "x", SCORE_MAX + 1));
    }

    #[test]
    fn test_safety_report() {
        let report = SafetyReport::from_seed("CCO.O|water");
        assert_eq!(report, SafetyReport::from_seed("CCO.O|water"));
        assert_eq!(report.toxicity, score_from_seed("CCO.O|water", TOXICITY_SALT));
        let overall = report.overall_hazard();
        assert!((SCORE_MIN..=SCORE_MAX).contains(&overall));
        assert!(["low", "moderate", "high"].contains(&report.hazard_level()));
    }
}
