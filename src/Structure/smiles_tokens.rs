//! Lexing of element symbols out of SMILES-like structure strings.
//!
//! Nothing here knows about bonds, rings or valence: the lexer only pulls out symbol-shaped
//! substrings in order of appearance. Digits, brackets, bond symbols, charges and parentheses
//! contribute nothing.

use regex::Regex;
use std::collections::BTreeMap;
use std::sync::OnceLock;

// halogens go first in the alternation so that "Cl" never splits into "C" + "l"
const ELEMENT_TOKEN_PATTERN: &str = r"Cl|Br|[A-Z][a-z]?";

fn element_token_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(ELEMENT_TOKEN_PATTERN).expect("element token pattern is valid")
    })
}

/// Returns the element symbols found in `structure`, left to right, duplicates kept.
///
/// Any `[A-Z][a-z]?` substring is accepted, chemically real or not ("Xx" is emitted as is).
/// Runs of lowercase letters that do not follow an uppercase letter (aromatic `c`, `n`, ...)
/// are dropped.
/// # Examples
/// ```
/// use ReactViz::Structure::smiles_tokens::tokenize;
/// assert_eq!(tokenize("ClCCl"), vec!["Cl", "C", "Cl"]);
/// assert!(tokenize("123()=").is_empty());
/// ```
pub fn tokenize(structure: &str) -> Vec<String> {
    element_token_regex()
        .find_iter(structure)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Tallies a token sequence into element -> count. One entry per distinct symbol.
pub fn count_elements<S: AsRef<str>>(tokens: &[S]) -> BTreeMap<String, usize> {
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for token in tokens {
        *counts.entry(token.as_ref().to_string()).or_insert(0) += 1;
    }
    counts
}

/// Tokenizes every structure of a vector and concatenates the results, keeping the order of
/// the structures.
pub fn tokenize_vector_of_structures<S: AsRef<str>>(structures: &[S]) -> Vec<String> {
    structures
        .iter()
        .flat_map(|s| tokenize(s.as_ref()))
        .collect()
}
