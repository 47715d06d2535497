//! Hill system formulas built from element token sequences.
//!
//! Carbon goes first, hydrogen second (only when carbon is present), everything else
//! alphabetically. Without carbon all symbols, hydrogen included, are alphabetical.

use super::smiles_tokens::{count_elements, tokenize};
use std::collections::BTreeMap;
use std::fmt::Write;

/// Glyph shown in place of a formula when a structure yields no element tokens.
pub const EMPTY_FORMULA_PLACEHOLDER: &str = "—";

/// Renders a token sequence as a Hill system formula. A count of 1 is omitted. An empty
/// sequence gives an empty string.
/// # Examples
/// ```
/// use ReactViz::Structure::formula::format_formula;
/// assert_eq!(format_formula(&["C", "C", "O", "H", "H", "H", "H", "H", "H"]), "C2H6O");
/// assert_eq!(format_formula(&["Na", "Cl"]), "ClNa");
/// ```
pub fn format_formula<S: AsRef<str>>(tokens: &[S]) -> String {
    format_counts(count_elements(tokens))
}

/// Same as [`format_formula`] for an already tallied composition.
pub fn format_counts(mut counts: BTreeMap<String, usize>) -> String {
    let mut result = String::new();

    if let Some(c) = counts.remove("C") {
        append_element(&mut result, "C", c);
        if let Some(h) = counts.remove("H") {
            append_element(&mut result, "H", h);
        }
    }
    // BTreeMap iterates keys in byte order, which is what we want for symbols
    for (symbol, count) in &counts {
        append_element(&mut result, symbol, *count);
    }
    result
}

fn append_element(buf: &mut String, symbol: &str, count: usize) {
    if count == 0 {
        return;
    }
    buf.push_str(symbol);
    if count > 1 {
        // writing into a String cannot fail
        let _ = write!(buf, "{count}");
    }
}

/// Tokenizes the structure and formats its formula in one go.
pub fn formula_from_smiles(structure: &str) -> String {
    format_formula(&tokenize(structure))
}

/// Formula for display: an empty formula is replaced by `placeholder`.
pub fn display_formula(structure: &str, placeholder: &str) -> String {
    let formula = formula_from_smiles(structure);
    if formula.is_empty() {
        placeholder.to_string()
    } else {
        formula
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ethanol() {
        assert_eq!(
            format_formula(&["C", "C", "O", "H", "H", "H", "H", "H", "H"]),
            "C2H6O"
        );
    }

    #[test]
    fn test_single_and_empty() {
        assert_eq!(format_formula(&["O"]), "O");
        assert_eq!(format_formula::<&str>(&[]), "");
    }

    #[test]
    fn test_no_carbon_is_alphabetical() {
        assert_eq!(format_formula(&["Na", "Cl"]), "ClNa");
        assert_eq!(format_formula(&["O", "H", "H"]), "H2O");
        assert_eq!(format_formula(&["N", "H", "H", "H"]), "H3N");
    }

    #[test]
    fn test_carbon_without_hydrogen() {
        assert_eq!(format_formula(&["O", "C", "O"]), "CO2");
        assert_eq!(format_formula(&["Cl", "C", "Cl", "Cl", "Cl"]), "CCl4");
    }

    #[test]
    fn test_rest_sorted_after_c_and_h() {
        assert_eq!(
            format_formula(&["S", "N", "H", "C", "Br", "O", "H"]),
            "CH2BrNOS"
        );
    }

    #[test]
    fn test_order_independent() {
        let a = format_formula(&["C", "H", "O", "H", "C"]);
        let b = format_formula(&["O", "H", "H", "C", "C"]);
        assert_eq!(a, b);
        assert_eq!(a, "C2H2O");
    }

    #[test]
    fn test_formula_from_smiles() {
        assert_eq!(formula_from_smiles("CCO"), "C2O");
        assert_eq!(formula_from_smiles("ClCCl"), "CCl2");
        assert_eq!(formula_from_smiles(""), "");
    }

    #[test]
    fn test_display_formula_placeholder() {
        assert_eq!(display_formula("123", EMPTY_FORMULA_PLACEHOLDER), "—");
        assert_eq!(display_formula("c1ccccc1", "?"), "?");
        assert_eq!(display_formula("O", "?"), "O");
    }
}
