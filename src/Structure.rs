/// Lexing of SMILES-like structure strings into element symbols. Only symbol-shaped substrings
/// are taken, the rest of the notation (bonds, rings, charges, branches) is skipped.
///
///  # Examples
/// ```
/// use ReactViz::Structure::smiles_tokens::{count_elements, tokenize};
/// let tokens = tokenize("OC(=O)CCl");
/// assert_eq!(tokens, vec!["O", "C", "O", "C", "Cl"]);
/// let counts = count_elements(&tokens);
/// assert_eq!(counts["O"], 2);
/// ```
pub mod smiles_tokens;
/// Hill system formula strings built from element token sequences
///
///  # Examples
/// ```
/// use ReactViz::Structure::formula::{display_formula, formula_from_smiles};
/// assert_eq!(formula_from_smiles("ClC(Cl)Cl"), "CCl3");
/// assert_eq!(display_formula("()", "—"), "—");
/// ```
pub mod formula;
/// Colors, radii and atomic masses of elements used by the 3D layout and the report
pub mod elements;
