//! Clean-up of user supplied structure strings before they reach the tokenizer.
//!
//! Only SMILES characters survive: letters, digits and `@ + - [ ] ( ) = # \ / . * :`.
//! The result is cut to a maximum number of characters (200 by default). The tokenizer does
//! not rely on this, it accepts any string.

pub const MAX_STRUCTURE_LEN: usize = 200;

pub fn is_structure_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || matches!(
            c,
            '@' | '+' | '-' | '[' | ']' | '(' | ')' | '=' | '#' | '\\' | '/' | '.' | '*' | ':'
        )
}

/// Filters out non-SMILES characters, then keeps at most [`MAX_STRUCTURE_LEN`] characters.
/// # Examples
/// ```
/// use ReactViz::Utils::sanitize::sanitize_structure;
/// assert_eq!(sanitize_structure(" C C O; "), "CCO");
/// ```
pub fn sanitize_structure(input: &str) -> String {
    sanitize_with_limit(input, MAX_STRUCTURE_LEN)
}

pub fn sanitize_with_limit(input: &str, max_len: usize) -> String {
    input
        .chars()
        .filter(|c| is_structure_char(*c))
        .take(max_len)
        .collect()
}

/// True when sanitizing would leave the string unchanged.
pub fn is_sanitized(input: &str) -> bool {
    input.chars().count() <= MAX_STRUCTURE_LEN && input.chars().all(is_structure_char)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_smiles_characters() {
        let smiles = r"C[C@@H](N)C(=O)O.[Na+]/C=C\C#N*:1";
        assert_eq!(sanitize_structure(smiles), smiles);
        assert!(is_sanitized(smiles));
    }

    #[test]
    fn test_drops_everything_else() {
        assert_eq!(sanitize_structure("C C\tO\n"), "CCO");
        assert_eq!(sanitize_structure("<script>alert(1)</script>"), "scriptalert(1)/script");
        assert_eq!(sanitize_structure("CΩC€O"), "CCO");
        assert_eq!(sanitize_structure(""), "");
        assert!(!is_sanitized("C O"));
    }

    #[test]
    fn test_truncates_after_filtering() {
        let long = "C ".repeat(300);
        let clean = sanitize_structure(&long);
        assert_eq!(clean.len(), MAX_STRUCTURE_LEN);
        assert!(clean.chars().all(|c| c == 'C'));
        assert!(!is_sanitized(&"C".repeat(201)));
        assert_eq!(sanitize_with_limit("CCOCC", 3), "CCO");
    }
}
