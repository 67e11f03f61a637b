//! Text normalization applied to both note text and catalog patterns.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Canonical form for term matching: NFD decomposition with combining marks
/// removed, lowercased, outer whitespace trimmed. Internal whitespace is kept.
pub fn normalize(text: &str) -> String {
    let stripped: String = text.nfd().filter(|c| !is_combining_mark(*c)).collect();
    stripped.to_lowercase().trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_accents() {
        assert_eq!(normalize("hémoglobine"), "hemoglobine");
        assert_eq!(normalize("Réaction"), "reaction");
        assert_eq!(normalize("cholestérol"), normalize("CHOLESTEROL"));
    }

    #[test]
    fn test_trims_outer_whitespace_only() {
        assert_eq!(normalize("  Poids   anormal \n"), "poids   anormal");
    }

    #[test]
    fn test_empty_and_blank() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize(" \t "), "");
    }

    #[test]
    fn test_regex_syntax_survives() {
        assert_eq!(normalize("anormal(?:e)?"), "anormal(?:e)?");
    }
}
