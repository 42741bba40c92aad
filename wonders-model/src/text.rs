//! String normalization used for category and search matching.

use unicode_normalization::UnicodeNormalization;

/// Normalizes a string for accent- and case-insensitive comparison.
///
/// ASCII-folds by NFD decomposition and dropping combining marks, then
/// lowercases. Idempotent: `normalize(normalize(s)) == normalize(s)`.
#[must_use]
pub fn normalize(s: &str) -> String {
    s.trim()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

// Combining Diacritical Marks block; everything the catalog's EN/PT
// content can decompose into.
fn is_combining_mark(c: char) -> bool {
    ('\u{0300}'..='\u{036F}').contains(&c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_accents_and_case() {
        assert_eq!(normalize("Vocabulário"), "vocabulario");
        assert_eq!(normalize("IGREJAS"), "igrejas");
        assert_eq!(normalize("  São Jorge  "), "sao jorge");
    }

    #[test]
    fn is_idempotent() {
        for s in ["Pastéis de Nata", "GINJINHA", "café\u{0301}", ""] {
            assert_eq!(normalize(&normalize(s)), normalize(s));
        }
    }

    #[test]
    fn handles_precomposed_and_decomposed_forms_alike() {
        // "é" as a single code point vs "e" + combining acute
        assert_eq!(normalize("caf\u{00E9}"), normalize("cafe\u{0301}"));
    }
}
