//! Free-text lookup over the catalog.
//!
//! Deliberately a linear scan: the catalog is a few dozen records and
//! is never mutated, so an index would be pure overhead. Matching is
//! accent- and case-insensitive on both sides via
//! [`wonders_model::normalize`].

use wonders_model::{Card, Language, normalize};

use crate::catalog::Catalog;
use crate::localize;

/// Scans the full catalog for cards whose localized title, short
/// description, or description contains `query`.
///
/// An empty (or whitespace/diacritic-only) query yields an empty
/// result, not the full catalog. Results keep catalog order, which is
/// ascending global id.
pub fn search<'a>(catalog: &'a Catalog, query: &str, language: Language) -> Vec<&'a Card> {
    let needle = normalize(query);
    if needle.is_empty() {
        return Vec::new();
    }

    catalog
        .cards()
        .iter()
        .filter(|card| matches(card, &needle, language))
        .collect()
}

fn matches(card: &Card, needle: &str, language: Language) -> bool {
    let text = localize::text_for(card, language);

    if normalize(&text.title).contains(needle) {
        return true;
    }
    if normalize(&text.short_description).contains(needle) {
        return true;
    }
    if let Some(description) = &text.description {
        if normalize(description).contains(needle) {
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use wonders_model::Category;

    #[test]
    fn empty_query_returns_nothing() {
        let catalog = Catalog::shared();
        assert!(search(catalog, "", Language::En).is_empty());
        assert!(search(catalog, "   ", Language::En).is_empty());
    }

    #[test]
    fn accent_insensitive_match() {
        let catalog = Catalog::shared();
        let hits = search(catalog, "Belem", Language::En);
        assert!(
            hits.iter()
                .any(|c| localize::text_for(c, Language::En).title == "Belém Tower")
        );
    }

    #[test]
    fn matches_against_short_description() {
        let catalog = Catalog::shared();
        let hits = search(catalog, "ginja", Language::Pt);
        assert!(
            hits.iter()
                .any(|c| localize::text_for(c, Language::Pt).title == "Ginjinha")
        );
    }

    #[test]
    fn results_keep_catalog_order() {
        let catalog = Catalog::shared();
        let hits = search(catalog, "lisboa", Language::Pt);
        assert!(hits.len() > 1);
        assert!(hits.windows(2).all(|w| w[0].id.as_u32() < w[1].id.as_u32()));
    }

    #[test]
    fn fallback_translation_is_searched() {
        // Portuguese vocabulary cards only carry a pt translation, so
        // an English search still scans the pt text.
        let catalog = Catalog::shared();
        let hits = search(catalog, "telemovel", Language::En);
        assert!(hits.iter().any(|c| c.category == Category::VocabularyPt));
    }
}
