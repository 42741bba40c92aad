//! Translation fallback resolution and display policies.
//!
//! The fallback chain is `requested → en → pt → first entry in map
//! order`. The order is behavior-significant: swapping the en/pt legs
//! changes what users see on cards that lack the requested language,
//! so it is spelled out as an explicit candidate loop rather than
//! implied by map iteration.

use wonders_model::{Card, CardText, Category, Language};

pub use wonders_model::normalize;

/// Resolves the translation to display for `card` in `lang`.
///
/// Total for every well-formed card: the catalog guarantees at least
/// one translation per card.
pub fn text_for<'a>(card: &'a Card, lang: Language) -> &'a CardText {
    resolve(card, Some(lang))
}

/// Like [`text_for`] but takes a raw language code, e.g. from a deep
/// link. Unknown codes skip straight to the English leg of the chain.
pub fn resolve_text<'a>(card: &'a Card, code: &str) -> &'a CardText {
    resolve(card, Language::from_code(code))
}

fn resolve<'a>(card: &'a Card, requested: Option<Language>) -> &'a CardText {
    let candidates = requested
        .into_iter()
        .chain([Language::En, Language::Pt]);
    for lang in candidates {
        if let Some(text) = card.translations.get(&lang) {
            return text;
        }
    }
    // Last resort: pinned to map order (En before Pt). Unreachable
    // while Language has only these two variants, but the chain is
    // kept total rather than depending on that.
    card.translations
        .values()
        .next()
        .expect("card carries at least one translation")
}

/// Whether the favorite toggle is offered for this card in `lang`.
///
/// A single business rule, not a category rule: the English phrase
/// deck is presented read-only to Portuguese-language users. Every
/// other card can be favorited in either language.
pub fn can_favorite(card: &Card, lang: Language) -> bool {
    !(lang == Language::Pt && card.category == Category::VocabularyEn)
}

/// Whether the map affordance is shown for cards of this category.
pub fn can_show_map(category: Category) -> bool {
    category.shows_map()
}

/// Localized UI chrome string for `key`, falling back to English and
/// finally to the key itself.
pub fn ui_text<'a>(key: &'a str, lang: Language) -> &'a str {
    chrome(key, lang)
        .or_else(|| chrome(key, Language::En))
        .unwrap_or(key)
}

fn chrome(key: &str, lang: Language) -> Option<&'static str> {
    use Language::{En, Pt};
    Some(match (lang, key) {
        (En, "miniatures_of") => "Miniatures of",
        (Pt, "miniatures_of") => "Miniaturas de",
        (En, "map") => "Map",
        (Pt, "map") => "Mapa",
        (En, "open_map") => "Open map of category",
        (Pt, "open_map") => "Abrir mapa da categoria",
        (En, "history") => "History",
        (Pt, "history") => "História",
        (En, "address") => "Address",
        (Pt, "address") => "Endereço",
        (En, "map_category_title") => "Category Map",
        (Pt, "map_category_title") => "Mapa da categoria",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use wonders_model::CardText;

    fn pt_only_card() -> Card {
        Card::new(Category::VocabularyPt, 1, "telemovel").with_text(
            Language::Pt,
            CardText::new("Telemóvel", "Palavra portuguesa para celular."),
        )
    }

    #[test]
    fn requested_language_wins_when_present() {
        let card = Card::new(Category::Monuments, 1, "sao_jorge_castle")
            .with_text(Language::En, CardText::new("Castle", "short"))
            .with_text(Language::Pt, CardText::new("Castelo", "curto"));
        assert_eq!(text_for(&card, Language::Pt).title, "Castelo");
        assert_eq!(text_for(&card, Language::En).title, "Castle");
    }

    #[test]
    fn falls_back_en_then_pt() {
        let card = pt_only_card();
        // Requested en is missing, en leg is missing, pt leg hits.
        assert_eq!(text_for(&card, Language::En).title, "Telemóvel");
    }

    #[test]
    fn unknown_codes_resolve_through_the_chain() {
        let card = pt_only_card();
        assert_eq!(resolve_text(&card, "fr").title, "Telemóvel");
        assert_eq!(resolve_text(&card, "").title, "Telemóvel");
    }

    #[test]
    fn favoriting_is_blocked_for_english_deck_in_portuguese_only() {
        let en_vocab = Card::new(Category::VocabularyEn, 1, "ola")
            .with_text(Language::En, CardText::new("Hello", "A greeting."));
        assert!(!can_favorite(&en_vocab, Language::Pt));
        assert!(can_favorite(&en_vocab, Language::En));

        let pt_vocab = pt_only_card();
        assert!(can_favorite(&pt_vocab, Language::Pt));
        assert!(can_favorite(&pt_vocab, Language::En));
    }

    #[test]
    fn chrome_strings_fall_back_to_english_then_key() {
        assert_eq!(ui_text("history", Language::Pt), "História");
        assert_eq!(ui_text("history", Language::En), "History");
        assert_eq!(ui_text("no_such_key", Language::Pt), "no_such_key");
    }
}
