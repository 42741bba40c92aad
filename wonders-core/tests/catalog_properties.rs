//! Whole-catalog invariants exercised through the public API.

use std::collections::HashSet;

use wonders_core::catalog::Catalog;
use wonders_core::{localize, map, search};
use wonders_model::{Card, CardText, Category, Language, normalize};

#[test]
fn full_catalog_shape() {
    let catalog = Catalog::shared();
    assert_eq!(catalog.len(), 64);

    // Ids are 1..=64 in deck declaration order.
    let ids: Vec<u32> = catalog.cards().iter().map(|c| c.id.as_u32()).collect();
    assert_eq!(ids, (1..=64).collect::<Vec<_>>());

    let categories: Vec<Category> = catalog.cards().iter().map(|c| c.category).collect();
    let mut expected = Vec::new();
    for category in Category::ALL {
        let deck_len = catalog.cards_in(category).len();
        expected.extend(std::iter::repeat_n(category, deck_len));
    }
    assert_eq!(categories, expected);
}

#[test]
fn ids_are_unique_catalog_wide() {
    let catalog = Catalog::shared();
    let ids: HashSet<u32> = catalog.cards().iter().map(|c| c.id.as_u32()).collect();
    assert_eq!(ids.len(), catalog.len());
}

#[test]
fn rebuilding_yields_identical_ids() {
    let a = Catalog::build();
    let b = Catalog::build();
    assert_eq!(a.cards(), b.cards());
}

#[test]
fn orders_are_contiguous_from_one_within_each_category() {
    let catalog = Catalog::shared();
    for category in Category::ALL {
        let orders: Vec<u8> = catalog.cards_in(category).iter().map(|c| c.order).collect();
        assert_eq!(
            orders,
            (1..=orders.len() as u8).collect::<Vec<_>>(),
            "{category} deck has non-contiguous orders"
        );
    }
}

#[test]
fn sight_decks_hold_eight_cards_vocabulary_four() {
    let catalog = Catalog::shared();
    for category in Category::ALL {
        let expected = match category {
            Category::VocabularyPt | Category::VocabularyEn => 4,
            _ => 8,
        };
        assert_eq!(catalog.cards_in(category).len(), expected, "{category}");
    }
}

#[test]
fn every_card_resolves_in_every_language() {
    let catalog = Catalog::shared();
    for card in catalog.cards() {
        for code in ["en", "pt", "anything-else"] {
            let text = localize::resolve_text(card, code);
            assert!(!text.title.is_empty(), "card {} has blank title", card.id);
            assert!(
                !text.short_description.is_empty(),
                "card {} has blank short description",
                card.id
            );
        }
    }
}

#[test]
fn english_request_falls_back_to_portuguese() {
    let card = Card::new(Category::VocabularyPt, 1, "telemovel")
        .with_text(Language::Pt, CardText::new("Telemóvel", "Celular."));
    assert_eq!(localize::text_for(&card, Language::En).title, "Telemóvel");
}

#[test]
fn category_aliases_return_equal_decks() {
    let catalog = Catalog::shared();
    let english: Vec<u32> = catalog
        .cards_for_category("Churches")
        .iter()
        .map(|c| c.id.as_u32())
        .collect();
    let portuguese: Vec<u32> = catalog
        .cards_for_category("Igrejas")
        .iter()
        .map(|c| c.id.as_u32())
        .collect();
    assert_eq!(english, portuguese);
    assert!(!english.is_empty());
}

#[test]
fn vocabulary_decks_are_disjoint() {
    let catalog = Catalog::shared();
    let pt: HashSet<u32> = catalog
        .cards_for_category("Vocabulário")
        .iter()
        .map(|c| c.id.as_u32())
        .collect();
    let en: HashSet<u32> = catalog
        .cards_for_category("Vocabulary")
        .iter()
        .map(|c| c.id.as_u32())
        .collect();
    assert!(!pt.is_empty());
    assert!(!en.is_empty());
    assert!(pt.is_disjoint(&en));
}

#[test]
fn unknown_category_yields_empty_deck() {
    assert!(Catalog::shared().cards_for_category("Beaches").is_empty());
}

#[test]
fn normalization_is_idempotent() {
    for s in ["Vocabulário", "  IGREJAS  ", "São Jorge", "ginja", "", "Mosteiro dos Jerónimos"] {
        let once = normalize(s);
        assert_eq!(normalize(&once), once);
    }
}

#[test]
fn viewpoints_card_projects_three_points() {
    let catalog = Catalog::shared();
    let viewpoints = catalog
        .cards_in(Category::Nature)
        .into_iter()
        .find(|c| localize::text_for(c, Language::En).title == "Viewpoints")
        .unwrap();
    let points = map::points_for(viewpoints, Language::En);
    assert_eq!(points.len(), 4); // primary plus three miradouros
    assert!(points.iter().all(|p| p.title == "Viewpoints"));
    assert!(points.iter().all(|p| p.order == viewpoints.order));
}

#[test]
fn geo_less_catch_all_projects_nothing() {
    let catalog = Catalog::shared();
    let more_monuments = catalog.cards_in(Category::Monuments)[7];
    assert!(more_monuments.coordinate.is_none());
    assert!(map::points_for(more_monuments, Language::En).is_empty());
}

#[test]
fn empty_query_returns_empty_not_everything() {
    assert!(search::search(Catalog::shared(), "", Language::En).is_empty());
}

#[test]
fn ginja_search_finds_ginjinha() {
    let catalog = Catalog::shared();
    let hits = search::search(catalog, "ginja", Language::Pt);
    assert!(
        hits.iter()
            .any(|c| localize::text_for(c, Language::Pt).title == "Ginjinha")
    );
}

#[test]
fn vocabulary_cards_carry_only_their_own_language() {
    let catalog = Catalog::shared();
    for card in catalog.cards_in(Category::VocabularyPt) {
        let langs: Vec<Language> = card.translations.keys().copied().collect();
        assert_eq!(langs, [Language::Pt]);
    }
    for card in catalog.cards_in(Category::VocabularyEn) {
        let langs: Vec<Language> = card.translations.keys().copied().collect();
        assert_eq!(langs, [Language::En]);
    }
}

#[test]
fn primary_coordinate_present_wherever_extras_exist() {
    for card in Catalog::shared().cards() {
        if !card.extra_locations.is_empty() {
            assert!(card.coordinate.is_some(), "card {} extras without primary", card.id);
        }
    }
}
