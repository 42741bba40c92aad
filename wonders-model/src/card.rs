use std::collections::BTreeMap;

use crate::category::Category;
use crate::geo::Coordinate;
use crate::ids::CardId;
use crate::language::Language;

/// Localized text bundle for one card in one language.
///
/// `title` and `short_description` are always present; the long-form
/// fields depend on how much content was authored for the card (the
/// catch-all "More …" cards typically carry only the short text, while
/// vocabulary cards add usage and pronunciation notes instead of an
/// address).
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CardText {
    pub title: String,
    pub short_description: String,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub description: Option<String>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub history: Option<String>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub highlights: Option<String>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub address: Option<String>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub usage_example: Option<String>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub pronunciation: Option<String>,
}

impl CardText {
    pub fn new(title: impl Into<String>, short_description: impl Into<String>) -> Self {
        CardText {
            title: title.into(),
            short_description: short_description.into(),
            ..CardText::default()
        }
    }
}

/// One catalog record: a point of interest or a vocabulary entry.
///
/// Cards are immutable after the catalog is built; `id` is assigned by
/// the builder, everything else is hand-authored content.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Card {
    /// Catalog-wide unique id, assigned at build time.
    pub id: CardId,
    /// Bundled image asset name; an opaque identifier, not a URL.
    pub image: String,
    pub category: Category,
    /// 1-based position within the category; the visible badge number.
    pub order: u8,
    /// Primary site, when the card maps to a physical place.
    pub coordinate: Option<Coordinate>,
    /// Further sites for cards covering several locations at once
    /// (e.g. the viewpoints card).
    pub extra_locations: Vec<Coordinate>,
    /// Localized content. Never empty; map order is `Language`
    /// declaration order, which the resolver's last-resort fallback
    /// relies on.
    pub translations: BTreeMap<Language, CardText>,
}

impl Card {
    /// Starts an un-numbered card; the catalog builder assigns the
    /// global id.
    pub fn new(category: Category, order: u8, image: &str) -> Self {
        Card {
            id: CardId::new(0),
            image: image.to_string(),
            category,
            order,
            coordinate: None,
            extra_locations: Vec::new(),
            translations: BTreeMap::new(),
        }
    }

    pub fn with_coordinate(mut self, latitude: f64, longitude: f64) -> Self {
        self.coordinate = Some(Coordinate::new(latitude, longitude));
        self
    }

    pub fn with_extra_locations(mut self, locations: &[(f64, f64)]) -> Self {
        self.extra_locations = locations
            .iter()
            .map(|(lat, lon)| Coordinate::new(*lat, *lon))
            .collect();
        self
    }

    pub fn with_text(mut self, language: Language, text: CardText) -> Self {
        self.translations.insert(language, text);
        self
    }

    /// Whether any point can be derived for the map widget.
    pub fn has_locations(&self) -> bool {
        self.coordinate.is_some() || !self.extra_locations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translations_iterate_english_first() {
        let card = Card::new(Category::Monuments, 1, "sao_jorge_castle")
            .with_text(Language::Pt, CardText::new("Castelo", "curto"))
            .with_text(Language::En, CardText::new("Castle", "short"));
        let langs: Vec<_> = card.translations.keys().copied().collect();
        assert_eq!(langs, vec![Language::En, Language::Pt]);
    }

    #[test]
    fn coordinate_is_all_or_nothing() {
        let bare = Card::new(Category::Popular, 8, "plus_popular");
        assert!(bare.coordinate.is_none());
        assert!(!bare.has_locations());

        let sited = bare.clone().with_coordinate(38.7223, -9.1393);
        let coord = sited.coordinate.unwrap();
        assert_eq!(coord.latitude, 38.7223);
        assert_eq!(coord.longitude, -9.1393);
    }
}
