//! Projection of catalog cards onto flat map annotations.
//!
//! The map widget itself lives outside this crate; it consumes plain
//! `MapPoint` lists and knows nothing about cards or languages.

use wonders_model::{Card, Coordinate, Language};

use crate::localize;

/// Fallback center when a card set yields no points (downtown Lisbon).
pub const LISBON_CENTER: Coordinate = Coordinate::new(38.7223, -9.1393);

/// One pin on the external map widget.
#[derive(Debug, Clone, PartialEq)]
pub struct MapPoint {
    pub title: String,
    pub coordinate: Coordinate,
    /// Badge number carried through from the card.
    pub order: u8,
}

/// Expands a card into its map pins.
///
/// A card with a primary coordinate contributes one point plus one per
/// extra location, all under the same title and order; a card without
/// geo data contributes nothing. Coordinates are passed through
/// unchecked.
pub fn points_for(card: &Card, language: Language) -> Vec<MapPoint> {
    let title = localize::text_for(card, language).title.clone();
    let mut points = Vec::new();

    if let Some(primary) = card.coordinate {
        points.push(MapPoint { title: title.clone(), coordinate: primary, order: card.order });
    }
    for extra in &card.extra_locations {
        points.push(MapPoint { title: title.clone(), coordinate: *extra, order: card.order });
    }
    points
}

/// Flattens [`points_for`] over a card list, preserving input order.
pub fn points_for_cards<'a, I>(cards: I, language: Language) -> Vec<MapPoint>
where
    I: IntoIterator<Item = &'a Card>,
{
    cards
        .into_iter()
        .flat_map(|card| points_for(card, language))
        .collect()
}

/// Center the map on the first point, or on Lisbon when there is none.
pub fn map_center(points: &[MapPoint]) -> Coordinate {
    points.first().map(|p| p.coordinate).unwrap_or(LISBON_CENTER)
}

/// Destination string for the platform's directions launcher,
/// formatted as `latitude,longitude`.
pub fn directions_query(point: &MapPoint) -> String {
    format!("{},{}", point.coordinate.latitude, point.coordinate.longitude)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wonders_model::{Card, CardText, Category};

    fn card_with_extras() -> Card {
        Card::new(Category::Nature, 2, "viewpoints")
            .with_coordinate(38.7138, -9.1335)
            .with_extra_locations(&[(38.7181, -9.1336), (38.7132, -9.1393)])
            .with_text(Language::En, CardText::new("Viewpoints", "High points."))
    }

    #[test]
    fn primary_plus_extras() {
        let card = card_with_extras();
        let points = points_for(&card, Language::En);
        assert_eq!(points.len(), 3);
        assert!(points.iter().all(|p| p.title == "Viewpoints" && p.order == 2));
    }

    #[test]
    fn no_geo_data_no_points() {
        let card = Card::new(Category::Monuments, 8, "plus")
            .with_text(Language::En, CardText::new("More Monuments", "More!"));
        assert!(points_for(&card, Language::En).is_empty());
    }

    #[test]
    fn flattening_preserves_order() {
        let a = Card::new(Category::Churches, 1, "se")
            .with_coordinate(38.7108, -9.1332)
            .with_text(Language::En, CardText::new("Sé Cathedral", "Oldest."));
        let b = card_with_extras();
        let points = points_for_cards([&a, &b], Language::En);
        assert_eq!(points.len(), 4);
        assert_eq!(points[0].title, "Sé Cathedral");
        assert_eq!(points[1].title, "Viewpoints");
    }

    #[test]
    fn center_falls_back_to_lisbon() {
        assert_eq!(map_center(&[]), LISBON_CENTER);
        let points = points_for(&card_with_extras(), Language::En);
        assert_eq!(map_center(&points), points[0].coordinate);
    }

    #[test]
    fn directions_query_format() {
        let points = points_for(&card_with_extras(), Language::En);
        assert_eq!(directions_query(&points[0]), "38.7138,-9.1335");
    }
}
