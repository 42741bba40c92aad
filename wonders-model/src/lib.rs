//! Core data model definitions shared across Wonders crates.
#![allow(missing_docs)]

pub mod card;
pub mod category;
pub mod error;
pub mod geo;
pub mod ids;
pub mod language;
pub mod prelude;
pub mod text;

// Intentionally curated re-exports for downstream consumers.
pub use card::{Card, CardText};
pub use category::Category;
pub use error::{ModelError, Result as ModelResult};
pub use geo::Coordinate;
pub use ids::{CardId, UserId};
pub use language::Language;
pub use text::normalize;
