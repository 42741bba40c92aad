//! UI-facing snapshot of the model surface.
//! Prefer importing from this module instead of individual tree nodes
//! when working in presentation layers.

pub use super::card::{Card, CardText};
pub use super::category::Category;
pub use super::error::{ModelError, Result as ModelResult};
pub use super::geo::Coordinate;
pub use super::ids::{CardId, UserId};
pub use super::language::Language;
pub use super::text::normalize;
