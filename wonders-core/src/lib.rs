//! # Wonders Core
//!
//! Core library for the Wonders Lisbon guide, providing the content
//! catalog, localization resolution, search, map projection, and
//! per-user favorites synchronization.
//!
//! ## Overview
//!
//! `wonders-core` is the foundation of the Wonders app:
//!
//! - **Catalog**: the immutable, hand-authored collection of cards,
//!   built once at startup and shared read-only
//! - **Localization**: translation fallback resolution and the string
//!   normalization used for category and search matching
//! - **Search**: linear substring scan over localized card text
//! - **Map projection**: flat point lists derived from card geo data,
//!   handed to an external map widget
//! - **Favorites**: optimistic local favorites mirrored against an
//!   external per-user document store through a backend port
//!
//! The catalog, localization, search, and map layers are synchronous
//! and side-effect free; only the favorites manager talks to the
//! outside world.
//!
//! ## Example
//!
//! ```
//! use wonders_core::catalog::Catalog;
//! use wonders_core::localize;
//! use wonders_model::Language;
//!
//! let catalog = Catalog::shared();
//! for card in catalog.cards_for_category("Igrejas") {
//!     let text = localize::text_for(card, Language::Pt);
//!     println!("{} {}", card.order, text.title);
//! }
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(missing_docs)]

/// Immutable card catalog and category lookup
pub mod catalog;

/// Error types shared across the crate
pub mod error;

/// Per-user favorites state and the external backend port
pub mod favorites;

/// Translation fallback resolution and display policies
pub mod localize;

/// Point-annotation derivation for the external map widget
pub mod map;

/// Linear substring search over localized card text
pub mod search;

pub use error::{BackendError, Result};
pub use favorites::{FavoriteSet, FavoritesBackend, FavoritesManager, SyncState};

// Re-exported so downstream crates get the model without a second
// explicit dependency.
pub use wonders_model as model;
