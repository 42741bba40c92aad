//! Port to the external identity and favorites store.

use std::collections::HashSet;

use async_trait::async_trait;
use futures::stream::BoxStream;

use wonders_model::UserId;

use crate::error::BackendError;

/// The set of favorited card ids, as stored remotely (string ids).
pub type FavoriteSet = HashSet<String>;

/// Contract implemented by the identity/document-store integration.
///
/// The manager only needs these five capabilities; everything else
/// about the remote service (auth flows, document layout, transport)
/// stays behind this trait.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FavoritesBackend: Send + Sync + 'static {
    /// The signed-in user, or `None` when unauthenticated.
    fn current_user_id(&self) -> Option<UserId>;

    /// Live view of the user's favorite set. Each item is the complete
    /// remote set at that moment, not a delta. The stream ends when
    /// the subscription is torn down remotely.
    fn observe_favorites(&self, user: &UserId) -> BoxStream<'static, FavoriteSet>;

    async fn add_favorite(&self, user: &UserId, card_id: &str) -> Result<(), BackendError>;

    async fn remove_favorite(&self, user: &UserId, card_id: &str) -> Result<(), BackendError>;

    async fn clear_favorites(&self, user: &UserId) -> Result<(), BackendError>;
}
