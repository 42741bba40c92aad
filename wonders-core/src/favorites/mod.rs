//! Per-user favorite tracking, synchronized with the external store.
//!
//! The manager keeps an optimistic local set: toggles mutate it
//! immediately and issue a fire-and-forget write to the backend. The
//! backend's live subscription is the source of truth; each delivery
//! replaces the local set wholesale. A rapid double-toggle racing an
//! in-flight write can therefore disagree with remote state until the
//! next delivery. We do not reconcile that race.

mod backend;

pub use backend::{FavoriteSet, FavoritesBackend};
#[cfg(test)]
pub(crate) use backend::MockFavoritesBackend;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use futures::StreamExt;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use wonders_model::{Card, CardId, Language, UserId};

use crate::catalog::Catalog;
use crate::localize;

/// Where the manager stands relative to the remote store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncState {
    /// No signed-in user; no subscription, empty set.
    Unauthenticated,
    /// Subscription established, first delivery not yet received.
    Loading,
    /// Local set mirrors the most recent remote delivery.
    Synced,
}

struct Inner {
    state: SyncState,
    user: Option<UserId>,
    favorites: FavoriteSet,
}

/// Tracks the signed-in user's favorite card ids.
///
/// UI code goes through [`toggle_favorite`](Self::toggle_favorite),
/// [`is_favorite`](Self::is_favorite) and
/// [`clear_all`](Self::clear_all); the local set is never handed out
/// mutably.
pub struct FavoritesManager {
    backend: Arc<dyn FavoritesBackend>,
    inner: Arc<Mutex<Inner>>,
    subscription: Mutex<Option<JoinHandle<()>>>,
}

impl FavoritesManager {
    pub fn new(backend: Arc<dyn FavoritesBackend>) -> Self {
        FavoritesManager {
            backend,
            inner: Arc::new(Mutex::new(Inner {
                state: SyncState::Unauthenticated,
                user: None,
                favorites: FavoriteSet::new(),
            })),
            subscription: Mutex::new(None),
        }
    }

    /// Binds the manager to the currently signed-in user and starts
    /// the live subscription. Any previous subscription is torn down
    /// first so a stale listener can never deliver another user's set
    /// into this session. With no signed-in user this resets to
    /// [`SyncState::Unauthenticated`].
    pub fn attach(&self) {
        self.detach();

        let Some(user) = self.backend.current_user_id() else {
            return;
        };
        debug!(user = %user.0, "subscribing to favorites");

        {
            let mut inner = lock(&self.inner);
            inner.state = SyncState::Loading;
            inner.user = Some(user.clone());
        }

        let mut stream = self.backend.observe_favorites(&user);
        let inner = Arc::clone(&self.inner);
        let handle = tokio::spawn(async move {
            while let Some(set) = stream.next().await {
                let mut inner = lock(&inner);
                inner.favorites = set;
                inner.state = SyncState::Synced;
            }
        });
        *lock(&self.subscription) = Some(handle);
    }

    /// Tears down the subscription and clears all local state. Called
    /// on sign-out and before re-attaching for a different user.
    pub fn detach(&self) {
        if let Some(handle) = lock(&self.subscription).take() {
            handle.abort();
        }
        let mut inner = lock(&self.inner);
        inner.state = SyncState::Unauthenticated;
        inner.user = None;
        inner.favorites.clear();
    }

    pub fn state(&self) -> SyncState {
        lock(&self.inner).state
    }

    pub fn is_favorite(&self, id: CardId) -> bool {
        lock(&self.inner).favorites.contains(id.as_str().as_str())
    }

    /// Snapshot of the current local set.
    pub fn favorites(&self) -> FavoriteSet {
        lock(&self.inner).favorites.clone()
    }

    /// Flips membership of `id` in the local set, then issues the
    /// matching write to the backend without awaiting it. Write
    /// failures are logged and dropped; the next subscription delivery
    /// corrects any divergence. A no-op when unauthenticated.
    pub fn toggle_favorite(&self, id: CardId) {
        let key = id.as_str();
        let (user, added) = {
            let mut inner = lock(&self.inner);
            let Some(user) = inner.user.clone() else {
                debug!(card = %key, "favorite toggle ignored while signed out");
                return;
            };
            let added = inner.favorites.insert(key.clone());
            if !added {
                inner.favorites.remove(&key);
            }
            (user, added)
        };

        let backend = Arc::clone(&self.backend);
        tokio::spawn(async move {
            let result = if added {
                backend.add_favorite(&user, &key).await
            } else {
                backend.remove_favorite(&user, &key).await
            };
            if let Err(err) = result {
                warn!(card = %key, %err, "favorite write failed");
            }
        });
    }

    /// Empties the local set and issues a clear to the backend. A
    /// no-op when unauthenticated.
    pub fn clear_all(&self) {
        let user = {
            let mut inner = lock(&self.inner);
            let Some(user) = inner.user.clone() else {
                return;
            };
            inner.favorites.clear();
            user
        };

        let backend = Arc::clone(&self.backend);
        tokio::spawn(async move {
            if let Err(err) = backend.clear_favorites(&user).await {
                warn!(%err, "favorite clear failed");
            }
        });
    }

    /// Resolves the current favorite set against the catalog, sorted
    /// by global id. Cards that cannot be favorited under `language`
    /// are dropped, as are ids that no longer resolve to a card.
    pub fn favorite_cards<'a>(&self, catalog: &'a Catalog, language: Language) -> Vec<&'a Card> {
        let favorites = lock(&self.inner).favorites.clone();
        let mut cards: Vec<&Card> = catalog
            .cards()
            .iter()
            .filter(|card| favorites.contains(card.id.as_str().as_str()))
            .filter(|card| localize::can_favorite(card, language))
            .collect();
        cards.sort_by_key(|card| card.id.as_u32());
        cards
    }

    /// One share-sheet line per favorited card, in id order.
    pub fn share_lines(&self, catalog: &Catalog, language: Language) -> Vec<String> {
        self.favorite_cards(catalog, language)
            .into_iter()
            .map(|card| format!("• {}", localize::text_for(card, language).title))
            .collect()
    }
}

impl Drop for FavoritesManager {
    fn drop(&mut self) {
        if let Some(handle) = lock(&self.subscription).take() {
            handle.abort();
        }
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BackendError;
    use futures::stream;
    use mockall::predicate::eq;
    use tokio_stream::wrappers::ReceiverStream;

    fn user() -> UserId {
        UserId("user-1".into())
    }

    fn authed_backend() -> MockFavoritesBackend {
        let mut backend = MockFavoritesBackend::new();
        backend.expect_current_user_id().returning(|| Some(user()));
        backend
    }

    #[tokio::test]
    async fn toggle_pair_restores_membership() {
        let mut backend = authed_backend();
        backend
            .expect_observe_favorites()
            .returning(|_| Box::pin(stream::pending()));
        backend.expect_add_favorite().returning(|_, _| Ok(()));
        backend.expect_remove_favorite().returning(|_, _| Ok(()));

        let manager = FavoritesManager::new(Arc::new(backend));
        manager.attach();

        let id = CardId::new(5);
        assert!(!manager.is_favorite(id));
        manager.toggle_favorite(id);
        assert!(manager.is_favorite(id));
        manager.toggle_favorite(id);
        assert!(!manager.is_favorite(id));
    }

    #[tokio::test]
    async fn unauthenticated_toggle_is_a_no_op() {
        let mut backend = MockFavoritesBackend::new();
        backend.expect_current_user_id().returning(|| None);
        backend.expect_add_favorite().times(0);
        backend.expect_remove_favorite().times(0);

        let manager = FavoritesManager::new(Arc::new(backend));
        manager.attach();

        assert_eq!(manager.state(), SyncState::Unauthenticated);
        manager.toggle_favorite(CardId::new(5));
        assert!(!manager.is_favorite(CardId::new(5)));
        assert!(manager.favorites().is_empty());
    }

    #[tokio::test]
    async fn subscription_delivery_replaces_local_set() {
        let (tx, rx) = tokio::sync::mpsc::channel(4);
        let mut backend = authed_backend();
        let mut rx = Some(rx);
        backend.expect_observe_favorites().return_once(move |_| {
            Box::pin(ReceiverStream::new(rx.take().unwrap()))
        });

        let manager = FavoritesManager::new(Arc::new(backend));
        manager.attach();
        assert_eq!(manager.state(), SyncState::Loading);

        tx.send(FavoriteSet::from(["3".to_string(), "7".to_string()]))
            .await
            .unwrap();
        // Let the subscription task run.
        tokio::task::yield_now().await;

        assert_eq!(manager.state(), SyncState::Synced);
        assert!(manager.is_favorite(CardId::new(3)));
        assert!(manager.is_favorite(CardId::new(7)));
        assert!(!manager.is_favorite(CardId::new(5)));
    }

    #[tokio::test]
    async fn detach_clears_state_and_set() {
        let mut backend = authed_backend();
        backend
            .expect_observe_favorites()
            .returning(|_| Box::pin(stream::pending()));
        backend.expect_add_favorite().returning(|_, _| Ok(()));

        let manager = FavoritesManager::new(Arc::new(backend));
        manager.attach();
        manager.toggle_favorite(CardId::new(1));
        assert!(manager.is_favorite(CardId::new(1)));

        manager.detach();
        assert_eq!(manager.state(), SyncState::Unauthenticated);
        assert!(manager.favorites().is_empty());
    }

    #[tokio::test]
    async fn failed_write_keeps_optimistic_state() {
        let mut backend = authed_backend();
        backend
            .expect_observe_favorites()
            .returning(|_| Box::pin(stream::pending()));
        backend
            .expect_add_favorite()
            .with(eq(user()), eq("9"))
            .returning(|_, _| Err(BackendError::Unavailable("offline".into())));

        let manager = FavoritesManager::new(Arc::new(backend));
        manager.attach();
        manager.toggle_favorite(CardId::new(9));
        tokio::task::yield_now().await;

        // Still favorited locally; the next delivery would correct it.
        assert!(manager.is_favorite(CardId::new(9)));
    }

    #[tokio::test]
    async fn clear_all_empties_local_set() {
        let mut backend = authed_backend();
        backend
            .expect_observe_favorites()
            .returning(|_| Box::pin(stream::pending()));
        backend.expect_add_favorite().returning(|_, _| Ok(()));
        backend
            .expect_clear_favorites()
            .with(eq(user()))
            .returning(|_| Ok(()));

        let manager = FavoritesManager::new(Arc::new(backend));
        manager.attach();
        manager.toggle_favorite(CardId::new(2));
        manager.clear_all();
        assert!(manager.favorites().is_empty());
    }

    #[tokio::test]
    async fn favorite_cards_sorted_and_filtered() {
        let mut backend = authed_backend();
        let english_vocab_id = Catalog::shared()
            .cards_in(wonders_model::Category::VocabularyEn)[0]
            .id;
        let set: FavoriteSet =
            ["7".to_string(), "2".to_string(), english_vocab_id.as_str()]
                .into_iter()
                .collect();
        let mut delivery = Some(set);
        backend.expect_observe_favorites().return_once(move |_| {
            Box::pin(stream::iter(delivery.take()).chain(stream::pending()))
        });

        let manager = FavoritesManager::new(Arc::new(backend));
        manager.attach();
        tokio::task::yield_now().await;

        let catalog = Catalog::shared();
        let en = manager.favorite_cards(catalog, Language::En);
        let ids: Vec<u32> = en.iter().map(|c| c.id.as_u32()).collect();
        assert_eq!(ids[..2], [2, 7]);
        assert_eq!(en.len(), 3);

        // The English phrase deck is read-only for pt users, so it
        // drops out of their favorites view.
        let pt = manager.favorite_cards(catalog, Language::Pt);
        assert_eq!(pt.len(), 2);
    }

    #[tokio::test]
    async fn share_lines_are_bulleted_titles() {
        let mut backend = authed_backend();
        let mut delivery = Some(FavoriteSet::from(["1".to_string()]));
        backend.expect_observe_favorites().return_once(move |_| {
            Box::pin(stream::iter(delivery.take()).chain(stream::pending()))
        });

        let manager = FavoritesManager::new(Arc::new(backend));
        manager.attach();
        tokio::task::yield_now().await;

        let lines = manager.share_lines(Catalog::shared(), Language::En);
        assert_eq!(lines, vec!["• São Jorge Castle".to_string()]);
    }
}
