//! # Discovery Session
//!
//! Runs the store's effects against the backend:
//! 1. Dispatch the user's action into the store
//! 2. If the store asks for network work, call the `MovieApi`
//! 3. Dispatch the completion (success or failure) back into the store
//!
//! The store sits behind a plain mutex that is never held across an await,
//! so a session can be cloned into several tasks. Overlapping calls are only
//! coordinated by the store's in-flight and loading flags.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Instant;

use api_client::MovieApi;
use model::{MovieId, Stars};
use state::{Action, Effect, Store};
use thiserror::Error;
use tracing::{error, info};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SessionError {
    #[error("Movie {0} is not in the loaded catalog")]
    UnknownMovie(MovieId),
}

/// Result of a "load more" press
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded { added: usize, has_more: bool },
    /// A page is already in flight or the catalog is exhausted
    Skipped,
    Failed(String),
}

/// Result of a "get recommendations" press
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecommendOutcome {
    Delivered { count: usize },
    /// Fewer than three movies selected, or a request is already loading
    Disabled { remaining: usize },
    Failed(String),
}

/// Dispatches `on_drop` unless the request completed normally.
///
/// Keeps the in-flight and loading flags from sticking when a request
/// future is dropped before it resolves.
struct CompletionGuard<'a> {
    store: &'a Mutex<Store>,
    on_drop: Option<Action>,
}

impl<'a> CompletionGuard<'a> {
    fn new(store: &'a Mutex<Store>, on_drop: Action) -> Self {
        Self {
            store,
            on_drop: Some(on_drop),
        }
    }

    fn complete(mut self, action: Action) {
        self.on_drop = None;
        lock(self.store).dispatch(action);
    }
}

impl Drop for CompletionGuard<'_> {
    fn drop(&mut self) {
        if let Some(action) = self.on_drop.take() {
            lock(self.store).dispatch(action);
        }
    }
}

fn lock(store: &Mutex<Store>) -> MutexGuard<'_, Store> {
    store.lock().unwrap_or_else(PoisonError::into_inner)
}

#[derive(Clone)]
pub struct DiscoverySession {
    api: Arc<dyn MovieApi>,
    store: Arc<Mutex<Store>>,
}

impl DiscoverySession {
    pub fn new(api: Arc<dyn MovieApi>, page_limit: u32) -> Self {
        Self {
            api,
            store: Arc::new(Mutex::new(Store::new(page_limit))),
        }
    }

    fn dispatch(&self, action: Action) -> Option<Effect> {
        lock(&self.store).dispatch(action)
    }

    /// Read the current state
    pub fn read<R>(&self, f: impl FnOnce(&Store) -> R) -> R {
        f(&*lock(&self.store))
    }

    /// Fetch the next catalog page, if one may be fetched.
    pub async fn load_more(&self) -> LoadOutcome {
        let Some(Effect::FetchPage(request)) = self.dispatch(Action::LoadMore) else {
            return LoadOutcome::Skipped;
        };
        let guard = CompletionGuard::new(
            &self.store,
            Action::PageFailed {
                request,
                error: "request dropped".to_string(),
            },
        );
        let start_time = Instant::now();

        match self.api.fetch_movies(request.page, request.limit).await {
            Ok(page) => {
                let before = self.read(|s| s.catalog().movies().len());
                guard.complete(Action::PageLoaded { request, page });
                let (after, has_more) =
                    self.read(|s| (s.catalog().movies().len(), s.catalog().has_more()));
                info!(
                    "Loaded movies page {} in {:.2?}: {} new, {} total, more: {}",
                    request.page,
                    start_time.elapsed(),
                    after - before,
                    after,
                    has_more
                );
                LoadOutcome::Loaded {
                    added: after - before,
                    has_more,
                }
            }
            Err(e) => {
                error!("Failed to load movies: {}", e);
                let message = e.to_string();
                guard.complete(Action::PageFailed {
                    request,
                    error: message.clone(),
                });
                LoadOutcome::Failed(message)
            }
        }
    }

    /// Toggle a catalog movie in or out of the selection.
    ///
    /// Returns whether the movie is selected afterwards.
    pub fn toggle_select(&self, movie_id: MovieId) -> Result<bool, SessionError> {
        let mut store = lock(&self.store);
        let movie = store
            .catalog()
            .find(movie_id)
            .cloned()
            .ok_or(SessionError::UnknownMovie(movie_id))?;
        store.dispatch(Action::ToggleSelect(movie));
        Ok(store.selection().is_selected(movie_id))
    }

    /// Returns `false` when the movie is not selected (nothing changes)
    pub fn set_rating(&self, movie_id: MovieId, rating: Stars) -> bool {
        let mut store = lock(&self.store);
        if !store.selection().is_selected(movie_id) {
            return false;
        }
        store.dispatch(Action::SetRating { movie_id, rating });
        true
    }

    pub fn remove(&self, movie_id: MovieId) -> bool {
        let mut store = lock(&self.store);
        let selected = store.selection().is_selected(movie_id);
        store.dispatch(Action::Remove(movie_id));
        selected
    }

    pub fn set_search(&self, query: impl Into<String>) {
        self.dispatch(Action::SetSearch(query.into()));
    }

    pub fn set_genre(&self, genre: Option<String>) {
        self.dispatch(Action::SetGenre(genre));
    }

    pub fn hide_recommendations(&self) {
        self.dispatch(Action::HideRecommendations);
    }

    /// Pending user-visible alert, cleared once taken
    pub fn take_alert(&self) -> Option<String> {
        lock(&self.store).take_alert()
    }

    /// Request recommendations for the current selection.
    pub async fn request_recommendations(&self) -> RecommendOutcome {
        let Some(Effect::FetchRecommendations(payload)) =
            self.dispatch(Action::RequestRecommendations)
        else {
            let remaining = self.read(|s| s.selection().remaining_needed());
            return RecommendOutcome::Disabled { remaining };
        };
        let guard = CompletionGuard::new(
            &self.store,
            Action::RecommendationsFailed("request dropped".to_string()),
        );
        let start_time = Instant::now();
        info!("Requesting recommendations from {} rated movies", payload.len());

        match self.api.fetch_recommendations(&payload).await {
            Ok(set) => {
                let count = set.recommendations.len();
                guard.complete(Action::RecommendationsLoaded(set));
                info!(
                    "Received {} recommendations in {:.2?}",
                    count,
                    start_time.elapsed()
                );
                RecommendOutcome::Delivered { count }
            }
            Err(e) => {
                error!("Recommendation error: {}", e);
                let message = e.to_string();
                guard.complete(Action::RecommendationsFailed(message.clone()));
                RecommendOutcome::Failed(message)
            }
        }
    }
}
