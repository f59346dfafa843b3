//! The application state container.
//!
//! Every user interaction and every network completion is an [`Action`].
//! [`Store::dispatch`] applies it synchronously and, when the action needs the
//! network, returns an [`Effect`] for the caller to execute. The store itself
//! never performs I/O, so every transition is unit-testable.

use model::{Movie, MovieId, MoviePage, RatingEntry, RecommendationSet, Stars};
use tracing::debug;

use crate::catalog::{CatalogState, PageRequest};
use crate::filter_pipeline::FilterPipeline;
use crate::filters::{GenreFilter, TitleSearchFilter};
use crate::recommendations::RecommendationState;
use crate::selection::Selection;

/// Alert shown when a recommendation request fails
pub const RECOMMENDATION_ALERT: &str = "Failed to get recommendations";

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// "Load more" pressed, or the initial load
    LoadMore,
    PageLoaded { request: PageRequest, page: MoviePage },
    PageFailed { request: PageRequest, error: String },

    /// Movie card clicked
    ToggleSelect(Movie),
    SetRating { movie_id: MovieId, rating: Stars },
    Remove(MovieId),

    SetSearch(String),
    SetGenre(Option<String>),

    /// "Get My Recommendations" pressed
    RequestRecommendations,
    RecommendationsLoaded(RecommendationSet),
    RecommendationsFailed(String),
    HideRecommendations,
}

/// Network work requested by a transition
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    FetchPage(PageRequest),
    FetchRecommendations(Vec<RatingEntry>),
}

#[derive(Debug, Clone)]
pub struct Store {
    catalog: CatalogState,
    selection: Selection,
    recommendations: RecommendationState,
    search: String,
    genre: Option<String>,
}

impl Store {
    pub fn new(page_limit: u32) -> Self {
        Self {
            catalog: CatalogState::new(page_limit),
            selection: Selection::new(),
            recommendations: RecommendationState::default(),
            search: String::new(),
            genre: None,
        }
    }

    pub fn dispatch(&mut self, action: Action) -> Option<Effect> {
        debug!("dispatch {:?}", ActionName(&action));
        match action {
            Action::LoadMore => self.catalog.begin_load().map(Effect::FetchPage),
            Action::PageLoaded { request, page } => {
                self.catalog.complete_load(request, page);
                None
            }
            Action::PageFailed { request, error } => {
                debug!("Movies page {} failed: {}", request.page, error);
                self.catalog.fail_load(request);
                None
            }

            Action::ToggleSelect(movie) => {
                self.selection.toggle(movie);
                self.recommendations.hide();
                None
            }
            Action::SetRating { movie_id, rating } => {
                self.selection.set_rating(movie_id, rating);
                None
            }
            Action::Remove(movie_id) => {
                self.selection.remove(movie_id);
                self.recommendations.hide();
                None
            }

            Action::SetSearch(query) => {
                self.search = query;
                None
            }
            Action::SetGenre(genre) => {
                self.genre = genre.filter(|g| !g.trim().is_empty());
                None
            }

            Action::RequestRecommendations => {
                if !self.can_request_recommendations() {
                    debug!(
                        "Recommendation trigger disabled (selected {}, loading {})",
                        self.selection.len(),
                        self.recommendations.is_loading()
                    );
                    return None;
                }
                self.recommendations.begin();
                Some(Effect::FetchRecommendations(self.selection.payload()))
            }
            Action::RecommendationsLoaded(set) => {
                self.recommendations.complete(set);
                None
            }
            Action::RecommendationsFailed(error) => {
                debug!("Recommendation request failed: {}", error);
                self.recommendations.fail(RECOMMENDATION_ALERT);
                None
            }
            Action::HideRecommendations => {
                self.recommendations.hide();
                None
            }
        }
    }

    /// Whether the recommendation trigger is enabled
    pub fn can_request_recommendations(&self) -> bool {
        self.selection.is_ready() && !self.recommendations.is_loading()
    }

    /// Catalog movies after the search and genre filters
    pub fn visible_movies(&self) -> Vec<&Movie> {
        let mut pipeline = FilterPipeline::new().add_filter(TitleSearchFilter::new(&self.search));
        if let Some(genre) = &self.genre {
            pipeline = pipeline.add_filter(GenreFilter::new(genre));
        }
        pipeline.apply(self.catalog.movies())
    }

    pub fn take_alert(&mut self) -> Option<String> {
        self.recommendations.take_alert()
    }

    pub fn catalog(&self) -> &CatalogState {
        &self.catalog
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn recommendations(&self) -> &RecommendationState {
        &self.recommendations
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn genre(&self) -> Option<&str> {
        self.genre.as_deref()
    }
}

/// Logs actions by name without dumping whole pages of movies
struct ActionName<'a>(&'a Action);

impl std::fmt::Debug for ActionName<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self.0 {
            Action::LoadMore => "LoadMore",
            Action::PageLoaded { .. } => "PageLoaded",
            Action::PageFailed { .. } => "PageFailed",
            Action::ToggleSelect(_) => "ToggleSelect",
            Action::SetRating { .. } => "SetRating",
            Action::Remove(_) => "Remove",
            Action::SetSearch(_) => "SetSearch",
            Action::SetGenre(_) => "SetGenre",
            Action::RequestRecommendations => "RequestRecommendations",
            Action::RecommendationsLoaded(_) => "RecommendationsLoaded",
            Action::RecommendationsFailed(_) => "RecommendationsFailed",
            Action::HideRecommendations => "HideRecommendations",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(id: MovieId) -> Movie {
        Movie::new(id, format!("Movie {id}"))
    }

    fn store_with_recommendations() -> Store {
        let mut store = Store::new(50);
        for id in 1..=3 {
            store.dispatch(Action::ToggleSelect(movie(id)));
        }
        store.dispatch(Action::RequestRecommendations);
        store.dispatch(Action::RecommendationsLoaded(RecommendationSet {
            recommendations: vec![movie(10)],
            reason: Some("because".to_string()),
        }));
        store
    }

    #[test]
    fn test_trigger_disabled_below_three() {
        let mut store = Store::new(50);
        store.dispatch(Action::ToggleSelect(movie(1)));
        store.dispatch(Action::ToggleSelect(movie(2)));

        assert!(!store.can_request_recommendations());
        assert_eq!(store.dispatch(Action::RequestRecommendations), None);
        assert!(!store.recommendations().is_loading());
    }

    #[test]
    fn test_request_emits_payload_in_selection_order() {
        let mut store = Store::new(50);
        for (id, rating) in [(1, 5), (2, 4), (3, 3)] {
            store.dispatch(Action::ToggleSelect(movie(id)));
            store.dispatch(Action::SetRating { movie_id: id, rating });
        }

        let effect = store.dispatch(Action::RequestRecommendations);
        assert_eq!(
            effect,
            Some(Effect::FetchRecommendations(vec![
                RatingEntry { movie_id: 1, rating: 5 },
                RatingEntry { movie_id: 2, rating: 4 },
                RatingEntry { movie_id: 3, rating: 3 },
            ]))
        );
        assert!(store.recommendations().is_loading());
        assert!(!store.can_request_recommendations());
        assert_eq!(store.dispatch(Action::RequestRecommendations), None);
    }

    #[test]
    fn test_success_shows_result() {
        let store = store_with_recommendations();
        let recs = store.recommendations();
        assert!(recs.is_visible());
        assert!(!recs.is_loading());
        assert_eq!(recs.movies()[0].movie_id, 10);
        assert_eq!(recs.reason(), Some("because"));
    }

    #[test]
    fn test_toggle_and_remove_hide_results_but_rating_does_not() {
        let mut store = store_with_recommendations();

        store.dispatch(Action::SetRating { movie_id: 1, rating: 1 });
        assert!(store.recommendations().is_visible());

        store.dispatch(Action::ToggleSelect(movie(4)));
        assert!(!store.recommendations().is_visible());

        let mut store = store_with_recommendations();
        store.dispatch(Action::Remove(2));
        assert!(!store.recommendations().is_visible());
        assert_eq!(store.recommendations().movies().len(), 1);
    }

    #[test]
    fn test_failure_raises_alert_and_keeps_result() {
        let mut store = store_with_recommendations();
        store.dispatch(Action::RequestRecommendations);
        store.dispatch(Action::RecommendationsFailed("status 500".to_string()));

        assert!(!store.recommendations().is_loading());
        assert!(store.recommendations().is_visible());
        assert_eq!(store.recommendations().movies()[0].movie_id, 10);
        assert_eq!(store.take_alert().as_deref(), Some(RECOMMENDATION_ALERT));
        assert_eq!(store.take_alert(), None);
    }

    #[test]
    fn test_hide_keeps_result() {
        let mut store = store_with_recommendations();
        store.dispatch(Action::HideRecommendations);
        assert!(!store.recommendations().is_visible());
        assert_eq!(store.recommendations().movies().len(), 1);
    }

    #[test]
    fn test_load_more_cycle() {
        let mut store = Store::new(2);

        let Some(Effect::FetchPage(request)) = store.dispatch(Action::LoadMore) else {
            panic!("expected a page fetch");
        };
        assert_eq!(store.dispatch(Action::LoadMore), None);

        store.dispatch(Action::PageFailed {
            request,
            error: "status 500".to_string(),
        });
        assert!(store.catalog().has_more());
        assert_eq!(store.catalog().page(), 1);

        let Some(Effect::FetchPage(retry)) = store.dispatch(Action::LoadMore) else {
            panic!("expected a retry");
        };
        assert_eq!(retry.page, 1);
        store.dispatch(Action::PageLoaded {
            request: retry,
            page: MoviePage {
                movies: vec![movie(1), movie(2)],
                total: 2,
            },
        });
        assert!(!store.catalog().has_more());
        assert_eq!(store.dispatch(Action::LoadMore), None);
    }

    #[test]
    fn test_visible_movies_apply_search_and_genre() {
        let mut store = Store::new(10);
        let Some(Effect::FetchPage(request)) = store.dispatch(Action::LoadMore) else {
            panic!("expected a page fetch");
        };
        let mut matrix = Movie::new(1, "The Matrix");
        matrix.genres = Some("Action|Sci-Fi".to_string());
        let mut reloaded = Movie::new(2, "The Matrix Reloaded");
        reloaded.genres = Some("Action".to_string());
        store.dispatch(Action::PageLoaded {
            request,
            page: MoviePage {
                movies: vec![matrix, reloaded, movie(3)],
                total: 3,
            },
        });

        assert_eq!(store.visible_movies().len(), 3);

        store.dispatch(Action::SetSearch("matrix".to_string()));
        assert_eq!(store.visible_movies().len(), 2);

        store.dispatch(Action::SetGenre(Some("sci-fi".to_string())));
        let visible = store.visible_movies();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].movie_id, 1);

        store.dispatch(Action::SetGenre(Some(" ".to_string())));
        assert_eq!(store.genre(), None);
    }
}
