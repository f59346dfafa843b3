//! Client-side state for the ReelPicks front-end.
//!
//! This crate provides:
//! - `CatalogState`: paginated catalog with an in-flight guard
//! - `Selection`: the user's rated picks, deduplicated by movie id
//! - `RecommendationState`: last result, visibility, loading and alert flags
//! - `Store`: the container tying them together behind `Action`s
//! - `CatalogFilter` and `FilterPipeline` for search/genre views
//!
//! ## Example Usage
//! ```ignore
//! use state::{Action, Effect, Store};
//!
//! let mut store = Store::new(50);
//! if let Some(Effect::FetchPage(request)) = store.dispatch(Action::LoadMore) {
//!     let page = client.fetch_movies(request.page, request.limit).await?;
//!     store.dispatch(Action::PageLoaded { request, page });
//! }
//! ```

pub mod catalog;
pub mod filter_pipeline;
pub mod filters;
pub mod recommendations;
pub mod selection;
pub mod store;
pub mod traits;

// Re-export main types
pub use catalog::{CatalogPhase, CatalogState, PageRequest};
pub use filter_pipeline::FilterPipeline;
pub use recommendations::RecommendationState;
pub use selection::Selection;
pub use store::{Action, Effect, RECOMMENDATION_ALERT, Store};
pub use traits::CatalogFilter;
