//! Core trait for catalog view filters.

use model::Movie;

/// Narrows the visible part of the catalog.
///
/// Filters never mutate the catalog; they take a list of borrowed movies and
/// return the subset that should be shown, preserving order.
pub trait CatalogFilter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    fn apply<'a>(&self, movies: Vec<&'a Movie>) -> Vec<&'a Movie>;
}
