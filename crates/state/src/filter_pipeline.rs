//! Chains catalog filters into one view.

use crate::traits::CatalogFilter;
use model::Movie;

/// Chains multiple filters together using the builder pattern.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(TitleSearchFilter::new("star"))
///     .add_filter(GenreFilter::new("Sci-Fi"));
///
/// let visible = pipeline.apply(catalog.movies());
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn CatalogFilter>>,
}

impl FilterPipeline {
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    pub fn add_filter(mut self, filter: impl CatalogFilter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Apply all filters in sequence
    pub fn apply<'a>(&self, movies: &'a [Movie]) -> Vec<&'a Movie> {
        let mut current: Vec<&Movie> = movies.iter().collect();
        for filter in &self.filters {
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current);
        }
        current
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::{GenreFilter, TitleSearchFilter};

    fn movies() -> Vec<Movie> {
        let mut alien = Movie::new(1, "Alien");
        alien.genres = Some("Horror|Sci-Fi".to_string());
        let mut aliens = Movie::new(2, "Aliens");
        aliens.genres = Some("Action|Sci-Fi".to_string());
        let mut heat = Movie::new(3, "Heat");
        heat.genre = Some("Crime".to_string());
        vec![alien, aliens, heat]
    }

    #[test]
    fn test_empty_pipeline() {
        let movies = movies();
        let pipeline = FilterPipeline::new();
        assert!(pipeline.is_empty());
        assert_eq!(pipeline.apply(&movies).len(), 3);
    }

    #[test]
    fn test_chained_filters() {
        let movies = movies();
        let pipeline = FilterPipeline::new()
            .add_filter(TitleSearchFilter::new("alien"))
            .add_filter(GenreFilter::new("action"));
        assert!(!pipeline.is_empty());

        let visible = pipeline.apply(&movies);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].movie_id, 2);
    }
}
