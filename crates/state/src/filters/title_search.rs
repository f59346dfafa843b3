//! Case-insensitive title search, as typed into the header search box.

use crate::traits::CatalogFilter;
use model::Movie;

/// Keeps movies whose title contains the query, ignoring case.
///
/// An empty query keeps everything.
pub struct TitleSearchFilter {
    query: String,
}

impl TitleSearchFilter {
    pub fn new(query: &str) -> Self {
        Self {
            query: query.to_lowercase(),
        }
    }
}

impl CatalogFilter for TitleSearchFilter {
    fn name(&self) -> &str {
        "TitleSearchFilter"
    }

    fn apply<'a>(&self, movies: Vec<&'a Movie>) -> Vec<&'a Movie> {
        if self.query.is_empty() {
            return movies;
        }
        movies
            .into_iter()
            .filter(|movie| movie.title.to_lowercase().contains(&self.query))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_search_ignores_case() {
        let movies = vec![
            Movie::new(1, "The Matrix"),
            Movie::new(2, "Matrix Reloaded"),
            Movie::new(3, "Heat"),
        ];
        let refs: Vec<&Movie> = movies.iter().collect();

        let filtered = TitleSearchFilter::new("MATRIX").apply(refs.clone());
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].movie_id, 1);
        assert_eq!(filtered[1].movie_id, 2);

        assert_eq!(TitleSearchFilter::new("").apply(refs).len(), 3);
    }

    #[test]
    fn test_title_search_keeps_surrounding_spaces() {
        let movies = vec![Movie::new(1, "The Matrix"), Movie::new(2, "Matrix")];
        let refs: Vec<&Movie> = movies.iter().collect();

        let filtered = TitleSearchFilter::new(" matrix").apply(refs);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].movie_id, 1);
    }
}
