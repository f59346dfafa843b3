use crate::traits::CatalogFilter;
use model::Movie;

/// Keeps movies tagged with the given genre (case-insensitive exact match
/// against any pipe-delimited segment).
pub struct GenreFilter {
    genre: String,
}

impl GenreFilter {
    pub fn new(genre: &str) -> Self {
        Self {
            genre: genre.trim().to_string(),
        }
    }
}

impl CatalogFilter for GenreFilter {
    fn name(&self) -> &str {
        "GenreFilter"
    }

    fn apply<'a>(&self, movies: Vec<&'a Movie>) -> Vec<&'a Movie> {
        movies
            .into_iter()
            .filter(|movie| movie.has_genre(&self.genre))
            .collect()
    }
}
