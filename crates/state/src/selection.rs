//! The user's rated selection.
//!
//! Entries keep insertion order, which is also the order of the
//! recommendation payload. At most one entry exists per movie id.

use model::{DEFAULT_RATING, MIN_SELECTION, Movie, MovieId, RatingEntry, SelectedMovie, Stars};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    entries: Vec<SelectedMovie>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the movie with the default rating, or remove it if already selected.
    ///
    /// Returns `true` if the movie is selected afterwards.
    pub fn toggle(&mut self, movie: Movie) -> bool {
        if self.remove(movie.movie_id) {
            false
        } else {
            self.entries.push(SelectedMovie::new(movie));
            true
        }
    }

    /// Update the rating of a selected movie; unknown ids are ignored.
    ///
    /// The value is passed through as-is.
    pub fn set_rating(&mut self, movie_id: MovieId, rating: Stars) -> bool {
        match self.entries.iter_mut().find(|e| e.movie_id() == movie_id) {
            Some(entry) => {
                entry.rating = rating;
                true
            }
            None => false,
        }
    }

    /// Returns `true` if an entry was removed
    pub fn remove(&mut self, movie_id: MovieId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.movie_id() != movie_id);
        self.entries.len() != before
    }

    pub fn is_selected(&self, movie_id: MovieId) -> bool {
        self.entries.iter().any(|e| e.movie_id() == movie_id)
    }

    /// Rating of a selected movie, or the default for unselected ones
    pub fn rating_of(&self, movie_id: MovieId) -> Stars {
        self.entries
            .iter()
            .find(|e| e.movie_id() == movie_id)
            .map(|e| e.rating)
            .unwrap_or(DEFAULT_RATING)
    }

    pub fn entries(&self) -> &[SelectedMovie] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_ready(&self) -> bool {
        self.entries.len() >= MIN_SELECTION
    }

    /// How many more movies must be selected before recommending
    pub fn remaining_needed(&self) -> usize {
        MIN_SELECTION.saturating_sub(self.entries.len())
    }

    /// The recommendation payload, in insertion order
    pub fn payload(&self) -> Vec<RatingEntry> {
        self.entries.iter().map(SelectedMovie::to_entry).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(id: MovieId) -> Movie {
        Movie::new(id, format!("Movie {id}"))
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut selection = Selection::new();

        assert!(selection.toggle(movie(1)));
        assert!(selection.is_selected(1));
        assert_eq!(selection.rating_of(1), 3);

        assert!(!selection.toggle(movie(1)));
        assert!(!selection.is_selected(1));
        assert!(selection.is_empty());
    }

    #[test]
    fn test_toggle_sequence_never_duplicates() {
        let mut selection = Selection::new();
        for id in [1, 2, 1, 3, 2, 2, 4, 1, 3, 3, 5] {
            selection.toggle(movie(id));
        }

        let mut ids: Vec<MovieId> = selection.entries().iter().map(|e| e.movie_id()).collect();
        let count = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), count);
        assert_eq!(ids, vec![1, 2, 4, 5]);
    }

    #[test]
    fn test_set_rating_on_unselected_is_noop() {
        let mut selection = Selection::new();
        selection.toggle(movie(1));
        let before = selection.clone();

        assert!(!selection.set_rating(99, 5));
        assert_eq!(selection, before);
        assert_eq!(selection.rating_of(99), 3);
    }

    #[test]
    fn test_set_rating_passes_value_through() {
        let mut selection = Selection::new();
        selection.toggle(movie(1));

        assert!(selection.set_rating(1, 5));
        assert_eq!(selection.rating_of(1), 5);

        selection.set_rating(1, 9);
        assert_eq!(selection.rating_of(1), 9);
    }

    #[test]
    fn test_payload_keeps_insertion_order() {
        let mut selection = Selection::new();
        for (id, stars) in [(1, 5), (2, 4), (3, 3)] {
            selection.toggle(movie(id));
            selection.set_rating(id, stars);
        }

        assert_eq!(
            selection.payload(),
            vec![
                RatingEntry { movie_id: 1, rating: 5 },
                RatingEntry { movie_id: 2, rating: 4 },
                RatingEntry { movie_id: 3, rating: 3 },
            ]
        );
    }

    #[test]
    fn test_remaining_needed() {
        let mut selection = Selection::new();
        assert_eq!(selection.remaining_needed(), 3);
        selection.toggle(movie(1));
        selection.toggle(movie(2));
        assert_eq!(selection.remaining_needed(), 1);
        assert!(!selection.is_ready());
        selection.toggle(movie(3));
        selection.toggle(movie(4));
        assert_eq!(selection.remaining_needed(), 0);
        assert!(selection.is_ready());
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut selection = Selection::new();
        selection.toggle(movie(1));
        assert!(!selection.remove(2));
        assert_eq!(selection.len(), 1);
    }
}
