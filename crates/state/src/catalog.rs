//! Catalog pagination state machine.
//!
//! ```text
//!   Idle --begin_load--> Fetching --complete (count < total)--> Idle (page + 1)
//!                            |------complete (count >= total)--> Exhausted
//!                            |------fail-----------------------> Idle (same page)
//! ```
//!
//! Load requests while `Fetching` or `Exhausted` are ignored, never queued.

use model::{Movie, MovieId, MoviePage};
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogPhase {
    Idle,
    Fetching,
    Exhausted,
}

/// Ticket for one in-flight page fetch.
///
/// Completions must hand the ticket back so a response for a page that is no
/// longer current gets discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub limit: u32,
}

#[derive(Debug, Clone)]
pub struct CatalogState {
    page: u32,
    limit: u32,
    movies: Vec<Movie>,
    phase: CatalogPhase,
    /// Last reported server total, 0 until the first page arrives
    total: usize,
}

impl CatalogState {
    pub fn new(limit: u32) -> Self {
        Self {
            page: 1,
            limit,
            movies: Vec::new(),
            phase: CatalogPhase::Idle,
            total: 0,
        }
    }

    /// Start loading the current page, if allowed.
    pub fn begin_load(&mut self) -> Option<PageRequest> {
        match self.phase {
            CatalogPhase::Idle => {
                self.phase = CatalogPhase::Fetching;
                debug!("Catalog fetching page {}", self.page);
                Some(PageRequest {
                    page: self.page,
                    limit: self.limit,
                })
            }
            CatalogPhase::Fetching => {
                debug!("Catalog load ignored: page {} already in flight", self.page);
                None
            }
            CatalogPhase::Exhausted => {
                debug!("Catalog load ignored: no more pages");
                None
            }
        }
    }

    /// Apply a successful page. Returns the number of movies appended.
    pub fn complete_load(&mut self, request: PageRequest, page: MoviePage) -> usize {
        if !self.owns(request) {
            return 0;
        }

        let added = page.movies.len();
        self.movies.extend(page.movies);
        self.total = page.total;

        if added == 0 || self.movies.len() >= page.total {
            self.phase = CatalogPhase::Exhausted;
        } else {
            self.page += 1;
            self.phase = CatalogPhase::Idle;
        }
        added
    }

    /// Record a failed fetch; the same page is retried on the next load.
    pub fn fail_load(&mut self, request: PageRequest) {
        if self.owns(request) {
            self.phase = CatalogPhase::Idle;
        }
    }

    fn owns(&self, request: PageRequest) -> bool {
        if self.phase != CatalogPhase::Fetching || request.page != self.page {
            warn!(
                "Discarding stale catalog response for page {} (current page {}, {:?})",
                request.page, self.page, self.phase
            );
            return false;
        }
        true
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn find(&self, movie_id: MovieId) -> Option<&Movie> {
        self.movies.iter().find(|m| m.movie_id == movie_id)
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn phase(&self) -> CatalogPhase {
        self.phase
    }

    pub fn has_more(&self) -> bool {
        self.phase != CatalogPhase::Exhausted
    }

    pub fn is_fetching(&self) -> bool {
        self.phase == CatalogPhase::Fetching
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_of(ids: std::ops::Range<u32>, total: usize) -> MoviePage {
        MoviePage {
            movies: ids.map(|id| Movie::new(id, format!("Movie {id}"))).collect(),
            total,
        }
    }

    #[test]
    fn test_initial_state() {
        let catalog = CatalogState::new(50);
        assert_eq!(catalog.page(), 1);
        assert_eq!(catalog.limit(), 50);
        assert_eq!(catalog.total(), 0);
        assert!(catalog.has_more());
        assert!(!catalog.is_fetching());
        assert!(catalog.movies().is_empty());
    }

    #[test]
    fn test_load_advances_page() {
        let mut catalog = CatalogState::new(2);

        let request = catalog.begin_load().unwrap();
        assert_eq!(request, PageRequest { page: 1, limit: 2 });
        assert!(catalog.is_fetching());

        assert_eq!(catalog.complete_load(request, page_of(1..3, 5)), 2);
        assert_eq!(catalog.phase(), CatalogPhase::Idle);
        assert_eq!(catalog.page(), 2);
        assert_eq!(catalog.movies().len(), 2);
        assert_eq!(catalog.total(), 5);
    }

    #[test]
    fn test_overlapping_load_is_ignored() {
        let mut catalog = CatalogState::new(2);
        let _request = catalog.begin_load().unwrap();
        assert!(catalog.begin_load().is_none());
        assert_eq!(catalog.page(), 1);
    }

    #[test]
    fn test_exhausts_when_total_reached() {
        let mut catalog = CatalogState::new(2);

        let first = catalog.begin_load().unwrap();
        catalog.complete_load(first, page_of(1..3, 3));
        let second = catalog.begin_load().unwrap();
        assert_eq!(second.page, 2);
        catalog.complete_load(second, page_of(3..4, 3));

        assert_eq!(catalog.phase(), CatalogPhase::Exhausted);
        assert!(!catalog.has_more());
        assert!(catalog.begin_load().is_none());
        assert_eq!(catalog.movies().len(), 3);
    }

    #[test]
    fn test_failure_keeps_page_and_allows_retry() {
        let mut catalog = CatalogState::new(2);

        let request = catalog.begin_load().unwrap();
        catalog.fail_load(request);
        assert_eq!(catalog.phase(), CatalogPhase::Idle);
        assert_eq!(catalog.page(), 1);
        assert_eq!(catalog.total(), 0);
        assert!(catalog.has_more());

        let retry = catalog.begin_load().unwrap();
        assert_eq!(retry.page, 1);
        catalog.complete_load(retry, page_of(1..3, 10));
        assert_eq!(catalog.page(), 2);
    }

    #[test]
    fn test_empty_page_exhausts() {
        let mut catalog = CatalogState::new(2);
        let request = catalog.begin_load().unwrap();
        catalog.complete_load(request, page_of(0..0, 10));
        assert!(!catalog.has_more());
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut catalog = CatalogState::new(2);
        let request = catalog.begin_load().unwrap();
        catalog.complete_load(request, page_of(1..3, 10));

        // Same ticket delivered twice
        assert_eq!(catalog.complete_load(request, page_of(1..3, 10)), 0);
        assert_eq!(catalog.movies().len(), 2);
        assert_eq!(catalog.page(), 2);
    }

    #[test]
    fn test_find_movie() {
        let mut catalog = CatalogState::new(5);
        let request = catalog.begin_load().unwrap();
        catalog.complete_load(request, page_of(10..13, 3));
        assert_eq!(catalog.find(11).map(|m| m.title.as_str()), Some("Movie 11"));
        assert!(catalog.find(99).is_none());
    }
}
