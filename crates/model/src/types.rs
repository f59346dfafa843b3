//! Core domain types shared by the client, the state container and the CLI.
//!
//! Wire names follow the backend's camelCase JSON; Rust fields stay snake_case
//! through `#[serde(rename_all = "camelCase")]`.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::{ModelError, Result};

// =============================================================================
// Type Aliases & Constants
// =============================================================================

/// Unique identifier for a movie in the backend catalog
pub type MovieId = u32;

/// User-assigned star rating (1-5)
pub type Stars = u8;

/// Lowest star rating the UI offers
pub const MIN_STARS: Stars = 1;

/// Highest star rating the UI offers
pub const MAX_STARS: Stars = 5;

/// Rating given to a movie when it is first selected
pub const DEFAULT_RATING: Stars = 3;

/// Number of rated movies required before recommendations can be requested
pub const MIN_SELECTION: usize = 3;

/// Poster shown when the backend has none for a movie
pub const PLACEHOLDER_POSTER: &str = "/placeholder.svg";

// =============================================================================
// Movie
// =============================================================================

/// A movie as served by the backend.
///
/// The backend has shipped both a single `genre` field and a pipe-delimited
/// `genres` field; either may be absent. Older bodies identify the movie by
/// `id` instead of `movieId`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "MovieWire")]
pub struct Movie {
    pub movie_id: MovieId,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genres: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poster: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub imdb_rating: Option<f32>,
}

/// Incoming movie object, with both identifier spellings kept apart
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct MovieWire {
    #[serde(default)]
    movie_id: Option<MovieId>,
    #[serde(default)]
    id: Option<MovieId>,
    title: String,
    #[serde(default)]
    genre: Option<String>,
    #[serde(default)]
    genres: Option<String>,
    #[serde(default)]
    year: Option<i32>,
    #[serde(default)]
    poster: Option<String>,
    #[serde(default)]
    imdb_rating: Option<f32>,
}

impl TryFrom<MovieWire> for Movie {
    type Error = ModelError;

    // `movieId` wins when both are present
    fn try_from(wire: MovieWire) -> Result<Self> {
        let movie_id = wire
            .movie_id
            .or(wire.id)
            .ok_or_else(|| ModelError::MissingMovieId {
                title: wire.title.clone(),
            })?;
        Ok(Self {
            movie_id,
            title: wire.title,
            genre: wire.genre,
            genres: wire.genres,
            year: wire.year,
            poster: wire.poster,
            imdb_rating: wire.imdb_rating,
        })
    }
}

impl Movie {
    /// Minimal constructor, mostly for fixtures
    pub fn new(movie_id: MovieId, title: impl Into<String>) -> Self {
        Self {
            movie_id,
            title: title.into(),
            genre: None,
            genres: None,
            year: None,
            poster: None,
            imdb_rating: None,
        }
    }

    /// Genres as a list, preferring `genres` over `genre`.
    ///
    /// Empty segments of the pipe-delimited string are dropped.
    pub fn genre_list(&self) -> Vec<&str> {
        self.genres
            .as_deref()
            .or(self.genre.as_deref())
            .map(|raw| {
                raw.split('|')
                    .map(str::trim)
                    .filter(|g| !g.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// First listed genre, used as the card badge
    pub fn primary_genre(&self) -> Option<&str> {
        self.genre_list().into_iter().next()
    }

    pub fn has_genre(&self, genre: &str) -> bool {
        self.genre_list()
            .iter()
            .any(|g| g.eq_ignore_ascii_case(genre))
    }

    pub fn poster_or_placeholder(&self) -> &str {
        self.poster
            .as_deref()
            .filter(|p| !p.is_empty())
            .unwrap_or(PLACEHOLDER_POSTER)
    }
}

// =============================================================================
// Selection
// =============================================================================

/// A movie the user picked, together with the stars they gave it
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedMovie {
    pub movie: Movie,
    pub rating: Stars,
}

impl SelectedMovie {
    pub fn new(movie: Movie) -> Self {
        Self {
            movie,
            rating: DEFAULT_RATING,
        }
    }

    pub fn movie_id(&self) -> MovieId {
        self.movie.movie_id
    }

    pub fn to_entry(&self) -> RatingEntry {
        RatingEntry {
            movie_id: self.movie.movie_id,
            rating: self.rating,
        }
    }
}

/// Validate a raw star value coming from user input.
pub fn validate_rating(value: i64) -> Result<Stars> {
    if (MIN_STARS as i64..=MAX_STARS as i64).contains(&value) {
        Ok(value as Stars)
    } else {
        Err(ModelError::RatingOutOfRange {
            value,
            min: MIN_STARS,
            max: MAX_STARS,
        })
    }
}

// =============================================================================
// Wire payloads
// =============================================================================

/// One `{movieId, rating}` item of the recommendation payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingEntry {
    pub movie_id: MovieId,
    pub rating: Stars,
}

/// Parses `ID=STARS`, e.g. `1193=5`
impl FromStr for RatingEntry {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = |reason: &str| ModelError::InvalidRatingEntry {
            input: s.to_string(),
            reason: reason.to_string(),
        };

        let (id, stars) = s.split_once('=').ok_or_else(|| invalid("expected ID=STARS"))?;
        let movie_id = id
            .trim()
            .parse::<MovieId>()
            .map_err(|_| invalid("movie id is not a number"))?;
        let raw = stars
            .trim()
            .parse::<i64>()
            .map_err(|_| invalid("rating is not a number"))?;

        Ok(RatingEntry {
            movie_id,
            rating: validate_rating(raw)?,
        })
    }
}

/// Request body of `POST /recommend/from-ratings`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingsPayload {
    pub ratings: Vec<RatingEntry>,
}

/// One normalized page of the catalog
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MoviePage {
    pub movies: Vec<Movie>,
    /// Total number of movies the server reports for the whole catalog
    pub total: usize,
}

/// Response of the recommendation endpoint
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RecommendationSet {
    pub recommendations: Vec<Movie>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}
