//! # Model Crate
//!
//! Domain types for the ReelPicks client: catalog movies, the user's rated
//! selection, and the payloads exchanged with the recommendation backend.
//!
//! ## Example Usage
//!
//! ```ignore
//! use model::{Movie, SelectedMovie};
//!
//! let movie = Movie::new(1, "Toy Story");
//! let picked = SelectedMovie::new(movie);
//! assert_eq!(picked.rating, model::DEFAULT_RATING);
//! ```

pub mod error;
pub mod types;

// Re-export commonly used types for convenience
pub use error::{ModelError, Result};
pub use types::{
    validate_rating,
    // Type aliases
    MovieId,
    Stars,
    // Core types
    Movie,
    MoviePage,
    RatingEntry,
    RatingsPayload,
    RecommendationSet,
    SelectedMovie,
    // Constants
    DEFAULT_RATING,
    MAX_STARS,
    MIN_SELECTION,
    MIN_STARS,
    PLACEHOLDER_POSTER,
};
