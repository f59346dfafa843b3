//! Error types for the model crate.

use thiserror::Error;

/// Errors raised while building domain values from user input
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ModelError {
    /// Star rating outside of 1..=5
    #[error("Rating must be between {min} and {max}, got {value}")]
    RatingOutOfRange { value: i64, min: u8, max: u8 },

    /// A `ID=STARS` pair could not be parsed
    #[error("Invalid rating entry '{input}': {reason}")]
    InvalidRatingEntry { input: String, reason: String },

    /// Movie object carries neither `movieId` nor `id`
    #[error("Movie '{title}' has no movieId")]
    MissingMovieId { title: String },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, ModelError>;
