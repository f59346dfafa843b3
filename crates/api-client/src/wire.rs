//! Response decoding for the two backend endpoints.
//!
//! The movie listing has shipped in two shapes over time, a bare array or a
//! `{movies, total}` object. Both are accepted and normalized into a
//! [`MoviePage`]; anything else is a [`ClientError::Protocol`].

use model::{Movie, MoviePage, RecommendationSet};
use serde::Deserialize;
use serde_json::Value;

use crate::error::{ClientError, ClientResult};

pub const MOVIES_ENDPOINT: &str = "/movies";
pub const RECOMMEND_ENDPOINT: &str = "/recommend/from-ratings";

/// The accepted shapes of a `/movies` body
#[derive(Debug, PartialEq)]
pub enum MoviesBody {
    /// `[movie, ...]`; the page is the whole catalog
    Bare(Vec<Movie>),
    /// `{"movies": [...], "total": n}`
    Paged(PagedBody),
}

#[derive(Debug, PartialEq, Deserialize)]
pub struct PagedBody {
    #[serde(default)]
    pub movies: Option<Vec<Movie>>,
    #[serde(default)]
    pub total: Option<usize>,
}

impl From<MoviesBody> for MoviePage {
    fn from(body: MoviesBody) -> Self {
        match body {
            MoviesBody::Bare(movies) => {
                let total = movies.len();
                MoviePage { movies, total }
            }
            MoviesBody::Paged(PagedBody { movies, total }) => MoviePage {
                movies: movies.unwrap_or_default(),
                total: total.unwrap_or(0),
            },
        }
    }
}

fn protocol(endpoint: &'static str, reason: impl Into<String>) -> ClientError {
    ClientError::Protocol {
        endpoint,
        reason: reason.into(),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn parse_json(endpoint: &'static str, bytes: &[u8]) -> ClientResult<Value> {
    serde_json::from_slice(bytes).map_err(|e| protocol(endpoint, format!("invalid JSON: {e}")))
}

/// Classify a `/movies` body into one of the accepted shapes.
pub fn classify_movies_body(value: Value) -> ClientResult<MoviesBody> {
    match value {
        Value::Array(_) => serde_json::from_value(value)
            .map(MoviesBody::Bare)
            .map_err(|e| protocol(MOVIES_ENDPOINT, format!("bad movie in array: {e}"))),
        Value::Object(_) => serde_json::from_value(value)
            .map(MoviesBody::Paged)
            .map_err(|e| protocol(MOVIES_ENDPOINT, e.to_string())),
        other => Err(protocol(
            MOVIES_ENDPOINT,
            format!("expected an array or an object, got {}", kind_of(&other)),
        )),
    }
}

/// Decode a `/movies` body into a normalized page.
pub fn decode_movie_page(bytes: &[u8]) -> ClientResult<MoviePage> {
    let value = parse_json(MOVIES_ENDPOINT, bytes)?;
    classify_movies_body(value).map(MoviePage::from)
}

/// Decode a `/recommend/from-ratings` body.
///
/// `recommendations` must be present and list-shaped; `reason` is optional.
pub fn decode_recommendations(bytes: &[u8]) -> ClientResult<RecommendationSet> {
    let value = parse_json(RECOMMEND_ENDPOINT, bytes)?;

    let Value::Object(ref fields) = value else {
        return Err(protocol(
            RECOMMEND_ENDPOINT,
            format!("expected an object, got {}", kind_of(&value)),
        ));
    };
    match fields.get("recommendations") {
        None => return Err(protocol(RECOMMEND_ENDPOINT, "missing `recommendations`")),
        Some(Value::Array(_)) => {}
        Some(other) => {
            return Err(protocol(
                RECOMMEND_ENDPOINT,
                format!("`recommendations` is {}, not a list", kind_of(other)),
            ))
        }
    }

    serde_json::from_value(value).map_err(|e| protocol(RECOMMEND_ENDPOINT, e.to_string()))
}
