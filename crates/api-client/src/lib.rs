//! HTTP client for the movie recommendation backend.
//!
//! This crate wraps the two backend calls the front-end needs:
//! - `GET /movies?page=&limit=` for the paginated catalog
//! - `POST /recommend/from-ratings` for rating-based recommendations
//!
//! Each call is a single best-effort request: no retries, no timeouts, no
//! caching. Response bodies are normalized by the [`wire`] module.

pub mod config;
pub mod error;
pub mod wire;

use async_trait::async_trait;
use model::{MoviePage, RatingEntry, RatingsPayload, RecommendationSet};
use reqwest::{Client as HttpClient, Response, Url};
use tracing::{debug, error, info};

pub use config::{ClientConfig, DEFAULT_API_BASE, DEFAULT_PAGE_LIMIT};
pub use error::{ClientError, ClientResult};
use wire::{MOVIES_ENDPOINT, RECOMMEND_ENDPOINT};

/// The backend operations the session depends on.
///
/// `MovieApiClient` is the production implementation; tests substitute
/// scripted fakes.
#[async_trait]
pub trait MovieApi: Send + Sync {
    /// Fetch one page of the catalog
    async fn fetch_movies(&self, page: u32, limit: u32) -> ClientResult<MoviePage>;

    /// Ask the backend for recommendations based on the given ratings
    async fn fetch_recommendations(&self, ratings: &[RatingEntry])
        -> ClientResult<RecommendationSet>;
}

/// reqwest-backed client for the movie backend
#[derive(Debug, Clone)]
pub struct MovieApiClient {
    http_client: HttpClient,
    base_url: String,
}

impl MovieApiClient {
    /// Build a client for the configured base URL.
    ///
    /// The URL is validated up front so a typo fails before the first request.
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let base_url = config.base_url.trim_end_matches('/').to_string();
        Url::parse(&base_url).map_err(|e| ClientError::InvalidBaseUrl {
            url: config.base_url.clone(),
            reason: e.to_string(),
        })?;

        info!("Using movie backend at {}", base_url);
        Ok(Self {
            http_client: HttpClient::new(),
            base_url,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    /// Turn a non-success response into `ClientError::Fetch`, otherwise
    /// return the body bytes.
    async fn read_body(endpoint: &'static str, response: Response) -> ClientResult<Vec<u8>> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("{} returned status {}", endpoint, status);
            return Err(ClientError::Fetch {
                endpoint,
                status,
                body,
            });
        }
        Ok(response.bytes().await?.to_vec())
    }
}

#[async_trait]
impl MovieApi for MovieApiClient {
    async fn fetch_movies(&self, page: u32, limit: u32) -> ClientResult<MoviePage> {
        debug!("Fetching movies page {} (limit {})", page, limit);

        let response = self
            .http_client
            .get(self.url(MOVIES_ENDPOINT))
            .query(&[("page", page), ("limit", limit)])
            .send()
            .await?;

        let body = Self::read_body(MOVIES_ENDPOINT, response).await?;
        let movie_page = wire::decode_movie_page(&body)?;

        debug!(
            "Page {} returned {} movies (total {})",
            page,
            movie_page.movies.len(),
            movie_page.total
        );
        Ok(movie_page)
    }

    async fn fetch_recommendations(
        &self,
        ratings: &[RatingEntry],
    ) -> ClientResult<RecommendationSet> {
        debug!("Requesting recommendations from {} ratings", ratings.len());

        let payload = RatingsPayload {
            ratings: ratings.to_vec(),
        };
        let response = self
            .http_client
            .post(self.url(RECOMMEND_ENDPOINT))
            .json(&payload)
            .send()
            .await?;

        let body = Self::read_body(RECOMMEND_ENDPOINT, response).await?;
        let set = wire::decode_recommendations(&body)?;

        debug!("Received {} recommendations", set.recommendations.len());
        Ok(set)
    }
}
