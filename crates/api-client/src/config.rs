//! Client configuration.
//!
//! The backend runs at a fixed local address; the CLI may override it with a
//! flag, but nothing is read from the environment.

/// Default backend address
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000";

/// Default number of movies requested per catalog page
pub const DEFAULT_PAGE_LIMIT: u32 = 50;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Backend base URL, without trailing slash
    pub base_url: String,
    pub page_limit: u32,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn with_page_limit(mut self, page_limit: u32) -> Self {
        self.page_limit = page_limit;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE.to_string(),
            page_limit: DEFAULT_PAGE_LIMIT,
        }
    }
}
