//! Runtime configuration shared by the Discogs client and the finder

use std::time::Duration;

use crate::formats::DEFAULT_DIGITAL_KEYWORDS;

/// Discogs REST API root
pub const DEFAULT_BASE_URL: &str = "https://api.discogs.com";

/// Unauthenticated clients get 60 requests per minute; keep a small margin.
pub const DEFAULT_REQUEST_INTERVAL: Duration = Duration::from_millis(1100);

/// Largest page size the inventory and versions endpoints accept
pub const MAX_PER_PAGE: u32 = 100;

/// Returns the default User-Agent: VinylOnlyFinder/<version>
pub fn default_user_agent() -> String {
    format!("VinylOnlyFinder/{}", env!("CARGO_PKG_VERSION"))
}

/// Finder settings, built once at startup and passed by reference.
#[derive(Debug, Clone)]
pub struct FinderConfig {
    /// Sent on every request; Discogs rejects requests without one
    pub user_agent: String,
    /// Personal access token, raises the rate limit when present
    pub api_token: Option<String>,
    pub base_url: String,
    /// Minimum spacing between two outgoing requests
    pub request_interval: Duration,
    pub per_page: u32,
    pub digital_keywords: Vec<String>,
    /// Only report releases tagged with this genre
    pub genre: Option<String>,
    /// Skip releases whose own formats do not include Vinyl
    pub require_vinyl: bool,
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            api_token: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            request_interval: DEFAULT_REQUEST_INTERVAL,
            per_page: MAX_PER_PAGE,
            digital_keywords: DEFAULT_DIGITAL_KEYWORDS
                .iter()
                .map(|k| k.to_string())
                .collect(),
            genre: None,
            require_vinyl: false,
        }
    }
}

impl FinderConfig {
    /// The token, ignoring one that is blank
    pub fn token(&self) -> Option<&str> {
        self.api_token
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// Value of the Authorization header, if a token is configured
    pub fn authorization_header(&self) -> Option<String> {
        self.token().map(|t| format!("Discogs token={t}"))
    }

    /// Page size clamped to what the API accepts
    pub fn effective_per_page(&self) -> u32 {
        self.per_page.clamp(1, MAX_PER_PAGE)
    }

    /// Base URL without a trailing slash
    pub fn api_root(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}
