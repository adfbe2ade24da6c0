//! Client configuration

/// Base URL used when `FAUSSE_API_URL` is not set
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Client configuration for connecting to the Cafe Fausse API
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server base URL (e.g., "http://localhost:5000")
    pub base_url: String,

    /// Shared admin token, sent as the `token` query parameter
    pub admin_token: Option<String>,

    /// Request timeout in seconds
    pub timeout: u64,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            admin_token: None,
            timeout: 30,
        }
    }

    /// Read `FAUSSE_API_URL`, `FAUSSE_ADMIN_TOKEN` and `FAUSSE_TIMEOUT_SECS`
    pub fn from_env() -> Self {
        let mut config =
            Self::new(std::env::var("FAUSSE_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into()));
        if let Ok(token) = std::env::var("FAUSSE_ADMIN_TOKEN") {
            config = config.with_admin_token(token);
        }
        if let Some(secs) = std::env::var("FAUSSE_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            config = config.with_timeout(secs);
        }
        config
    }

    /// Set the admin token
    pub fn with_admin_token(mut self, token: impl Into<String>) -> Self {
        self.admin_token = Some(token.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Create an HTTP client from this configuration
    pub fn build_http_client(&self) -> crate::ClientResult<crate::HttpClient> {
        crate::HttpClient::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
