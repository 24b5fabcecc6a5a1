//! Client configuration

/// Configuration for connecting to the Pulse backend.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend base URL (e.g., "http://localhost:8080")
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout: u64,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: 30,
        }
    }

    /// Read configuration from the environment.
    ///
    /// `PULSE_API_BASE_URL` sets the base URL (falls back to the default
    /// localhost address), `PULSE_REQUEST_TIMEOUT_SECS` the timeout.
    pub fn from_env() -> Self {
        let base_url = std::env::var("PULSE_API_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:8080".to_string());
        let timeout = std::env::var("PULSE_REQUEST_TIMEOUT_SECS")
            .ok()
            .and_then(|t| t.parse().ok())
            .unwrap_or(30);
        Self { base_url, timeout }
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Create an API gateway from this configuration
    pub fn build_gateway(&self) -> crate::ClientResult<crate::ApiGateway> {
        crate::ApiGateway::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:8080")
    }
}
