//! Voter API client configuration

use std::time::Duration;

use reqwest::Url;

use crate::error::ConfigError;

/// Base URL used when none is configured
pub const DEFAULT_API_URL: &str = "http://localhost:8000/api/";

/// Request timeout used when none is configured
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

const DEFAULT_USER_AGENT: &str = concat!("votecheck/", env!("CARGO_PKG_VERSION"));

/// Where and how the client reaches the voter API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// API root; always ends with `/` so endpoints join beneath it
    pub base_url: Url,
    pub timeout: Duration,
    pub user_agent: String,
}

impl ApiConfig {
    /// Validate a base URL and pair it with a timeout.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] when the URL does not parse,
    /// is not http(s), or carries a query or fragment. A zero timeout is
    /// rejected the same way since every request would fail.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ConfigError> {
        let invalid = |reason: &str| ConfigError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: reason.to_string(),
        };

        let mut url = Url::parse(base_url.trim()).map_err(|e| invalid(&e.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(invalid("scheme must be http or https"));
        }
        if url.query().is_some() || url.fragment().is_some() {
            return Err(invalid("must not carry a query or fragment"));
        }
        if timeout.is_zero() {
            return Err(invalid("timeout must be greater than zero"));
        }
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }

        Ok(Self {
            base_url: url,
            timeout,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        })
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_trailing_slash() {
        let config = ApiConfig::new("https://vote.example.org/api", DEFAULT_TIMEOUT).unwrap();
        assert_eq!(config.base_url.as_str(), "https://vote.example.org/api/");

        let joined = config.base_url.join("registrations/").unwrap();
        assert_eq!(joined.as_str(), "https://vote.example.org/api/registrations/");
    }

    #[test]
    fn default_url_is_valid() {
        let config = ApiConfig::new(DEFAULT_API_URL, DEFAULT_TIMEOUT).unwrap();
        assert_eq!(config.base_url.as_str(), DEFAULT_API_URL);
        assert!(config.user_agent.starts_with("votecheck/"));
    }

    #[test]
    fn rejects_unusable_urls() {
        for url in [
            "not a url",
            "ftp://vote.example.org/",
            "https://vote.example.org/api/?x=1",
            "https://vote.example.org/api/#top",
        ] {
            let result = ApiConfig::new(url, DEFAULT_TIMEOUT);
            assert!(
                matches!(result, Err(ConfigError::InvalidBaseUrl { .. })),
                "{url} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_zero_timeout() {
        assert!(ApiConfig::new(DEFAULT_API_URL, Duration::ZERO).is_err());
    }
}
