//! Client configuration options.

use std::fmt;
use std::time::Duration;

use secrecy::SecretString;
use serde::de::DeserializeOwned;

use crate::models::Environment;
use crate::{Error, Result};

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
/// Default number of retries after the first attempt.
pub const DEFAULT_MAX_RETRIES: u32 = 3;
/// Default request pacing, in requests per second.
pub const DEFAULT_RATE_LIMIT: u32 = 10;

/// The response encoding to request from the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseFormat {
    /// `application/json`.
    #[default]
    Json,
    /// `application/vnd.orcid+xml`.
    Xml,
}

impl ResponseFormat {
    /// The `Accept` header value for this format.
    pub fn accept_header(&self) -> &'static str {
        match self {
            ResponseFormat::Json => "application/json",
            ResponseFormat::Xml => "application/vnd.orcid+xml",
        }
    }

    /// Decode a response body in this format into `T`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Decode`] when the body does not parse as the
    /// expected shape; a syntactically valid but mismatched body never
    /// silently decodes to a default value.
    pub fn decode<T: DeserializeOwned>(&self, body: &[u8]) -> Result<T> {
        match self {
            ResponseFormat::Json => serde_json::from_slice(body).map_err(|e| Error::Decode {
                format: *self,
                message: e.to_string(),
            }),
            ResponseFormat::Xml => {
                let text = std::str::from_utf8(body).map_err(|e| Error::Decode {
                    format: *self,
                    message: e.to_string(),
                })?;
                quick_xml::de::from_str(text).map_err(|e| Error::Decode {
                    format: *self,
                    message: e.to_string(),
                })
            }
        }
    }
}

impl fmt::Display for ResponseFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResponseFormat::Json => write!(f, "JSON"),
            ResponseFormat::Xml => write!(f, "XML"),
        }
    }
}

/// Configuration for the ORCID client.
///
/// The configuration is a plain value built with consuming `with_*`
/// methods; the client derives everything it needs (including its rate
/// limiter) once, at construction. Building a configuration never fails -
/// a missing bearer token is reported by the first call that needs it.
///
/// # Example
///
/// ```
/// use orcid_rs::{ClientConfig, Environment, ResponseFormat};
/// use std::time::Duration;
///
/// let config = ClientConfig::default()
///     .with_environment(Environment::PublicSandbox)
///     .with_token("my-bearer-token")
///     .with_timeout(Duration::from_secs(60))
///     .with_format(ResponseFormat::Xml);
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the API, without a trailing slash.
    pub api_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Number of retries after the first attempt.
    pub max_retries: u32,
    /// Requests per second; `0` disables pacing.
    pub rate_limit: u32,
    /// Response encoding to request.
    pub format: ResponseFormat,
    /// `User-Agent` header value.
    pub user_agent: String,
    /// Bearer token; required before any request is issued.
    pub token: Option<SecretString>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: Environment::Public.base_url().to_string(),
            timeout: DEFAULT_TIMEOUT,
            max_retries: DEFAULT_MAX_RETRIES,
            rate_limit: DEFAULT_RATE_LIMIT,
            format: ResponseFormat::default(),
            user_agent: format!("orcid-rs/{}", env!("CARGO_PKG_VERSION")),
            token: None,
        }
    }
}

impl ClientConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Point the client at one of the known registry hosts.
    pub fn with_environment(mut self, env: Environment) -> Self {
        self.api_url = env.base_url().to_string();
        self
    }

    /// Set a custom API base URL; a trailing slash is trimmed.
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        let url = url.into();
        self.api_url = url.trim_end_matches('/').to_string();
        self
    }

    /// Set the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the number of retries after the first attempt.
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Set the pacing rate in requests per second; `0` disables pacing.
    pub fn with_rate_limit(mut self, requests_per_second: u32) -> Self {
        self.rate_limit = requests_per_second;
        self
    }

    /// Set the response encoding to request.
    pub fn with_format(mut self, format: ResponseFormat) -> Self {
        self.format = format;
        self
    }

    /// Set the `User-Agent` header value.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the bearer token used for authentication.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(SecretString::from(token.into()));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.api_url, "https://pub.orcid.org/v3.0");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.max_retries, 3);
        assert_eq!(config.rate_limit, 10);
        assert_eq!(config.format, ResponseFormat::Json);
        assert!(config.token.is_none());
        assert!(config.user_agent.starts_with("orcid-rs/"));
    }

    #[test]
    fn api_url_trailing_slash_trimmed() {
        let config = ClientConfig::default().with_api_url("https://example.org/v3.0/");
        assert_eq!(config.api_url, "https://example.org/v3.0");
    }

    #[test]
    fn builder_chain() {
        let config = ClientConfig::new()
            .with_environment(Environment::MemberSandbox)
            .with_max_retries(1)
            .with_rate_limit(0)
            .with_format(ResponseFormat::Xml)
            .with_token("secret");
        assert_eq!(config.api_url, "https://api.sandbox.orcid.org/v3.0");
        assert_eq!(config.max_retries, 1);
        assert_eq!(config.rate_limit, 0);
        assert_eq!(config.format, ResponseFormat::Xml);
        assert!(config.token.is_some());
    }

    #[test]
    fn decode_rejects_malformed_json() {
        let err = ResponseFormat::Json
            .decode::<crate::models::SearchResult>(b"{not json")
            .unwrap_err();
        assert!(matches!(err, Error::Decode { format: ResponseFormat::Json, .. }));
    }

    #[test]
    fn decode_xml_search_result() {
        let body = br#"<search>
            <num-found>2</num-found>
            <result><orcid-identifier><path>0000-0002-1825-0097</path></orcid-identifier></result>
            <result><orcid-identifier><path>0000-0002-1694-233X</path></orcid-identifier></result>
        </search>"#;
        let result: crate::models::SearchResult = ResponseFormat::Xml.decode(body).unwrap();
        assert_eq!(result.num_found, 2);
        assert_eq!(result.results.len(), 2);
    }
}
