//! HTTP client core: configuration, pacing, and the request executor.
//!
//! This module provides the main entry point [`OrcidClient`] for
//! interacting with the ORCID API.
//!
//! # Example
//!
//! ```no_run
//! use orcid_rs::{ClientConfig, OrcidClient, OrcidId};
//!
//! # async fn example() -> orcid_rs::Result<()> {
//! let client = OrcidClient::new(ClientConfig::default().with_token("token"));
//!
//! let id = OrcidId::new("0000-0002-1825-0097");
//! let works = client.works().list(&id).await?;
//! # Ok(())
//! # }
//! ```

mod config;
mod http;
mod rate_limit;

pub use config::{ClientConfig, ResponseFormat, DEFAULT_MAX_RETRIES, DEFAULT_RATE_LIMIT, DEFAULT_TIMEOUT};
pub use http::OrcidClient;
pub use rate_limit::RateLimiter;
pub(crate) use http::ClientInner;
