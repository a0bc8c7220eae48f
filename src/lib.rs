//! # orcid-rs
//!
//! A typed async Rust client for the ORCID v3.0 public and member APIs.
//!
//! ORCID assigns researchers a persistent identifier (an ORCID iD) and
//! serves the records attached to it over a REST API. This crate wraps
//! that API with strongly-typed models, a paced and retrying request
//! core, and lazy pagination for search.
//!
//! ## Features
//!
//! - **Typed records**: the full v3.0 response schema (record, person,
//!   works, affiliations, fundings, peer reviews, research resources)
//! - **Resilient requests**: quadratic-backoff retries for transient
//!   failures, client-owned request pacing, cooperative cancellation
//! - **JSON and XML**: pick the response encoding per client
//! - **Search**: a fluent query builder plus drain-pattern and `Stream`
//!   pagination
//! - **iD utilities**: parse, normalize, and checksum-validate ORCID iDs
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use orcid_rs::{ClientConfig, OrcidClient, OrcidId};
//!
//! #[tokio::main]
//! async fn main() -> orcid_rs::Result<()> {
//!     let client = OrcidClient::new(
//!         ClientConfig::default().with_token(std::env::var("ORCID_TOKEN").unwrap_or_default()),
//!     );
//!
//!     let id = OrcidId::validated("0000-0002-1825-0097")?;
//!     let record = client.records().record(&id).await?;
//!     if let Some(name) = record.person.and_then(|p| p.name) {
//!         println!("{:?} {:?}", name.given_names, name.family_name);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Searching
//!
//! ```rust,no_run
//! use orcid_rs::{ClientConfig, OrcidClient, SearchQuery};
//!
//! #[tokio::main]
//! async fn main() -> orcid_rs::Result<()> {
//!     let client = OrcidClient::new(ClientConfig::default().with_token("token"));
//!
//!     let params = SearchQuery::new()
//!         .family_name("Carberry")
//!         .and()
//!         .keyword("psychoceramics")
//!         .with_rows(50)
//!         .build();
//!
//!     let mut pager = client.search().pager(params);
//!     while pager.advance().await {
//!         if let Some(record) = pager.current() {
//!             println!("{:?}", record.orcid_identifier);
//!         }
//!     }
//!     if let Some(err) = pager.last_error() {
//!         eprintln!("search failed: {err}");
//!     }
//!     println!("{} total matches", pager.total_results());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Cancellation
//!
//! Every wait inside a call (pacing permit, retry backoff, the transport
//! call itself) observes a [`tokio_util::sync::CancellationToken`]:
//!
//! ```rust,no_run
//! use orcid_rs::{ClientConfig, OrcidClient, OrcidId};
//! use tokio_util::sync::CancellationToken;
//!
//! # async fn example() -> orcid_rs::Result<()> {
//! let client = OrcidClient::new(ClientConfig::default().with_token("token"));
//! let cancel = CancellationToken::new();
//! let scoped = client.with_cancellation(cancel.clone());
//!
//! tokio::spawn(async move {
//!     tokio::time::sleep(std::time::Duration::from_secs(2)).await;
//!     cancel.cancel();
//! });
//!
//! let result = scoped.records().record(&OrcidId::new("0000-0002-1825-0097")).await;
//! # let _ = result;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

pub mod api;
pub mod client;
pub mod error;
pub mod models;

// Re-export primary types at crate root for convenience
pub use api::{
    Resource, SearchPager, SearchParams, SearchQuery, SearchStream, DEFAULT_ROWS,
};
pub use client::{ClientConfig, OrcidClient, RateLimiter, ResponseFormat};
pub use error::{Error, Result};
pub use models::{Environment, OrcidId, PutCode};

/// Prelude module for convenient imports.
///
/// ```rust
/// use orcid_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{Resource, SearchPager, SearchParams, SearchQuery, SearchStream};
    pub use crate::client::{ClientConfig, OrcidClient, ResponseFormat};
    pub use crate::error::{Error, Result};
    pub use crate::models::{
        ActivitiesSummary, Educations, Employments, Environment, Fundings, OrcidId, PeerReviews,
        Person, PutCode, Record, ResearchResources, SearchRecord, SearchResult, Work, Works,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orcid_id_validation_at_crate_root() {
        assert!(OrcidId::validated("0000-0002-1825-0097").is_ok());
        assert!(OrcidId::validated("0000-0002-1825-0090").is_err());
    }

    #[test]
    fn environment_urls() {
        assert_eq!(Environment::Public.base_url(), "https://pub.orcid.org/v3.0");
        assert_eq!(
            Environment::PublicSandbox.base_url(),
            "https://pub.sandbox.orcid.org/v3.0"
        );
    }

    #[test]
    fn default_config_has_no_token() {
        let config = ClientConfig::default();
        assert!(config.token.is_none());
    }
}
