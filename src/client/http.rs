//! HTTP client implementation for the ORCID API.
//!
//! [`OrcidClient`] is the entry point; every endpoint wrapper funnels
//! through [`ClientInner::execute`], which owns authentication, pacing,
//! retry/backoff, and cancellation for one logical call.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{ACCEPT, USER_AGENT};
use reqwest::{Method, StatusCode, Url};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use tokio_util::sync::CancellationToken;

use crate::api::{
    ActivitiesService, AffiliationsService, RecordsService, Resource, SearchService, WorksService,
};
use crate::models::OrcidId;
use crate::{Error, Result};

use super::config::ClientConfig;
use super::rate_limit::RateLimiter;

/// The main client for interacting with the ORCID API.
///
/// The client provides access to the endpoint wrappers through accessor
/// methods that return service structs. It owns the rate limiter shared by
/// every call it (or any clone of it) makes, so concurrent calls contend
/// for one pacing schedule.
///
/// # Example
///
/// ```no_run
/// use orcid_rs::{ClientConfig, OrcidClient, OrcidId};
///
/// # async fn example() -> orcid_rs::Result<()> {
/// let client = OrcidClient::new(
///     ClientConfig::default().with_token("my-bearer-token"),
/// );
///
/// let id = OrcidId::validated("0000-0002-1825-0097")?;
/// let record = client.records().record(&id).await?;
/// println!("{:?}", record.orcid_identifier);
/// # Ok(())
/// # }
/// ```
pub struct OrcidClient {
    pub(crate) inner: Arc<ClientInner>,
}

pub(crate) struct ClientInner {
    pub(crate) http: reqwest::Client,
    pub(crate) config: ClientConfig,
    pub(crate) limiter: Option<RateLimiter>,
    pub(crate) cancel: CancellationToken,
}

impl OrcidClient {
    /// Create a new client.
    ///
    /// The rate limiter is derived from `config.rate_limit` here, exactly
    /// once; construction never fails. A missing bearer token is reported
    /// by the first call that needs it.
    pub fn new(config: ClientConfig) -> Self {
        let limiter = RateLimiter::per_second(config.rate_limit);
        Self {
            inner: Arc::new(ClientInner {
                http: reqwest::Client::new(),
                config,
                limiter,
                cancel: CancellationToken::new(),
            }),
        }
    }

    /// A handle whose calls observe `cancel`.
    ///
    /// Pagers and streams created from the returned handle observe the
    /// token too. The rate limiter stays shared with the original client.
    pub fn with_cancellation(&self, cancel: CancellationToken) -> Self {
        Self {
            inner: Arc::new(ClientInner {
                http: self.inner.http.clone(),
                config: self.inner.config.clone(),
                limiter: self.inner.limiter.clone(),
                cancel,
            }),
        }
    }

    /// Get the records service (full record, raw record, person section).
    pub fn records(&self) -> RecordsService {
        RecordsService::new(self.inner.clone())
    }

    /// Get the works service.
    pub fn works(&self) -> WorksService {
        WorksService::new(self.inner.clone())
    }

    /// Get the affiliations service (educations, employments, ...).
    pub fn affiliations(&self) -> AffiliationsService {
        AffiliationsService::new(self.inner.clone())
    }

    /// Get the activities service (fundings, peer reviews, research
    /// resources).
    pub fn activities(&self) -> ActivitiesService {
        ActivitiesService::new(self.inner.clone())
    }

    /// Get the search service.
    pub fn search(&self) -> SearchService {
        SearchService::new(self.inner.clone())
    }

    /// Fetch a resource by its API path, e.g.
    /// `/0000-0002-1825-0097/works`.
    ///
    /// Paths like these are returned inside most responses; this routes
    /// them to the matching endpoint wrapper and returns the result as a
    /// [`Resource`] variant to match on.
    pub async fn by_path(&self, path: &str) -> Result<Resource> {
        crate::api::router::dispatch(&self.inner, path).await
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }
}

impl ClientInner {
    /// Perform one logical call: authentication check, pacing, retries
    /// with quadratic backoff, and classification of the outcome.
    ///
    /// Exactly HTTP 200 is success. 429, 408, and 5xx responses and
    /// transport failures are retried up to `max_retries` extra attempts;
    /// any other status is terminal. Waits (permit, backoff) and the
    /// transport call itself abort with [`Error::Cancelled`] when the
    /// client's cancellation token fires.
    pub(crate) async fn execute(
        &self,
        method: Method,
        url: Url,
        body: Option<String>,
    ) -> Result<Vec<u8>> {
        let token = self.config.token.as_ref().ok_or(Error::MissingCredential)?;

        if self.cancel.is_cancelled() {
            return Err(Error::Cancelled);
        }

        let mut attempt: u32 = 0;
        loop {
            if let Some(limiter) = &self.limiter {
                limiter.acquire(&self.cancel).await?;
            }

            let transient = match self.attempt(&method, &url, body.as_deref(), token).await? {
                Attempt::Done(bytes) => return Ok(bytes),
                Attempt::Transient(err) => err,
            };

            attempt += 1;
            if attempt > self.config.max_retries {
                return Err(Error::RetriesExhausted {
                    attempts: attempt,
                    source: Box::new(transient),
                });
            }

            // Quadratic backoff: 1s, 4s, 9s, ...
            let backoff = Duration::from_secs(u64::from(attempt) * u64::from(attempt));
            tracing::warn!(
                %url,
                attempt,
                backoff_secs = backoff.as_secs(),
                error = %transient,
                "attempt failed, backing off",
            );
            tokio::select! {
                biased;
                () = self.cancel.cancelled() => return Err(Error::Cancelled),
                () = tokio::time::sleep(backoff) => {}
            }
        }
    }

    /// One physical attempt. Transient outcomes come back as
    /// `Attempt::Transient`; terminal ones as `Err`.
    async fn attempt(
        &self,
        method: &Method,
        url: &Url,
        body: Option<&str>,
        token: &SecretString,
    ) -> Result<Attempt> {
        let mut request = self
            .http
            .request(method.clone(), url.clone())
            .timeout(self.config.timeout)
            .header(USER_AGENT, &self.config.user_agent)
            .header(ACCEPT, self.config.format.accept_header())
            .bearer_auth(token.expose_secret());
        if let Some(body) = body {
            request = request.body(body.to_string());
        }

        tracing::debug!(%url, "issuing request");
        let sent = tokio::select! {
            biased;
            () = self.cancel.cancelled() => return Err(Error::Cancelled),
            result = request.send() => result,
        };

        let response = match sent {
            Ok(response) => response,
            Err(err) => return Ok(Attempt::Transient(Error::Transport(err))),
        };

        let status = response.status();
        if status == StatusCode::OK {
            let bytes = response.bytes().await.map_err(Error::Transport)?;
            return Ok(Attempt::Done(bytes.to_vec()));
        }

        if status == StatusCode::TOO_MANY_REQUESTS
            || status == StatusCode::REQUEST_TIMEOUT
            || status.is_server_error()
        {
            return Ok(Attempt::Transient(Error::RetryableStatus {
                status: status.as_u16(),
            }));
        }

        // Anything else, including 2xx codes other than 200, is terminal.
        let body = response.text().await.unwrap_or_default();
        Err(Error::RemoteRejected {
            status: status.as_u16(),
            body,
        })
    }

    /// Execute a GET and decode the body under the configured format.
    pub(crate) async fn fetch<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        let body = self.execute(Method::GET, url, None).await?;
        self.config.format.decode(&body)
    }

    /// Fetch `{base}/{id}/{endpoint}` decoded into `T`.
    pub(crate) async fn fetch_endpoint<T: DeserializeOwned>(
        &self,
        id: &OrcidId,
        endpoint: &str,
    ) -> Result<T> {
        let url = self.endpoint_url(id, endpoint)?;
        self.fetch(url).await
    }

    /// Build `{base}/{id}/{endpoint}`.
    pub(crate) fn endpoint_url(&self, id: &OrcidId, endpoint: &str) -> Result<Url> {
        Ok(Url::parse(&format!(
            "{}/{}/{}",
            self.config.api_url, id, endpoint
        ))?)
    }
}

/// Outcome of one physical attempt that did not terminate the call.
enum Attempt {
    /// HTTP 200; the raw body.
    Done(Vec<u8>),
    /// A retryable failure.
    Transient(Error),
}

impl Clone for OrcidClient {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl std::fmt::Debug for OrcidClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrcidClient")
            .field("config", &self.inner.config)
            .finish()
    }
}
