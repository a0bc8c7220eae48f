//! Record and person services.

use std::sync::Arc;

use crate::client::ClientInner;
use crate::models::{OrcidId, Person, Record};
use crate::Result;

/// Service for whole-record operations.
///
/// # Example
///
/// ```no_run
/// # async fn example(client: orcid_rs::OrcidClient) -> orcid_rs::Result<()> {
/// use orcid_rs::OrcidId;
///
/// let id = OrcidId::new("0000-0002-1825-0097");
/// let record = client.records().record(&id).await?;
/// if let Some(person) = record.person {
///     println!("{:?}", person.name);
/// }
/// # Ok(())
/// # }
/// ```
pub struct RecordsService {
    inner: Arc<ClientInner>,
}

impl RecordsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Fetch the complete record for an iD.
    pub async fn record(&self, id: &OrcidId) -> Result<Record> {
        self.inner.fetch_endpoint(id, "record").await
    }

    /// Fetch the complete record without decoding it.
    ///
    /// Useful for passing the registry's response through unchanged.
    pub async fn record_raw(&self, id: &OrcidId) -> Result<Vec<u8>> {
        let url = self.inner.endpoint_url(id, "record")?;
        self.inner
            .execute(reqwest::Method::GET, url, None)
            .await
    }

    /// Fetch the person section for an iD.
    pub async fn person(&self, id: &OrcidId) -> Result<Person> {
        self.inner.fetch_endpoint(id, "person").await
    }
}
