//! Affiliations service.

use std::sync::Arc;

use crate::client::ClientInner;
use crate::models::{
    Distinctions, Educations, Employments, InvitedPositions, Memberships, OrcidId, Qualifications,
    Services,
};
use crate::Result;

/// Service for the seven affiliation collections.
///
/// # Example
///
/// ```no_run
/// # async fn example(client: orcid_rs::OrcidClient) -> orcid_rs::Result<()> {
/// use orcid_rs::OrcidId;
///
/// let id = OrcidId::new("0000-0002-1825-0097");
/// let employments = client.affiliations().employments(&id).await?;
/// for group in &employments.affiliation_group {
///     for wrap in &group.summaries {
///         if let Some(summary) = wrap.summary() {
///             println!("{:?}", summary.role_title);
///         }
///     }
/// }
/// # Ok(())
/// # }
/// ```
pub struct AffiliationsService {
    inner: Arc<ClientInner>,
}

impl AffiliationsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Fetch the educations collection.
    pub async fn educations(&self, id: &OrcidId) -> Result<Educations> {
        self.inner.fetch_endpoint(id, "educations").await
    }

    /// Fetch the employments collection.
    pub async fn employments(&self, id: &OrcidId) -> Result<Employments> {
        self.inner.fetch_endpoint(id, "employments").await
    }

    /// Fetch the distinctions collection.
    pub async fn distinctions(&self, id: &OrcidId) -> Result<Distinctions> {
        self.inner.fetch_endpoint(id, "distinctions").await
    }

    /// Fetch the invited positions collection.
    pub async fn invited_positions(&self, id: &OrcidId) -> Result<InvitedPositions> {
        self.inner.fetch_endpoint(id, "invited-positions").await
    }

    /// Fetch the memberships collection.
    pub async fn memberships(&self, id: &OrcidId) -> Result<Memberships> {
        self.inner.fetch_endpoint(id, "memberships").await
    }

    /// Fetch the qualifications collection.
    pub async fn qualifications(&self, id: &OrcidId) -> Result<Qualifications> {
        self.inner.fetch_endpoint(id, "qualifications").await
    }

    /// Fetch the services collection.
    pub async fn services(&self, id: &OrcidId) -> Result<Services> {
        self.inner.fetch_endpoint(id, "services").await
    }
}
