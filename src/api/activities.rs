//! Fundings, peer reviews, and research resources service.

use std::sync::Arc;

use crate::client::ClientInner;
use crate::models::{Fundings, OrcidId, PeerReviews, ResearchResources};
use crate::Result;

/// Service for the grouped activity collections that are not works or
/// affiliations.
pub struct ActivitiesService {
    inner: Arc<ClientInner>,
}

impl ActivitiesService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Fetch the fundings collection.
    pub async fn fundings(&self, id: &OrcidId) -> Result<Fundings> {
        self.inner.fetch_endpoint(id, "fundings").await
    }

    /// Fetch the peer reviews collection.
    pub async fn peer_reviews(&self, id: &OrcidId) -> Result<PeerReviews> {
        self.inner.fetch_endpoint(id, "peer-reviews").await
    }

    /// Fetch the research resources collection.
    pub async fn research_resources(&self, id: &OrcidId) -> Result<ResearchResources> {
        self.inner.fetch_endpoint(id, "research-resources").await
    }
}
