//! Works service.

use std::sync::Arc;

use crate::client::ClientInner;
use crate::models::{OrcidId, PutCode, Work, Works};
use crate::Result;

/// Service for works (publications and other research outputs).
pub struct WorksService {
    inner: Arc<ClientInner>,
}

impl WorksService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Fetch the grouped works summaries for an iD.
    pub async fn list(&self, id: &OrcidId) -> Result<Works> {
        self.inner.fetch_endpoint(id, "works").await
    }

    /// Fetch one full work by its put-code.
    pub async fn get(&self, id: &OrcidId, put_code: PutCode) -> Result<Work> {
        self.inner
            .fetch_endpoint(id, &format!("work/{put_code}"))
            .await
    }
}
