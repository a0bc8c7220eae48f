//! API service modules for ORCID endpoints.
//!
//! Each service provides methods for one subset of the API; all of them
//! funnel through the client's request executor.

mod activities;
mod affiliations;
mod records;
pub(crate) mod router;
mod search;
mod works;

pub use activities::ActivitiesService;
pub use affiliations::AffiliationsService;
pub use records::RecordsService;
pub use router::Resource;
pub use search::{
    SearchPager, SearchParams, SearchQuery, SearchService, SearchStream, DEFAULT_ROWS,
};
pub use works::WorksService;
