//! Fundings, peer reviews, and research resources.

use serde::{Deserialize, Serialize};

use super::common::{DateValue, ExternalIds, FuzzyDate, Organization, Source, StringValue};
use super::primitives::PutCode;
use super::works::WorkTitle;

/// The fundings section of a record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Fundings {
    /// When the section was last modified.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified_date: Option<DateValue>,
    /// Groups of fundings sharing an identifier.
    #[serde(rename = "group", default, skip_serializing_if = "Vec::is_empty")]
    pub group: Vec<FundingGroup>,
    /// API path of this section.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// A group of funding summaries sharing an identifier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct FundingGroup {
    /// When the group was last modified.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified_date: Option<DateValue>,
    /// Identifiers shared by the group.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_ids: Option<ExternalIds>,
    /// The member summaries.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub funding_summary: Vec<FundingSummary>,
}

/// A summary of one funding item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct FundingSummary {
    /// Registry item identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub put_code: Option<PutCode>,
    /// When the item was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_date: Option<DateValue>,
    /// When the item was last modified.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified_date: Option<DateValue>,
    /// Asserting source.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<Source>,
    /// Title block.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<WorkTitle>,
    /// Funding type, e.g. `grant`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub funding_type: Option<String>,
    /// Start date, possibly incomplete.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<FuzzyDate>,
    /// End date, possibly incomplete.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<FuzzyDate>,
    /// The funding organization.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<Organization>,
    /// Link supplied with the funding.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<StringValue>,
    /// Identifiers of the funding.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_ids: Option<ExternalIds>,
    /// Ordering hint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_index: Option<String>,
    /// Visibility setting.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<String>,
    /// API path of this item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// The peer reviews section of a record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct PeerReviews {
    /// When the section was last modified.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified_date: Option<DateValue>,
    /// Groups of reviews for the same review group.
    #[serde(rename = "group", default, skip_serializing_if = "Vec::is_empty")]
    pub group: Vec<PeerReviewGroup>,
    /// API path of this section.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// A group of peer review summaries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct PeerReviewGroup {
    /// When the group was last modified.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified_date: Option<DateValue>,
    /// Identifiers shared by the group.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_ids: Option<ExternalIds>,
    /// The member summaries.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub peer_review_summary: Vec<PeerReviewSummary>,
}

/// A summary of one peer review.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct PeerReviewSummary {
    /// Registry item identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub put_code: Option<PutCode>,
    /// When the item was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_date: Option<DateValue>,
    /// When the item was last modified.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified_date: Option<DateValue>,
    /// Asserting source.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<Source>,
    /// Identifier of the reviewed group (journal, conference, ...).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review_group_id: Option<String>,
    /// Review type, e.g. `review`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review_type: Option<String>,
    /// When the review was completed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review_completion_date: Option<FuzzyDate>,
    /// Link to the review.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review_url: Option<StringValue>,
    /// The convening organization.
    #[serde(rename = "convening-organization", skip_serializing_if = "Option::is_none")]
    pub convening_organization: Option<Organization>,
    /// Identifiers of the review.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_ids: Option<ExternalIds>,
    /// Ordering hint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_index: Option<String>,
    /// Visibility setting.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<String>,
    /// API path of this item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// The research resources section of a record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ResearchResources {
    /// When the section was last modified.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified_date: Option<DateValue>,
    /// Groups of resources sharing an identifier.
    #[serde(rename = "group", default, skip_serializing_if = "Vec::is_empty")]
    pub group: Vec<ResearchResourceGroup>,
    /// API path of this section.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// A group of research resource summaries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ResearchResourceGroup {
    /// When the group was last modified.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified_date: Option<DateValue>,
    /// Identifiers shared by the group.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_ids: Option<ExternalIds>,
    /// The member summaries.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub research_resource_summary: Vec<ResearchResourceSummary>,
}

/// A summary of one research resource.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ResearchResourceSummary {
    /// Registry item identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub put_code: Option<PutCode>,
    /// When the item was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_date: Option<DateValue>,
    /// When the item was last modified.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified_date: Option<DateValue>,
    /// Asserting source.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<Source>,
    /// Resource title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Identifiers of the resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_ids: Option<ExternalIds>,
    /// Ordering hint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_index: Option<String>,
    /// Visibility setting.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<String>,
    /// API path of this item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}
