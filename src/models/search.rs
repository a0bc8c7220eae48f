//! Search and expanded-search response shapes.

use serde::{Deserialize, Serialize};

use super::common::OrcidIdentifier;

/// One page of search results.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SearchResult {
    /// Total number of matches reported by the registry.
    #[serde(default)]
    pub num_found: u64,
    /// Offset of this page within the full result set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<u64>,
    /// Requested page size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_rows: Option<u64>,
    /// The matches on this page.
    #[serde(rename = "result", default, skip_serializing_if = "Vec::is_empty")]
    pub results: Vec<SearchRecord>,
}

/// One search match; the plain search endpoint returns identifiers only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SearchRecord {
    /// The matched record's identifier block.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orcid_identifier: Option<OrcidIdentifier>,
}

/// One page of expanded search results.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ExpandedSearchResult {
    /// Total number of matches reported by the registry.
    #[serde(default)]
    pub num_found: u64,
    /// The matches on this page.
    #[serde(rename = "expanded-result", default, skip_serializing_if = "Vec::is_empty")]
    pub expanded_results: Vec<ExpandedSearchRecord>,
}

/// One expanded search match, carrying basic biographical fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ExpandedSearchRecord {
    /// The matched ORCID iD.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orcid_id: Option<String>,
    /// Given names.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub given_names: Option<String>,
    /// Family names.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family_names: Option<String>,
    /// Credit name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit_name: Option<String>,
    /// Public email addresses.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub email: Vec<String>,
    /// Institution names from affiliations.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub institution_name: Vec<String>,
}
