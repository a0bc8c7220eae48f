//! Works (publications and other research outputs).

use serde::{Deserialize, Serialize};

use super::common::{DateValue, ExternalIds, FuzzyDate, Source, StringValue, TranslatedTitle};
use super::primitives::PutCode;

/// The works section of a record, grouped by shared external identifiers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Works {
    /// When the section was last modified.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified_date: Option<DateValue>,
    /// Groups of works sharing an identifier.
    #[serde(rename = "group", default, skip_serializing_if = "Vec::is_empty")]
    pub group: Vec<WorkGroup>,
    /// API path of this section.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// A group of work summaries that the registry considers the same output.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct WorkGroup {
    /// When the group was last modified.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified_date: Option<DateValue>,
    /// Identifiers shared by the group.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_ids: Option<ExternalIds>,
    /// The member summaries.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub work_summary: Vec<WorkSummary>,
}

/// A summary of one work assertion.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct WorkSummary {
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
    /// Identifiers of the work.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_ids: Option<ExternalIds>,
    /// Work type, e.g. `journal-article`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub work_type: Option<String>,
    /// Publication date, possibly incomplete.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publication_date: Option<FuzzyDate>,
    /// Journal or container title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub journal_title: Option<StringValue>,
    /// Visibility setting.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<String>,
    /// API path of this item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Ordering hint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_index: Option<String>,
}

/// A full work, as returned by the single-work endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Work {
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
    /// Journal or container title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub journal_title: Option<StringValue>,
    /// Short description or abstract.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,
    /// Citation in a declared format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub citation: Option<Citation>,
    /// Work type, e.g. `journal-article`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub work_type: Option<String>,
    /// Publication date, possibly incomplete.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publication_date: Option<FuzzyDate>,
    /// Identifiers of the work.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_ids: Option<ExternalIds>,
    /// Link to the work.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<StringValue>,
    /// Contributor list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contributors: Option<Contributors>,
    /// BCP 47 language code of the work.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,
    /// Country of publication.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<StringValue>,
    /// Visibility setting.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<String>,
    /// API path of this item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// A work title with optional subtitle and translation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct WorkTitle {
    /// Main title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<StringValue>,
    /// Subtitle.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<StringValue>,
    /// Translated title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translated_title: Option<TranslatedTitle>,
}

/// A citation in a declared format (BibTeX, RIS, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Citation {
    /// The citation format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub citation_type: Option<String>,
    /// The citation text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub citation_value: Option<String>,
}

/// The contributor list of a work.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Contributors {
    /// The contributors.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub contributor: Vec<Contributor>,
}

/// One contributor to a work.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Contributor {
    /// The contributor's ORCID identifier block, if linked.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contributor_orcid: Option<super::common::OrcidIdentifier>,
    /// Credit name as it appears on the work.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit_name: Option<StringValue>,
    /// Contact email, rarely populated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contributor_email: Option<String>,
    /// Sequence and role attributes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contributor_attributes: Option<ContributorAttributes>,
}

/// Sequence and role of a contributor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ContributorAttributes {
    /// `first` or `additional`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contributor_sequence: Option<String>,
    /// Role, e.g. `author` or `editor`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contributor_role: Option<String>,
}
