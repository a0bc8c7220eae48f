//! Affiliation collections: educations, employments, distinctions,
//! invited positions, memberships, qualifications, and services.
//!
//! All seven share one summary shape; only the wrapping field names
//! differ on the wire.

use serde::{Deserialize, Serialize};

use super::common::{DateValue, ExternalIds, FuzzyDate, Organization, Source, StringValue};
use super::primitives::PutCode;

/// A summary of one affiliation, shared by all seven collection kinds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct AffiliationSummary {
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
    /// Department within the organization.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department_name: Option<String>,
    /// Role or title held.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_title: Option<String>,
    /// Start date, possibly incomplete.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<FuzzyDate>,
    /// End date, possibly incomplete; absent for current affiliations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<FuzzyDate>,
    /// The organization.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<Organization>,
    /// Link supplied with the affiliation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<StringValue>,
    /// Identifiers of the affiliation.
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

/// A group of affiliation summaries sharing an identifier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct AffiliationGroup {
    /// When the group was last modified.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified_date: Option<DateValue>,
    /// Identifiers shared by the group.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_ids: Option<ExternalIds>,
    /// The member summaries, each wrapped in a kind marker.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub summaries: Vec<AffiliationSummaryWrap>,
}

/// Wrapper naming the kind of a grouped affiliation summary.
///
/// Exactly one field is populated per element on the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct AffiliationSummaryWrap {
    /// An education.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub education_summary: Option<AffiliationSummary>,
    /// An employment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employment_summary: Option<AffiliationSummary>,
    /// A distinction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distinction_summary: Option<AffiliationSummary>,
    /// An invited position.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invited_position_summary: Option<AffiliationSummary>,
    /// A membership.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub membership_summary: Option<AffiliationSummary>,
    /// A qualification.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qualification_summary: Option<AffiliationSummary>,
    /// A service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_summary: Option<AffiliationSummary>,
}

impl AffiliationSummaryWrap {
    /// The wrapped summary, whichever kind it is.
    pub fn summary(&self) -> Option<&AffiliationSummary> {
        self.education_summary
            .as_ref()
            .or(self.employment_summary.as_ref())
            .or(self.distinction_summary.as_ref())
            .or(self.invited_position_summary.as_ref())
            .or(self.membership_summary.as_ref())
            .or(self.qualification_summary.as_ref())
            .or(self.service_summary.as_ref())
    }
}

macro_rules! affiliation_collection {
    ($(#[$doc:meta])* $name:ident, $summary_field:ident, $summary_rename:literal) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
        #[serde(rename_all = "kebab-case")]
        pub struct $name {
            /// When the collection was last modified.
            #[serde(skip_serializing_if = "Option::is_none")]
            pub last_modified_date: Option<DateValue>,
            /// Ungrouped summaries, as served by some record versions.
            #[serde(rename = $summary_rename, default, skip_serializing_if = "Vec::is_empty")]
            pub $summary_field: Vec<AffiliationSummary>,
            /// Grouped summaries.
            #[serde(default, skip_serializing_if = "Vec::is_empty")]
            pub affiliation_group: Vec<AffiliationGroup>,
            /// API path of this collection.
            #[serde(skip_serializing_if = "Option::is_none")]
            pub path: Option<String>,
        }
    };
}

affiliation_collection!(
    /// The educations collection.
    Educations,
    education_summary,
    "education-summary"
);

affiliation_collection!(
    /// The employments collection.
    Employments,
    employment_summary,
    "employment-summary"
);

affiliation_collection!(
    /// The distinctions collection.
    Distinctions,
    distinction_summary,
    "distinction-summary"
);

affiliation_collection!(
    /// The invited positions collection.
    InvitedPositions,
    invited_position_summary,
    "invited-position-summary"
);

affiliation_collection!(
    /// The memberships collection.
    Memberships,
    membership_summary,
    "membership-summary"
);

affiliation_collection!(
    /// The qualifications collection.
    Qualifications,
    qualification_summary,
    "qualification-summary"
);

affiliation_collection!(
    /// The services collection.
    Services,
    service_summary,
    "service-summary"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_extracts_whichever_kind() {
        let wrap = AffiliationSummaryWrap {
            membership_summary: Some(AffiliationSummary {
                role_title: Some("Fellow".into()),
                ..Default::default()
            }),
            ..Default::default()
        };
        assert_eq!(wrap.summary().unwrap().role_title.as_deref(), Some("Fellow"));

        let empty = AffiliationSummaryWrap::default();
        assert!(empty.summary().is_none());
    }

    #[test]
    fn educations_decode_grouped_and_flat() {
        let body = r#"{
            "education-summary": [{"role-title": "PhD"}],
            "affiliation-group": [{
                "summaries": [{"education-summary": {"role-title": "MSc"}}]
            }],
            "path": "/0000-0002-1825-0097/educations"
        }"#;
        let educations: Educations = serde_json::from_str(body).unwrap();
        assert_eq!(educations.education_summary.len(), 1);
        let grouped = educations.affiliation_group[0].summaries[0]
            .summary()
            .unwrap();
        assert_eq!(grouped.role_title.as_deref(), Some("MSc"));
    }
}
