//! The top-level ORCID record and its activities summary.

use serde::{Deserialize, Serialize};

use super::activities::{Fundings, PeerReviews, ResearchResources};
use super::affiliations::{
    Distinctions, Educations, Employments, InvitedPositions, Memberships, Qualifications, Services,
};
use super::common::{DateValue, OrcidIdentifier, Source};
use super::person::Person;
use super::works::Works;

/// A complete ORCID record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Record {
    /// The record's identifier block.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orcid_identifier: Option<OrcidIdentifier>,
    /// User preferences.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferences: Option<Preferences>,
    /// Registration and claim history.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub history: Option<History>,
    /// The person section.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub person: Option<Person>,
    /// The activities summary.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activities_summary: Option<ActivitiesSummary>,
    /// API path of this record.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// Record-level user preferences.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    /// Preferred locale.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
}

/// Registration and claim history of a record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct History {
    /// How the record was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_method: Option<String>,
    /// When registration was completed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completion_date: Option<DateValue>,
    /// When the record was submitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submission_date: Option<DateValue>,
    /// When the record was last modified.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified_date: Option<DateValue>,
    /// Whether the record has been claimed.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub claimed: bool,
    /// Creating source.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<Source>,
    /// When the record was deactivated, if it was.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deactivation_date: Option<DateValue>,
    /// Whether an email on the record is verified.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub verified_email: bool,
    /// Whether the primary email is verified.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub verified_primary_email: bool,
}

/// A summary of every activity section on a record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ActivitiesSummary {
    /// When any activity was last modified.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified_date: Option<DateValue>,
    /// Distinctions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distinctions: Option<Distinctions>,
    /// Educations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub educations: Option<Educations>,
    /// Employments.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employments: Option<Employments>,
    /// Fundings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fundings: Option<Fundings>,
    /// Invited positions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invited_positions: Option<InvitedPositions>,
    /// Memberships.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memberships: Option<Memberships>,
    /// Peer reviews.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub peer_reviews: Option<PeerReviews>,
    /// Qualifications.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qualifications: Option<Qualifications>,
    /// Research resources.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub research_resources: Option<ResearchResources>,
    /// Services.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub services: Option<Services>,
    /// Works.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub works: Option<Works>,
    /// API path of this summary.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}
