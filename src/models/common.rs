//! Value wrappers and shared shapes used across the ORCID schema.
//!
//! The registry wraps most scalar values in single-field objects
//! (`{"value": ...}`); [`StringValue`] and [`DateValue`] mirror that.

use chrono::{DateTime, TimeZone, Utc};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A wrapped string value (`{"value": "..."}`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringValue {
    /// The wrapped value.
    #[serde(default)]
    pub value: String,
}

impl StringValue {
    /// Wrap a string.
    pub fn new(value: impl Into<String>) -> Self {
        Self { value: value.into() }
    }
}

impl fmt::Display for StringValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl From<&str> for StringValue {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// A wrapped timestamp.
///
/// The registry serves these as Unix-millisecond integers on most
/// endpoints and as RFC 3339 strings on a few; both decode here.
/// Serialization always emits milliseconds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateValue {
    /// The timestamp, if one was present.
    pub value: Option<DateTime<Utc>>,
}

impl DateValue {
    /// Wrap a timestamp.
    pub fn new(value: DateTime<Utc>) -> Self {
        Self { value: Some(value) }
    }
}

impl<'de> Deserialize<'de> for DateValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Raw {
            #[serde(default)]
            value: Option<Stamp>,
        }

        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Stamp {
            Millis(i64),
            Text(String),
        }

        fn from_millis<E: serde::de::Error>(ms: i64) -> Result<DateTime<Utc>, E> {
            Utc.timestamp_millis_opt(ms)
                .single()
                .ok_or_else(|| E::custom(format!("timestamp out of range: {ms}")))
        }

        let raw = Raw::deserialize(deserializer)?;
        let value = match raw.value {
            None => None,
            Some(Stamp::Millis(ms)) => Some(from_millis(ms)?),
            // XML text nodes arrive as strings even when they hold millis.
            Some(Stamp::Text(s)) => match s.parse::<i64>() {
                Ok(ms) => Some(from_millis(ms)?),
                Err(_) => Some(
                    DateTime::parse_from_rfc3339(&s)
                        .map_err(D::Error::custom)?
                        .with_timezone(&Utc),
                ),
            },
        };
        Ok(DateValue { value })
    }
}

impl Serialize for DateValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Raw {
            #[serde(skip_serializing_if = "Option::is_none")]
            value: Option<i64>,
        }

        Raw {
            value: self.value.map(|t| t.timestamp_millis()),
        }
        .serialize(serializer)
    }
}

/// A date that may be incomplete (year only, year and month, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FuzzyDate {
    /// Year, as the registry's wrapped string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<StringValue>,
    /// Month.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month: Option<StringValue>,
    /// Day.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day: Option<StringValue>,
}

/// The identifier block attached to records and sources.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrcidIdentifier {
    /// Full URI form, e.g. `https://orcid.org/0000-0002-1825-0097`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    /// The bare iD.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// The registry host.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
}

/// Who asserted a piece of data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Source {
    /// Asserting ORCID iD, when a person made the assertion.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_orcid: Option<OrcidIdentifier>,
    /// Asserting client, when a member integration made the assertion.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_client_id: Option<SourceClientId>,
    /// Display name of the source.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_name: Option<StringValue>,
    /// Origin ORCID iD for delegated assertions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assertion_origin_orcid: Option<OrcidIdentifier>,
    /// Origin client for delegated assertions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assertion_origin_client_id: Option<SourceClientId>,
    /// Origin display name for delegated assertions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assertion_origin_name: Option<StringValue>,
}

/// A member client identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceClientId {
    /// Full URI form.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    /// The bare client id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// The registry host.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
}

/// A collection of external identifiers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ExternalIds {
    /// The identifiers.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub external_id: Vec<ExternalId>,
}

/// One external identifier (a DOI, an ISSN, a grant number, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ExternalId {
    /// Identifier type, e.g. `doi`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id_type: Option<String>,
    /// Identifier value as asserted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id_value: Option<String>,
    /// Registry-normalized form of the value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id_normalized: Option<ExternalIdNormalized>,
    /// Resolvable URL for the identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id_url: Option<StringValue>,
    /// Relationship to the item, e.g. `self` or `part-of`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id_relationship: Option<String>,
}

/// A registry-normalized external identifier value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalIdNormalized {
    /// The normalized value.
    #[serde(default)]
    pub value: String,
    /// Whether the normalization is transient.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub transient: bool,
}

/// An organization attached to an affiliation or funding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Organization {
    /// Organization name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Physical address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<OrganizationAddress>,
    /// Link into an organization identifier registry.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disambiguated_organization: Option<DisambiguatedOrganization>,
}

/// An organization's address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizationAddress {
    /// City.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// Region or state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// ISO country code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

/// A disambiguated organization reference (RINGGOLD, ROR, GRID, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct DisambiguatedOrganization {
    /// Identifier within the disambiguation source.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disambiguated_organization_identifier: Option<String>,
    /// The disambiguation source, e.g. `ROR`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disambiguation_source: Option<String>,
}

/// A translated title with its language code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct TranslatedTitle {
    /// The translated text.
    #[serde(default)]
    pub value: String,
    /// BCP 47 language code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_value_from_millis() {
        let date: DateValue = serde_json::from_str(r#"{"value": 1672531200000}"#).unwrap();
        assert_eq!(date.value.unwrap().timestamp_millis(), 1_672_531_200_000);
    }

    #[test]
    fn date_value_from_rfc3339() {
        let date: DateValue = serde_json::from_str(r#"{"value": "2023-01-01T00:00:00Z"}"#).unwrap();
        assert_eq!(date.value.unwrap().timestamp_millis(), 1_672_531_200_000);
    }

    #[test]
    fn date_value_missing_field() {
        let date: DateValue = serde_json::from_str("{}").unwrap();
        assert!(date.value.is_none());
    }

    #[test]
    fn date_value_serializes_as_millis() {
        let date: DateValue = serde_json::from_str(r#"{"value": "2023-01-01T00:00:00Z"}"#).unwrap();
        let out = serde_json::to_string(&date).unwrap();
        assert_eq!(out, r#"{"value":1672531200000}"#);
    }

    #[test]
    fn string_value_display() {
        let v = StringValue::new("Laurel University");
        assert_eq!(v.to_string(), "Laurel University");
    }
}
