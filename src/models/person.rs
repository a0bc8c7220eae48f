//! The person section of an ORCID record: names, biography, contact
//! details, keywords, and person-level external identifiers.

use serde::{Deserialize, Serialize};

use super::common::{DateValue, Source, StringValue};
use super::primitives::PutCode;

/// The person section of a record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Person {
    /// Name block.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<Name>,
    /// Alternative names.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub other_names: Option<OtherNames>,
    /// Biography.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub biography: Option<Biography>,
    /// Researcher URLs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub researcher_urls: Option<ResearcherUrls>,
    /// Email addresses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emails: Option<Emails>,
    /// Addresses (countries).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub addresses: Option<Addresses>,
    /// Keywords.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Keywords>,
    /// Person-level external identifiers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_identifiers: Option<ExternalIdentifiers>,
    /// API path of this section.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// A person's name block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Name {
    /// When the block was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_date: Option<DateValue>,
    /// When the block was last modified.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified_date: Option<DateValue>,
    /// Given names.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub given_names: Option<StringValue>,
    /// Family name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family_name: Option<StringValue>,
    /// Published credit name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit_name: Option<StringValue>,
    /// Asserting source.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<Source>,
    /// Visibility setting.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<String>,
    /// API path of this block.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// The collection of alternative names.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct OtherNames {
    /// When the collection was last modified.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified_date: Option<DateValue>,
    /// The names.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub other_name: Vec<OtherName>,
    /// API path of this collection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// One alternative name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct OtherName {
    /// When the item was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_date: Option<DateValue>,
    /// When the item was last modified.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified_date: Option<DateValue>,
    /// Asserting source.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<Source>,
    /// The name itself.
    #[serde(default)]
    pub content: String,
    /// Visibility setting.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<String>,
    /// API path of this item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Registry item identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub put_code: Option<PutCode>,
    /// Ordering hint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_index: Option<i64>,
}

/// A biography.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Biography {
    /// When the biography was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_date: Option<DateValue>,
    /// When the biography was last modified.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified_date: Option<DateValue>,
    /// The biography text.
    #[serde(default)]
    pub content: String,
    /// Visibility setting.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<String>,
    /// API path of this block.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// The collection of researcher URLs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ResearcherUrls {
    /// When the collection was last modified.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified_date: Option<DateValue>,
    /// The URLs.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub researcher_url: Vec<ResearcherUrl>,
    /// API path of this collection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// One researcher URL.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ResearcherUrl {
    /// When the item was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_date: Option<DateValue>,
    /// When the item was last modified.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified_date: Option<DateValue>,
    /// Asserting source.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<Source>,
    /// Display name for the link.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_name: Option<String>,
    /// The link itself.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<StringValue>,
    /// Visibility setting.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<String>,
    /// API path of this item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Registry item identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub put_code: Option<PutCode>,
    /// Ordering hint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_index: Option<i64>,
}

/// The collection of email addresses.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Emails {
    /// When the collection was last modified.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified_date: Option<DateValue>,
    /// The addresses.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub email: Vec<Email>,
    /// API path of this collection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// One email address.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Email {
    /// When the item was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_date: Option<DateValue>,
    /// When the item was last modified.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified_date: Option<DateValue>,
    /// Asserting source.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<Source>,
    /// The address itself.
    #[serde(default)]
    pub email: String,
    /// Whether this is the primary address.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub primary: bool,
    /// Whether the address has been verified.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub verified: bool,
    /// Visibility setting.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<String>,
    /// API path of this item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Registry item identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub put_code: Option<PutCode>,
}

/// The collection of addresses.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Addresses {
    /// When the collection was last modified.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified_date: Option<DateValue>,
    /// The addresses.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub address: Vec<Address>,
    /// API path of this collection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// One address; the registry records only the country.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Address {
    /// When the item was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_date: Option<DateValue>,
    /// When the item was last modified.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified_date: Option<DateValue>,
    /// Asserting source.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<Source>,
    /// ISO country code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<StringValue>,
    /// Visibility setting.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<String>,
    /// API path of this item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Registry item identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub put_code: Option<PutCode>,
    /// Ordering hint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_index: Option<i64>,
}

/// The collection of keywords.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Keywords {
    /// When the collection was last modified.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified_date: Option<DateValue>,
    /// The keywords.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keyword: Vec<Keyword>,
    /// API path of this collection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// One keyword.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Keyword {
    /// When the item was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_date: Option<DateValue>,
    /// When the item was last modified.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified_date: Option<DateValue>,
    /// Asserting source.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<Source>,
    /// The keyword itself.
    #[serde(default)]
    pub content: String,
    /// Visibility setting.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<String>,
    /// API path of this item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Registry item identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub put_code: Option<PutCode>,
    /// Ordering hint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_index: Option<i64>,
}

/// The collection of person-level external identifiers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ExternalIdentifiers {
    /// When the collection was last modified.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified_date: Option<DateValue>,
    /// The identifiers.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub external_identifier: Vec<ExternalIdentifier>,
    /// API path of this collection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// One person-level external identifier (Scopus, ResearcherID, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ExternalIdentifier {
    /// When the item was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_date: Option<DateValue>,
    /// When the item was last modified.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified_date: Option<DateValue>,
    /// Asserting source.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<Source>,
    /// Identifier type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id_type: Option<String>,
    /// Identifier value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id_value: Option<String>,
    /// Resolvable URL for the identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id_url: Option<StringValue>,
    /// Relationship to the person.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id_relationship: Option<String>,
    /// Visibility setting.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<String>,
    /// API path of this item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Registry item identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub put_code: Option<PutCode>,
    /// Ordering hint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_index: Option<i64>,
}
