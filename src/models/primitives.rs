//! Primitive types and newtypes for type-safe API interactions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::{Error, Result};

/// An ORCID iD: sixteen characters in four dash-separated groups, the last
/// character being a mod 11-2 check digit (`0`-`9` or `X`).
///
/// Construction via [`OrcidId::new`] is unchecked so that identifiers read
/// back from API responses round-trip untouched. Use [`OrcidId::validated`]
/// when the input comes from a user.
///
/// # Example
///
/// ```
/// use orcid_rs::OrcidId;
///
/// let id = OrcidId::validated("https://orcid.org/0000-0002-1825-0097").unwrap();
/// assert_eq!(id.as_str(), "0000-0002-1825-0097");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrcidId(String);

impl OrcidId {
    /// Wrap a string as an ORCID iD without validation.
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Extract an ORCID iD from user input and normalize it.
    ///
    /// Accepts bare iDs, undashed digit runs, and `https://orcid.org/...`
    /// URLs; the result is uppercased and re-dashed into the canonical
    /// four-group form. No checksum validation is performed.
    pub fn parse(input: &str) -> Self {
        let tail = input
            .trim()
            .rsplit('/')
            .next()
            .unwrap_or_default()
            .replace('-', "")
            .to_uppercase();

        if tail.len() == 16 {
            Self(format!(
                "{}-{}-{}-{}",
                &tail[0..4],
                &tail[4..8],
                &tail[8..12],
                &tail[12..16]
            ))
        } else {
            Self(tail)
        }
    }

    /// Extract, normalize, and validate an ORCID iD.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidId`] if the iD is not sixteen characters,
    /// contains a non-digit in the first fifteen positions, or fails the
    /// ISO 7064 mod 11-2 checksum.
    pub fn validated(input: &str) -> Result<Self> {
        let id = Self::parse(input);
        id.validate()?;
        Ok(id)
    }

    /// Validate the structure and checksum of this iD.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidId`] describing the first problem found.
    pub fn validate(&self) -> Result<()> {
        let digits: String = self.0.replace('-', "");

        if digits.len() != 16 {
            return Err(Error::InvalidId(format!(
                "expected 16 characters, got {}",
                digits.len()
            )));
        }

        for (i, c) in digits.chars().take(15).enumerate() {
            if !c.is_ascii_digit() {
                return Err(Error::InvalidId(format!(
                    "non-digit character at position {i}"
                )));
            }
        }

        let check = digits.as_bytes()[15] as char;
        if !check.is_ascii_digit() && check != 'X' {
            return Err(Error::InvalidId("bad check digit".into()));
        }

        if !checksum_ok(&digits) {
            return Err(Error::InvalidId("checksum mismatch".into()));
        }

        Ok(())
    }

    /// Get the iD as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// ISO 7064 mod 11-2 over the first fifteen digits; `X` encodes a check
/// value of ten.
fn checksum_ok(digits: &str) -> bool {
    let bytes = digits.as_bytes();
    let mut total: u32 = 0;
    for &b in &bytes[..15] {
        total = (total + u32::from(b - b'0')) * 2;
    }

    let remainder = total % 11;
    let expected = (12 - remainder) % 11;

    match bytes[15] {
        b'X' => expected == 10,
        b => expected == u32::from(b - b'0'),
    }
}

impl fmt::Display for OrcidId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for OrcidId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for OrcidId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for OrcidId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A put-code: the numeric identifier the ORCID registry assigns to an
/// individual item (a work, an affiliation, a keyword, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PutCode(u64);

impl PutCode {
    /// Create a put-code from its numeric value.
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// The numeric value.
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for PutCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for PutCode {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl FromStr for PutCode {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

/// The four ORCID API hosts.
///
/// The public API serves the publicly visible portion of records; the
/// member API requires a member credential. Both have sandbox twins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    /// Public production API.
    #[default]
    Public,
    /// Member production API.
    Member,
    /// Public sandbox API.
    PublicSandbox,
    /// Member sandbox API.
    MemberSandbox,
}

impl Environment {
    /// Get the base URL for this environment, without a trailing slash.
    pub fn base_url(&self) -> &'static str {
        match self {
            Environment::Public => "https://pub.orcid.org/v3.0",
            Environment::Member => "https://api.orcid.org/v3.0",
            Environment::PublicSandbox => "https://pub.sandbox.orcid.org/v3.0",
            Environment::MemberSandbox => "https://api.sandbox.orcid.org/v3.0",
        }
    }

    /// Returns `true` for the two sandbox hosts.
    pub fn is_sandbox(&self) -> bool {
        matches!(self, Environment::PublicSandbox | Environment::MemberSandbox)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Public => write!(f, "public"),
            Environment::Member => write!(f, "member"),
            Environment::PublicSandbox => write!(f, "public-sandbox"),
            Environment::MemberSandbox => write!(f, "member-sandbox"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_from_url() {
        let id = OrcidId::parse("https://orcid.org/0000-0002-1825-0097");
        assert_eq!(id.as_str(), "0000-0002-1825-0097");
    }

    #[test]
    fn parse_normalizes_undashed_lowercase() {
        let id = OrcidId::parse("000000021694233x");
        assert_eq!(id.as_str(), "0000-0002-1694-233X");
    }

    #[test]
    fn validate_accepts_known_ids() {
        assert!(OrcidId::new("0000-0002-1825-0097").validate().is_ok());
        // `X` check digit
        assert!(OrcidId::new("0000-0002-1694-233X").validate().is_ok());
    }

    #[test]
    fn validate_rejects_bad_checksum() {
        let err = OrcidId::new("0000-0002-1825-0098").validate().unwrap_err();
        assert!(matches!(err, Error::InvalidId(_)));
    }

    #[test]
    fn validate_rejects_bad_shape() {
        assert!(OrcidId::new("0000-0002-1825").validate().is_err());
        assert!(OrcidId::new("0000-0002-1825-00a7").validate().is_err());
        assert!(OrcidId::new("0000-0002-1825-009Y").validate().is_err());
    }

    #[test]
    fn validated_round_trips_url_input() {
        let id = OrcidId::validated("https://orcid.org/0000-0002-1825-0097").unwrap();
        assert_eq!(id.to_string(), "0000-0002-1825-0097");
    }

    #[test]
    fn put_code_parses() {
        let code: PutCode = "92636200".parse().unwrap();
        assert_eq!(code.value(), 92_636_200);
    }

    #[test]
    fn environment_urls() {
        assert_eq!(Environment::Public.base_url(), "https://pub.orcid.org/v3.0");
        assert_eq!(
            Environment::MemberSandbox.base_url(),
            "https://api.sandbox.orcid.org/v3.0"
        );
        assert!(Environment::PublicSandbox.is_sandbox());
        assert!(!Environment::Member.is_sandbox());
    }
}
