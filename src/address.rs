//! Email address parsing and mailbox normalization

use crate::error::{NormalizeError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A raw `local@domain` address, split on its first `@`
#[derive(Debug, Clone, Serialize, PartialEq, Eq, Hash)]
pub struct RawEmail {
    local_part: String,
    domain: String,
}

impl RawEmail {
    /// Parse an address without altering it
    ///
    /// The domain is everything after the first `@`, taken verbatim. An
    /// address whose local part would be empty after normalization is
    /// rejected here so that [`RawEmail::normalize`] cannot fail.
    pub fn parse(s: &str) -> Result<Self> {
        let (local, domain) = s
            .split_once('@')
            .ok_or_else(|| NormalizeError::MissingSeparator(s.to_string()))?;

        if domain.is_empty() {
            return Err(NormalizeError::EmptyDomain(s.to_string()));
        }

        if untagged(local).chars().all(|c| c == '.') {
            return Err(NormalizeError::EmptyLocalPart(s.to_string()));
        }

        Ok(Self {
            local_part: local.to_string(),
            domain: domain.to_string(),
        })
    }

    /// Local part (before the first `@`), as written
    #[must_use]
    pub fn local_part(&self) -> &str {
        &self.local_part
    }

    #[must_use]
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// The address as originally written
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}@{}", self.local_part, self.domain)
    }

    /// Map this address to the mailbox that actually receives its mail
    ///
    /// Everything from the first `+` of the local part on is dropped, then
    /// every `.` in what remains. The domain is kept as is, dots included.
    /// No case folding takes place.
    #[must_use]
    pub fn normalize(&self) -> NormalizedEmail {
        let local = untagged(&self.local_part).replace('.', "");
        NormalizedEmail(format!("{local}@{}", self.domain))
    }
}

impl fmt::Display for RawEmail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.local_part, self.domain)
    }
}

impl FromStr for RawEmail {
    type Err = NormalizeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Local part with its plus-tag cut off
fn untagged(local: &str) -> &str {
    local.split_once('+').map_or(local, |(head, _)| head)
}

/// A mailbox in canonical `local@domain` form: no dots and no plus-tag in
/// the local part
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct NormalizedEmail(String);

impl NormalizedEmail {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn local_part(&self) -> &str {
        self.0.split_once('@').map_or(self.0.as_str(), |(local, _)| local)
    }

    #[must_use]
    pub fn domain(&self) -> &str {
        self.0.split_once('@').map_or("", |(_, domain)| domain)
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for NormalizedEmail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for NormalizedEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for NormalizedEmail {
    type Err = NormalizeError;

    fn from_str(s: &str) -> Result<Self> {
        normalize_email(s)
    }
}

impl TryFrom<String> for NormalizedEmail {
    type Error = NormalizeError;

    fn try_from(s: String) -> Result<Self> {
        normalize_email(&s)
    }
}

impl From<NormalizedEmail> for String {
    fn from(email: NormalizedEmail) -> Self {
        email.0
    }
}

/// Parse and normalize a single raw address
pub fn normalize_email(raw: &str) -> Result<NormalizedEmail> {
    RawEmail::parse(raw).map(|email| email.normalize())
}
