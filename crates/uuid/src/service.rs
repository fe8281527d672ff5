//! Internal implementation of chapter identifiers.

use crate::{UuidError, UuidResult};
use std::{fmt, str::FromStr};

use ::uuid::Uuid;

/// Maximum accepted length for an externally supplied identifier.
const MAX_ID_LEN: usize = 128;

/// Opaque, immutable chapter identifier.
///
/// # When to use this type
/// Use this wrapper whenever you are:
/// - Allocating an identifier for a newly authored chapter ([`ChapterId::generate`]).
/// - Accepting an identifier from *outside* the core (seed file, CLI argument, URL path)
///   ([`ChapterId::parse`]).
///
/// Once you have a `ChapterId`, you can assume it is non-empty, contains no whitespace or
/// control characters, and contains no `/`, so it is safe to embed in a URL path segment.
///
/// # Display format
/// Displays exactly the string it was constructed from. Generated identifiers display in
/// canonical form (32 lowercase hex characters).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChapterId(String);

impl ChapterId {
    /// Generates a fresh random identifier in canonical form.
    ///
    /// The identifier is a UUID version 4 rendered without hyphens.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    /// Validates and wraps an identifier supplied from outside the core.
    ///
    /// Any non-empty string up to 128 bytes is accepted as long as it contains no whitespace,
    /// no control characters and no `/`. The input is **not** normalised: surrounding
    /// whitespace is rejected rather than trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`UuidError::InvalidInput`] if `input` does not meet the rules above.
    pub fn parse(input: &str) -> UuidResult<Self> {
        if input.is_empty() {
            return Err(UuidError::InvalidInput(
                "chapter id cannot be empty".into(),
            ));
        }

        if input.len() > MAX_ID_LEN {
            return Err(UuidError::InvalidInput(format!(
                "chapter id exceeds maximum length of {} bytes",
                MAX_ID_LEN
            )));
        }

        if input
            .chars()
            .any(|c| c.is_whitespace() || c.is_control() || c == '/')
        {
            return Err(UuidError::InvalidInput(format!(
                "chapter id must not contain whitespace, control characters or '/', got: '{}'",
                input.escape_debug()
            )));
        }

        Ok(Self(input.to_owned()))
    }

    /// Returns true if `input` is in canonical generated form.
    ///
    /// This is a purely syntactic check: exactly 32 bytes, lowercase hex only.
    pub fn is_canonical(input: &str) -> bool {
        input.len() == 32
            && input
                .bytes()
                .all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ChapterId {
    fn default() -> Self {
        Self::generate()
    }
}

impl fmt::Display for ChapterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ChapterId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for ChapterId {
    type Err = UuidError;

    /// Equivalent to [`ChapterId::parse`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ChapterId::parse(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ChapterId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for ChapterId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ChapterId::parse(&s).map_err(serde::de::Error::custom)
    }
}
