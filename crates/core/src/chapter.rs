//! The chapter record.
//!
//! A [`Chapter`] is one titled unit of story content. Chapters are immutable once they enter
//! the catalog; the only way to produce a new one is through the
//! [`ChapterBuilder`](crate::builder::ChapterBuilder) or the seed loader.

use crate::constants::SEARCH_FIELD_SEPARATOR;
use saga_uuid::ChapterId;
use serde::{Deserialize, Deserializer, Serialize};

/// A unit of story content.
///
/// When deserialised, absent or `null` text fields become empty strings and absent or `null`
/// tags become an empty list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    /// Opaque identifier, unique within the catalog.
    pub id: ChapterId,

    /// Display ordering key. Not unique, not contiguous, may be zero or negative.
    pub number: i64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub teaser: String,

    /// Image URL. Never validated.
    #[serde(default, deserialize_with = "null_as_default")]
    pub cover: String,

    /// Tags in insertion order; duplicates are kept.
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,

    /// Full body text with line breaks preserved.
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String,
}

impl Chapter {
    /// Text searched by catalog queries.
    ///
    /// Title, teaser, content and every tag joined with a single space. A query can match
    /// across a field boundary (for example the end of the title and the start of the teaser);
    /// that leniency is accepted.
    pub fn search_text(&self) -> String {
        let mut parts: Vec<&str> = Vec::with_capacity(3 + self.tags.len());
        parts.push(&self.title);
        parts.push(&self.teaser);
        parts.push(&self.content);
        parts.extend(self.tags.iter().map(String::as_str));
        parts.join(SEARCH_FIELD_SEPARATOR)
    }

    /// Returns true if `needle` occurs in the lower-cased search text.
    ///
    /// `needle` must already be lower-cased.
    pub fn matches_lowercase(&self, needle: &str) -> bool {
        self.search_text().to_lowercase().contains(needle)
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chapter() -> Chapter {
        Chapter {
            id: ChapterId::parse("ch9").unwrap(),
            number: 9,
            title: "Starfall".into(),
            teaser: "Light breaks".into(),
            cover: String::new(),
            tags: vec!["Arav".into(), "Vidhi".into()],
            content: "Line one\nLine two".into(),
        }
    }

    #[test]
    fn search_text_joins_fields_then_tags() {
        assert_eq!(
            chapter().search_text(),
            "Starfall Light breaks Line one\nLine two Arav Vidhi"
        );
    }

    #[test]
    fn matching_is_case_insensitive_on_the_haystack() {
        let c = chapter();
        assert!(c.matches_lowercase("starfall"));
        assert!(c.matches_lowercase("vidhi"));
        assert!(!c.matches_lowercase("nova"));
    }

    #[test]
    fn matching_can_cross_field_boundaries() {
        // Known limitation of the space-joined search text.
        assert!(chapter().matches_lowercase("starfall light"));
        assert!(chapter().matches_lowercase("arav vidhi"));
    }

    #[test]
    fn null_and_missing_fields_deserialise_as_empty() {
        let json = r#"{"id":"ch4","number":4,"title":null,"tags":null}"#;
        let c: Chapter = serde_json::from_str(json).unwrap();

        assert_eq!(c.title, "");
        assert_eq!(c.teaser, "");
        assert_eq!(c.cover, "");
        assert!(c.tags.is_empty());
        assert_eq!(c.content, "");
        assert!(!c.matches_lowercase("x"));
    }
}
