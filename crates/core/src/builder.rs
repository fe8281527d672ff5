//! Chapter builder.
//!
//! Turns raw authoring input into a well-formed [`Chapter`]. Nothing here can fail: every
//! missing or malformed field degrades to a default instead of producing an error.
//!
//! | Field     | Rule                                                                  |
//! |-----------|-----------------------------------------------------------------------|
//! | `title`   | as-is if non-empty, else `"Untitled"`                                 |
//! | `number`  | leading base-10 integer, else `1`                                     |
//! | `tags`    | split on `,`, each trimmed, empty pieces dropped, order/dupes kept    |
//! | `teaser`  | as-is, empty allowed                                                  |
//! | `cover`   | as-is if non-empty, else the placeholder cover                        |
//! | `content` | as-is if non-empty, else `"(Your chapter text…)"`                     |

use crate::chapter::Chapter;
use crate::constants::{
    DEFAULT_CHAPTER_NUMBER, DEFAULT_TITLE, PLACEHOLDER_CONTENT, PLACEHOLDER_COVER,
    TAG_INPUT_SEPARATOR,
};
use saga_uuid::ChapterId;
use serde::{Deserialize, Serialize};

/// A chapter number as typed by an author: either text from a form field or a number.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawNumber {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl RawNumber {
    /// Resolves the raw value to a chapter number.
    ///
    /// - Integers are used as-is.
    /// - Finite floats are truncated toward zero; NaN and infinities fall back to `1`.
    /// - Text goes through [`parse_chapter_number`].
    pub fn resolve(&self) -> i64 {
        match self {
            RawNumber::Integer(n) => *n,
            RawNumber::Float(f) if f.is_finite() => f.trunc() as i64,
            RawNumber::Float(_) => DEFAULT_CHAPTER_NUMBER,
            RawNumber::Text(s) => parse_chapter_number(s),
        }
    }
}

impl From<i64> for RawNumber {
    fn from(value: i64) -> Self {
        RawNumber::Integer(value)
    }
}

impl From<&str> for RawNumber {
    fn from(value: &str) -> Self {
        RawNumber::Text(value.to_owned())
    }
}

impl From<String> for RawNumber {
    fn from(value: String) -> Self {
        RawNumber::Text(value)
    }
}

/// Raw authoring input. Every field is optional.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChapterDraft {
    pub title: Option<String>,
    pub number: Option<RawNumber>,
    /// Comma-separated tags.
    pub tags: Option<String>,
    pub teaser: Option<String>,
    pub cover: Option<String>,
    pub content: Option<String>,
}

impl ChapterDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_number(mut self, number: impl Into<RawNumber>) -> Self {
        self.number = Some(number.into());
        self
    }

    pub fn with_tags(mut self, tags: impl Into<String>) -> Self {
        self.tags = Some(tags.into());
        self
    }

    pub fn with_teaser(mut self, teaser: impl Into<String>) -> Self {
        self.teaser = Some(teaser.into());
        self
    }

    pub fn with_cover(mut self, cover: impl Into<String>) -> Self {
        self.cover = Some(cover.into());
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }
}

/// Chapter construction operations.
///
/// Zero-sized namespace; all methods are associated functions.
pub struct ChapterBuilder;

impl ChapterBuilder {
    /// Builds a chapter from a draft, applying defaults, with a freshly generated id.
    ///
    /// The caller is responsible for inserting the result into a catalog with
    /// [`Catalog::append`](crate::catalog::Catalog::append).
    pub fn build(draft: ChapterDraft) -> Chapter {
        Self::build_with_id(ChapterId::generate(), draft)
    }

    /// Builds a chapter from a draft using the supplied id.
    pub fn build_with_id(id: ChapterId, draft: ChapterDraft) -> Chapter {
        let chapter = Chapter {
            id,
            number: draft
                .number
                .as_ref()
                .map(RawNumber::resolve)
                .unwrap_or(DEFAULT_CHAPTER_NUMBER),
            title: non_empty_or(draft.title, DEFAULT_TITLE),
            teaser: draft.teaser.unwrap_or_default(),
            cover: non_empty_or(draft.cover, PLACEHOLDER_COVER),
            tags: draft.tags.as_deref().map(split_tags).unwrap_or_default(),
            content: non_empty_or(draft.content, PLACEHOLDER_CONTENT),
        };
        tracing::debug!(
            chapter_id = %chapter.id,
            number = chapter.number,
            "built chapter from draft"
        );
        chapter
    }
}

/// Parses an authored chapter number.
///
/// Mirrors a lenient leading-integer parse: leading whitespace is skipped, an optional `+` or
/// `-` sign is read, then as many ASCII digits as follow. Anything after the digits is
/// ignored, so `"12abc"` is `12` and `"3.9"` is `3`. Input with no leading digits is `1`.
/// Magnitudes beyond the `i64` range saturate.
pub fn parse_chapter_number(raw: &str) -> i64 {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let digits: Vec<i64> = rest
        .bytes()
        .take_while(u8::is_ascii_digit)
        .map(|b| i64::from(b - b'0'))
        .collect();
    if digits.is_empty() {
        return DEFAULT_CHAPTER_NUMBER;
    }

    digits.into_iter().fold(0i64, |acc, d| {
        if negative {
            acc.saturating_mul(10).saturating_sub(d)
        } else {
            acc.saturating_mul(10).saturating_add(d)
        }
    })
}

/// Splits comma-separated tag input.
///
/// Pieces are trimmed; pieces empty after trimming are dropped. Order and duplicates are kept.
pub fn split_tags(raw: &str) -> Vec<String> {
    raw.split(TAG_INPUT_SEPARATOR)
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_owned)
        .collect()
}

fn non_empty_or(value: Option<String>, fallback: &str) -> String {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => fallback.to_owned(),
    }
}
