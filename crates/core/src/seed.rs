//! Seed catalog loading.
//!
//! The catalog starts from a fixed set of chapters. A copy is bundled into the crate; an
//! alternative YAML file with the same shape can be supplied at startup:
//!
//! ```yaml
//! chapters:
//!   - id: ch1
//!     number: 1
//!     title: "Ashes Over Kaen’Vos"
//!     cover: "https://…"
//!     tags: [Ojas, Arav]
//!     teaser: "…"
//!     content: "…"
//! ```
//!
//! Unknown keys are rejected. Absent or `null` title, cover and content receive the same
//! defaults the chapter builder applies; absent teaser and tags are empty.

use crate::chapter::Chapter;
use crate::constants::{DEFAULT_TITLE, PLACEHOLDER_CONTENT, PLACEHOLDER_COVER};
use crate::{SagaError, SagaResult};
use saga_uuid::ChapterId;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

const EMBEDDED_SEED: &str = include_str!("../seed/chapters.yaml");

/// Parses the bundled seed catalog.
pub fn embedded_seed() -> SagaResult<Vec<Chapter>> {
    parse_seed(EMBEDDED_SEED)
}

/// Reads and parses a seed catalog from disk.
///
/// # Errors
///
/// Returns [`SagaError::FileRead`] if the file cannot be read, and any error from
/// [`parse_seed`].
pub fn load_seed_from_path(path: &Path) -> SagaResult<Vec<Chapter>> {
    let text = std::fs::read_to_string(path).map_err(SagaError::FileRead)?;
    let chapters = parse_seed(&text)?;
    tracing::info!(
        "loaded {} seed chapters from {}",
        chapters.len(),
        path.display()
    );
    Ok(chapters)
}

/// Parses seed catalog YAML text.
///
/// Uses `serde_path_to_error` so a schema mismatch reports the failing field
/// (for example `chapters[1].number`).
///
/// # Errors
///
/// - [`SagaError::SeedSchema`] if the YAML does not match the seed schema.
/// - [`SagaError::ChapterId`] if an id is empty or malformed.
/// - [`SagaError::DuplicateChapterId`] if two chapters share an id.
pub fn parse_seed(yaml_text: &str) -> SagaResult<Vec<Chapter>> {
    let deserializer = serde_yaml::Deserializer::from_str(yaml_text);
    let wire = match serde_path_to_error::deserialize::<_, SeedWire>(deserializer) {
        Ok(parsed) => parsed,
        Err(err) => {
            let path = err.path().to_string();
            let path = if path.is_empty() || path == "." {
                "<root>".to_string()
            } else {
                path
            };
            return Err(SagaError::SeedSchema {
                path,
                source: err.into_inner(),
            });
        }
    };

    let mut seen = HashSet::new();
    let mut chapters = Vec::with_capacity(wire.chapters.len());
    for entry in wire.chapters {
        let chapter = entry.into_chapter()?;
        if !seen.insert(chapter.id.clone()) {
            return Err(SagaError::DuplicateChapterId(chapter.id.to_string()));
        }
        chapters.push(chapter);
    }
    Ok(chapters)
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SeedWire {
    #[serde(default)]
    chapters: Vec<ChapterWire>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ChapterWire {
    id: String,
    number: i64,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    teaser: Option<String>,
    #[serde(default)]
    cover: Option<String>,
    #[serde(default)]
    tags: Option<Vec<String>>,
    #[serde(default)]
    content: Option<String>,
}

impl ChapterWire {
    fn into_chapter(self) -> SagaResult<Chapter> {
        Ok(Chapter {
            id: ChapterId::parse(&self.id)?,
            number: self.number,
            title: self.title.unwrap_or_else(|| DEFAULT_TITLE.to_owned()),
            teaser: self.teaser.unwrap_or_default(),
            cover: self.cover.unwrap_or_else(|| PLACEHOLDER_COVER.to_owned()),
            tags: self.tags.unwrap_or_default(),
            content: self.content.unwrap_or_else(|| PLACEHOLDER_CONTENT.to_owned()),
        })
    }
}
