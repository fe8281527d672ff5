//! Presentation projections.
//!
//! Shapes the renderers (REST, CLI) display. They carry no state of their own and are derived
//! from a [`Chapter`] or the hero cover on demand.

use crate::chapter::Chapter;
use crate::constants::{CARD_TAG_LIMIT, SAGA_NAME, STORY_TAGLINE, STORY_TITLE};
use crate::hero::HeroCover;
use chrono::{Datelike, Utc};
use saga_uuid::ChapterId;

/// A collapsed chapter card in the list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChapterCard {
    pub id: ChapterId,
    pub number: i64,
    /// `"Chapter {number}"`.
    pub label: String,
    /// At most the first three tags.
    pub tags: Vec<String>,
    pub title: String,
    pub teaser: String,
    pub cover: String,
}

impl ChapterCard {
    pub fn from_chapter(chapter: &Chapter) -> Self {
        Self {
            id: chapter.id.clone(),
            number: chapter.number,
            label: format!("Chapter {}", chapter.number),
            tags: chapter.tags.iter().take(CARD_TAG_LIMIT).cloned().collect(),
            title: chapter.title.clone(),
            teaser: chapter.teaser.clone(),
            cover: chapter.cover.clone(),
        }
    }
}

/// The full-text reading view of one chapter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReadingView {
    pub id: ChapterId,
    /// `"Chapter {number}: {title}"`.
    pub heading: String,
    pub tags: Vec<String>,
    pub cover: String,
    /// Body with line breaks preserved.
    pub content: String,
}

impl ReadingView {
    pub fn from_chapter(chapter: &Chapter) -> Self {
        Self {
            id: chapter.id.clone(),
            heading: format!("Chapter {}: {}", chapter.number, chapter.title),
            tags: chapter.tags.clone(),
            cover: chapter.cover.clone(),
            content: chapter.content.clone(),
        }
    }
}

/// Static site details plus the current hero image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteInfo {
    pub saga: String,
    pub title: String,
    pub tagline: String,
    pub hero_url: String,
    pub footer: String,
}

impl SiteInfo {
    /// Site details with the footer stamped with the current year (UTC).
    pub fn current(hero: &HeroCover) -> Self {
        Self::for_year(Utc::now().year(), hero)
    }

    pub fn for_year(year: i32, hero: &HeroCover) -> Self {
        Self {
            saga: SAGA_NAME.to_owned(),
            title: STORY_TITLE.to_owned(),
            tagline: STORY_TAGLINE.to_owned(),
            hero_url: hero.url().to_owned(),
            footer: format!(
                "© {year} Deuman Galaxy — A fan/author site for \"Extinction’s Equation\"."
            ),
        }
    }
}
