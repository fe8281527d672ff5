//! Process-scoped site state.
//!
//! Bundles the catalog and the hero cover behind the operations a renderer needs. State lives
//! only in memory and is lost when the process ends.

use crate::builder::{ChapterBuilder, ChapterDraft};
use crate::catalog::Catalog;
use crate::chapter::Chapter;
use crate::config::CoreConfig;
use crate::hero::HeroCover;
use crate::seed;
use crate::view::{ChapterCard, ReadingView, SiteInfo};
use crate::SagaResult;
use saga_uuid::ChapterId;

/// Everything a single site instance owns.
#[derive(Clone, Debug)]
pub struct SiteState {
    catalog: Catalog,
    hero: HeroCover,
}

impl SiteState {
    /// Builds the initial state from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured seed file cannot be read or parsed.
    pub fn initialise(cfg: &CoreConfig) -> SagaResult<Self> {
        let chapters = match cfg.seed_path() {
            Some(path) => seed::load_seed_from_path(path)?,
            None => seed::embedded_seed()?,
        };
        tracing::info!("site initialised with {} chapters", chapters.len());

        Ok(Self::with_parts(
            Catalog::new(chapters),
            HeroCover::new(cfg.hero_default()),
        ))
    }

    pub fn with_parts(catalog: Catalog, hero: HeroCover) -> Self {
        Self { catalog, hero }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn hero(&self) -> &HeroCover {
        &self.hero
    }

    pub fn hero_mut(&mut self) -> &mut HeroCover {
        &mut self.hero
    }

    /// Stores `query` as the current query and returns the matching cards.
    pub fn search(&mut self, query: &str) -> Vec<ChapterCard> {
        self.catalog.set_query(query);
        self.cards()
    }

    /// Cards for the current query.
    pub fn cards(&self) -> Vec<ChapterCard> {
        self.catalog
            .view()
            .into_iter()
            .map(ChapterCard::from_chapter)
            .collect()
    }

    /// Builds a chapter from `draft` and appends it to the catalog.
    pub fn add_chapter(&mut self, draft: ChapterDraft) -> Chapter {
        let chapter = ChapterBuilder::build(draft);
        self.catalog.append(chapter.clone());
        tracing::info!("added chapter {} ({})", chapter.id, chapter.title);
        chapter
    }

    pub fn read(&self, id: &ChapterId) -> Option<ReadingView> {
        self.catalog.get(id).map(ReadingView::from_chapter)
    }

    pub fn site_info(&self) -> SiteInfo {
        SiteInfo::current(&self.hero)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn initialise_from_bundled_seed() {
        let state = SiteState::initialise(&CoreConfig::default()).unwrap();
        assert_eq!(state.catalog().len(), 3);
        assert!(state.hero().is_default());
    }

    #[test]
    fn initialise_from_seed_file_and_custom_hero() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "chapters:\n  - id: x\n    number: 2\n    title: Solo").unwrap();
        let cfg = CoreConfig::new(
            Some(file.path().to_path_buf()),
            "https://example.com/hero.jpg".into(),
        )
        .unwrap();

        let state = SiteState::initialise(&cfg).unwrap();
        assert_eq!(state.catalog().len(), 1);
        assert_eq!(state.hero().url(), "https://example.com/hero.jpg");
    }

    #[test]
    fn added_chapter_is_searchable_and_readable() {
        let mut state = SiteState::initialise(&CoreConfig::default()).unwrap();
        let added = state.add_chapter(
            ChapterDraft::new()
                .with_title("Nova Rising")
                .with_number("0")
                .with_tags("Nova, Epilogue"),
        );

        assert_eq!(state.catalog().len(), 4);

        let cards = state.search("nova");
        let ids: Vec<&str> = cards.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, [added.id.as_str(), "ch2", "ch3"]);
        assert_eq!(state.catalog().query(), "nova");

        let view = state.read(&added.id).unwrap();
        assert_eq!(view.heading, "Chapter 0: Nova Rising");
        assert_eq!(view.content, "(Your chapter text…)");
    }

    #[test]
    fn search_with_no_match_returns_no_cards() {
        let mut state = SiteState::initialise(&CoreConfig::default()).unwrap();
        assert!(state.search("zzzz").is_empty());
    }
}
