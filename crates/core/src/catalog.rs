//! Catalog store.
//!
//! Owns the ordered chapter collection and the current search query, and derives the view a
//! caller should render. The collection only ever grows: chapters are appended, never edited
//! or removed.

use crate::chapter::Chapter;
use crate::seed;
use crate::SagaResult;
use saga_uuid::ChapterId;

/// Filters `chapters` by `query` and orders the result by chapter number.
///
/// - A query that is empty after trimming selects every chapter.
/// - Otherwise a chapter is kept iff the lower-cased query occurs in its lower-cased
///   [`search_text`](Chapter::search_text).
/// - The result is sorted ascending by `number`. The sort is stable, so chapters sharing a
///   number keep their relative order from `chapters`.
///
/// Pure and total. An empty result is valid; callers show an empty-state message for it.
pub fn filter_and_sort<'a>(chapters: &'a [Chapter], query: &str) -> Vec<&'a Chapter> {
    let mut view: Vec<&Chapter> = if query.trim().is_empty() {
        chapters.iter().collect()
    } else {
        let needle = query.to_lowercase();
        chapters
            .iter()
            .filter(|chapter| chapter.matches_lowercase(&needle))
            .collect()
    };

    view.sort_by_key(|chapter| chapter.number);
    view
}

/// The ordered chapter collection plus the current query.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Catalog {
    chapters: Vec<Chapter>,
    query: String,
}

impl Catalog {
    /// Creates a catalog holding `chapters` in the given order, with an empty query.
    pub fn new(chapters: Vec<Chapter>) -> Self {
        Self {
            chapters,
            query: String::new(),
        }
    }

    /// Creates a catalog from the bundled seed chapters.
    ///
    /// # Errors
    ///
    /// Returns an error only if the bundled seed file is malformed.
    pub fn seeded() -> SagaResult<Self> {
        Ok(Self::new(seed::embedded_seed()?))
    }

    /// All chapters in insertion order.
    pub fn chapters(&self) -> &[Chapter] {
        &self.chapters
    }

    pub fn len(&self) -> usize {
        self.chapters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chapters.is_empty()
    }

    /// Appends one chapter at the end of the collection.
    ///
    /// Prior entries and their order are untouched. No re-sort happens here (ordering is
    /// recomputed by [`view`](Self::view)) and neither ids nor numbers are deduplicated.
    pub fn append(&mut self, chapter: Chapter) {
        tracing::debug!(
            chapter_id = %chapter.id,
            number = chapter.number,
            "appending chapter to catalog"
        );
        self.chapters.push(chapter);
    }

    /// By-value form of [`append`](Self::append), returning the grown catalog.
    pub fn with_appended(mut self, chapter: Chapter) -> Self {
        self.append(chapter);
        self
    }

    /// First chapter with the given id, in insertion order.
    pub fn get(&self, id: &ChapterId) -> Option<&Chapter> {
        self.chapters.iter().find(|chapter| &chapter.id == id)
    }

    /// The current query.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Replaces the current query.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        tracing::debug!("catalog query set to {:?}", self.query);
    }

    /// Chapters matching the current query, ordered by number.
    pub fn view(&self) -> Vec<&Chapter> {
        filter_and_sort(&self.chapters, &self.query)
    }

    /// Chapters matching `query`, ordered by number, without touching the current query.
    pub fn search(&self, query: &str) -> Vec<&Chapter> {
        filter_and_sort(&self.chapters, query)
    }
}
