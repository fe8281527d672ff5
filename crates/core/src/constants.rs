//! Constants used throughout the saga core crate.
//!
//! Default values, placeholders and fixed display strings live here so that the builder,
//! the seed loader and the presentation projections agree on them.

/// Title given to a chapter authored without one.
pub const DEFAULT_TITLE: &str = "Untitled";

/// Chapter number used when the authored number cannot be parsed.
pub const DEFAULT_CHAPTER_NUMBER: i64 = 1;

/// Body text given to a chapter authored without any.
pub const PLACEHOLDER_CONTENT: &str = "(Your chapter text…)";

/// Cover image given to a chapter authored without one.
pub const PLACEHOLDER_COVER: &str =
    "https://images.unsplash.com/photo-1527443224154-c4d576348b82?q=80&w=1935&auto=format&fit=crop";

/// Default hero banner image.
pub const DEFAULT_HERO_IMAGE: &str =
    "https://images.unsplash.com/photo-1519681393784-d120267933ba?q=80&w=1974&auto=format&fit=crop";

/// Separator placed between fields when building the searchable text of a chapter.
pub const SEARCH_FIELD_SEPARATOR: &str = " ";

/// Separator between tags in authored input.
pub const TAG_INPUT_SEPARATOR: char = ',';

/// Number of tags shown on a collapsed chapter card.
pub const CARD_TAG_LIMIT: usize = 3;

/// Message shown when a query matches no chapters.
pub const EMPTY_RESULTS_MESSAGE: &str = "No chapters match your search.";

/// Name of the saga.
pub const SAGA_NAME: &str = "DEUMAN GALAXY";

/// Title of the story arc.
pub const STORY_TITLE: &str = "EXTINCTION’S EQUATION";

/// One-line pitch shown in the hero card.
pub const STORY_TAGLINE: &str = "A cinematic sci‑fi saga of strategy, sacrifice, and a galaxy deciding what deserves to survive.";
