//! # Saga Core
//!
//! Core model for the Deuman Galaxy chapter site.
//!
//! This crate contains pure, in-memory operations:
//! - The chapter catalog and its search/filter/ordering contract ([`filter_and_sort`], [`Catalog`])
//! - The add-chapter authoring contract ([`ChapterBuilder`])
//! - The bundled seed catalog and optional seed files
//! - Hero cover state and the card/reading projections renderers display
//!
//! **No presentation concerns**: HTTP routing, CLI parsing and output formatting belong in
//! `api-rest`, `saga-cli` or the runner binary.

pub mod builder;
pub mod catalog;
pub mod chapter;
pub mod config;
pub mod constants;
pub mod error;
pub mod hero;
pub mod seed;
pub mod site;
pub mod view;

pub use builder::{parse_chapter_number, split_tags, ChapterBuilder, ChapterDraft, RawNumber};
pub use catalog::{filter_and_sort, Catalog};
pub use chapter::Chapter;
pub use config::CoreConfig;
pub use constants::EMPTY_RESULTS_MESSAGE;
pub use error::{SagaError, SagaResult};
pub use hero::HeroCover;
pub use site::SiteState;
pub use view::{ChapterCard, ReadingView, SiteInfo};

pub use saga_uuid::ChapterId;
