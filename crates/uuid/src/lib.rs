//! Chapter identifier utilities.
//!
//! Every chapter in the catalog carries an opaque identifier that never changes once assigned.
//! Two sources of identifiers exist:
//!
//! - **Generated** identifiers, allocated by the chapter builder for newly authored chapters.
//!   These are random (UUID version 4, 122 bits of entropy) and rendered in a *canonical* form:
//!   **32 lowercase hexadecimal characters** (no hyphens).
//! - **Seed** identifiers, supplied by the bundled seed catalog (for example `ch1`). These are
//!   accepted as-is provided they are usable as a single path segment.
//!
//! This crate provides [`ChapterId`], a wrapper that guarantees one of the two forms once
//! constructed.
//!
//! ## Canonical form
//! - Length: 32
//! - Characters: `0-9` and `a-f` only
//! - Example: `550e8400e29b41d4a716446655440000`
//!
//! Notes:
//! - This is the same value you would get from `Uuid::new_v4().simple().to_string()`.
//! - Uniqueness is best-effort: collisions are possible in principle but negligible in practice.

mod service;

// Re-export public types
pub use service::ChapterId;

/// Error type for identifier operations.
#[derive(Debug, thiserror::Error)]
pub enum UuidError {
    /// Invalid input provided
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for identifier operations.
pub type UuidResult<T> = Result<T, UuidError>;
