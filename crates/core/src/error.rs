//! Error types for the saga core.
//!
//! The catalog operations themselves (filtering, appending, building chapters) never fail;
//! errors only arise while loading the seed catalog or resolving configuration at startup.

#[derive(Debug, thiserror::Error)]
pub enum SagaError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("failed to read seed catalog: {0}")]
    FileRead(std::io::Error),
    #[error("seed catalog schema mismatch at {path}: {source}")]
    SeedSchema {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("duplicate chapter id in seed catalog: {0}")]
    DuplicateChapterId(String),
    #[error("invalid chapter id: {0}")]
    ChapterId(#[from] saga_uuid::UuidError),
}

pub type SagaResult<T> = std::result::Result<T, SagaError>;
