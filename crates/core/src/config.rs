//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup (from environment variables in the runner,
//! from flags in the CLI) and then passed into [`SiteState::initialise`](crate::SiteState::initialise).
//! Nothing in the core reads the environment itself.

use crate::constants::DEFAULT_HERO_IMAGE;
use crate::{SagaError, SagaResult};
use std::path::{Path, PathBuf};

/// Core configuration resolved at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CoreConfig {
    seed_path: Option<PathBuf>,
    hero_default: String,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            seed_path: None,
            hero_default: DEFAULT_HERO_IMAGE.to_owned(),
        }
    }
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    ///
    /// `seed_path` of `None` means the bundled seed catalog is used.
    ///
    /// # Errors
    ///
    /// Returns [`SagaError::InvalidInput`] if `hero_default` is blank.
    pub fn new(seed_path: Option<PathBuf>, hero_default: String) -> SagaResult<Self> {
        if hero_default.trim().is_empty() {
            return Err(SagaError::InvalidInput(
                "hero_default cannot be empty".into(),
            ));
        }

        Ok(Self {
            seed_path,
            hero_default,
        })
    }

    pub fn seed_path(&self) -> Option<&Path> {
        self.seed_path.as_deref()
    }

    pub fn hero_default(&self) -> &str {
        &self.hero_default
    }
}

/// Resolve the seed catalog path from an optional string value.
///
/// `None` or blank means "use the bundled seed". Otherwise the value must name an existing file.
pub fn seed_path_from_env_value(value: Option<String>) -> SagaResult<Option<PathBuf>> {
    let Some(value) = value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
    else {
        return Ok(None);
    };

    let path = PathBuf::from(value);
    if !path.is_file() {
        return Err(SagaError::InvalidInput(format!(
            "seed catalog file does not exist: {}",
            path.display()
        )));
    }
    Ok(Some(path))
}

/// Resolve the default hero image from an optional string value.
///
/// `None` or blank yields the built-in default.
pub fn hero_default_from_env_value(value: Option<String>) -> String {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| DEFAULT_HERO_IMAGE.to_owned())
}
