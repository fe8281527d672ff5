//! Hero banner cover state.

use crate::constants::DEFAULT_HERO_IMAGE;

/// The banner image shown at the top of the site.
///
/// Setting an empty URL falls back to the default rather than clearing the banner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeroCover {
    default_url: String,
    url: String,
}

impl Default for HeroCover {
    fn default() -> Self {
        Self::new(DEFAULT_HERO_IMAGE)
    }
}

impl HeroCover {
    /// Creates a hero cover showing `default_url`.
    pub fn new(default_url: impl Into<String>) -> Self {
        let default_url = default_url.into();
        Self {
            url: default_url.clone(),
            default_url,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn default_url(&self) -> &str {
        &self.default_url
    }

    pub fn is_default(&self) -> bool {
        self.url == self.default_url
    }

    /// Shows `url`, or the default when `url` is empty.
    pub fn set(&mut self, url: impl Into<String>) {
        let url = url.into();
        self.url = if url.is_empty() {
            self.default_url.clone()
        } else {
            url
        };
        tracing::debug!("hero cover set to {}", self.url);
    }

    /// Restores the default image.
    pub fn reset(&mut self) {
        self.url = self.default_url.clone();
    }
}
