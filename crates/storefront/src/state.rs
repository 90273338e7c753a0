//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::StorefrontConfig;
use crate::content::{ContentError, ContentStore};

/// Application state shared across all handlers.
///
/// Cheap to clone: everything sits behind one `Arc`. The catalog and site
/// copy are statics, so only configuration and the loaded content pages
/// live here.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    content: ContentStore,
}

impl AppState {
    /// Build the state, loading content pages from `config.content_dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if the content directory exists but cannot be read.
    pub fn new(config: StorefrontConfig) -> Result<Self, ContentError> {
        let content = ContentStore::load(&config.content_dir)?;
        tracing::info!(pages = content.len(), "Content loaded");
        Ok(Self::with_content(config, content))
    }

    #[must_use]
    pub fn with_content(config: StorefrontConfig, content: ContentStore) -> Self {
        Self {
            inner: Arc::new(AppStateInner { config, content }),
        }
    }

    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    #[must_use]
    pub fn content(&self) -> &ContentStore {
        &self.inner.content
    }
}
