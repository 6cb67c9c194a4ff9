//! Application state shared across request handlers.

use std::sync::Arc;

use crate::catalog::Catalog;
use crate::config::SiteConfig;

/// Shared application state.
///
/// Cheap to clone; handlers receive a clone per request via the `State`
/// extractor. The catalog is built once at startup and never mutated.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: SiteConfig,
    catalog: Catalog,
}

impl AppState {
    /// Create application state from configuration.
    #[must_use]
    pub fn new(config: SiteConfig) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog: Catalog::new(),
            }),
        }
    }

    /// Site configuration.
    #[must_use]
    pub fn config(&self) -> &SiteConfig {
        &self.inner.config
    }

    /// The in-memory listing catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }
}
