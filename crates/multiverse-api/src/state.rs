//! Application state for the location API

use std::sync::Arc;

use multiverse_core::{Dataset, PageLinks};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Read-only dataset, loaded once at startup
    dataset: Arc<Dataset>,
    /// Builder for absolute page links
    links: Arc<PageLinks>,
}

impl AppState {
    /// Create a new AppState from a dataset and its link builder
    pub fn new(dataset: Dataset, links: PageLinks) -> Self {
        Self {
            dataset: Arc::new(dataset),
            links: Arc::new(links),
        }
    }

    /// Create a new AppState whose links are rooted at `public_url`
    pub fn with_public_url(dataset: Dataset, public_url: &str) -> Result<Self, url::ParseError> {
        Ok(Self::new(dataset, PageLinks::new(public_url)?))
    }

    /// Get the dataset
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Get the page link builder
    pub fn links(&self) -> &PageLinks {
        &self.links
    }
}
