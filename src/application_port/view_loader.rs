use crate::domain_model::{ViewModule, ViewRef};
use crate::domain_port::ViewSourceError;
use std::sync::Arc;

#[derive(Debug, thiserror::Error)]
pub enum ViewLoadError {
    #[error("view {view} could not be loaded: {source}")]
    Unavailable {
        view: ViewRef,
        #[source]
        source: ViewSourceError,
    },
}

/// Loads views on first activation and keeps them for later ones.
#[async_trait::async_trait]
pub trait ViewLoader: Send + Sync {
    async fn load(&self, view: &ViewRef) -> Result<Arc<ViewModule>, ViewLoadError>;

    /// Views loaded so far, sorted.
    fn loaded_views(&self) -> Vec<ViewRef>;
}
