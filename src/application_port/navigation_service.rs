use crate::application_port::ViewLoadError;
use crate::domain::RouteTableError;
use crate::domain_model::{Resolution, RouteMatch, RouteSummary, ViewModule};
use std::sync::Arc;

/// Everything needed to render the page for a navigation.
#[derive(Debug, Clone)]
pub struct Page {
    pub requested: String,
    pub route: RouteMatch,
    pub redirected_from: Vec<String>,
    pub layout: Option<Arc<ViewModule>>,
    pub view: Arc<ViewModule>,
}

#[derive(Debug, thiserror::Error)]
pub enum NavigationError {
    #[error(transparent)]
    Routing(#[from] RouteTableError),
    #[error(transparent)]
    View(#[from] ViewLoadError),
}

#[async_trait::async_trait]
pub trait NavigationService: Send + Sync {
    /// Resolves a single step without loading anything.
    fn resolve(&self, path: &str) -> Resolution;

    fn routes(&self) -> Vec<RouteSummary>;

    /// Follows redirects to the final route and loads its views.
    async fn navigate(&self, path: &str) -> Result<Page, NavigationError>;
}
