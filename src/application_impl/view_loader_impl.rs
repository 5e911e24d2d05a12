use crate::application_port::{ViewLoadError, ViewLoader};
use crate::domain_model::{ViewModule, ViewRef};
use crate::domain_port::ViewSource;
use crate::logger::*;
use dashmap::DashMap;
use std::sync::Arc;
use tokio::sync::OnceCell;

/// Fetches a view the first time it is activated. Concurrent activations
/// share one fetch; a failed fetch is retried on the next activation.
pub struct LazyViewLoader {
    source: Arc<dyn ViewSource>,
    modules: DashMap<ViewRef, Arc<OnceCell<Arc<ViewModule>>>>,
}

impl LazyViewLoader {
    pub fn new(source: Arc<dyn ViewSource>) -> Self {
        Self {
            source,
            modules: DashMap::new(),
        }
    }
}

#[async_trait::async_trait]
impl ViewLoader for LazyViewLoader {
    async fn load(&self, view: &ViewRef) -> Result<Arc<ViewModule>, ViewLoadError> {
        let cell = self.modules.entry(view.clone()).or_default().clone();
        let module = cell
            .get_or_try_init(|| async {
                let markup = self
                    .source
                    .fetch(view)
                    .await
                    .map_err(|source| ViewLoadError::Unavailable {
                        view: view.clone(),
                        source,
                    })?;
                info!(%view, "view loaded");
                Ok::<_, ViewLoadError>(Arc::new(ViewModule {
                    view: view.clone(),
                    markup,
                }))
            })
            .await?;
        Ok(module.clone())
    }

    fn loaded_views(&self) -> Vec<ViewRef> {
        let mut views: Vec<ViewRef> = self
            .modules
            .iter()
            .filter(|entry| entry.value().initialized())
            .map(|entry| entry.key().clone())
            .collect();
        views.sort();
        views
    }
}
