use crate::application_port::*;
use crate::domain::RouteTable;
use crate::domain_model::{Resolution, RouteSummary, ViewModule, ViewRef};
use crate::logger::ConsoleLogger;
use std::sync::Arc;

pub struct NavigationServiceImpl {
    table: Arc<RouteTable>,
    view_loader: Arc<dyn ViewLoader>,
    console: Arc<ConsoleLogger>,
}

impl NavigationServiceImpl {
    pub fn new(
        table: Arc<RouteTable>,
        view_loader: Arc<dyn ViewLoader>,
        console: Arc<ConsoleLogger>,
    ) -> Self {
        Self {
            table,
            view_loader,
            console,
        }
    }

    async fn activate(&self, view: &ViewRef) -> Result<Arc<ViewModule>, ViewLoadError> {
        self.view_loader
            .load(view)
            .await
            .inspect_err(|e| self.console.error(e))
    }
}

#[async_trait::async_trait]
impl NavigationService for NavigationServiceImpl {
    fn resolve(&self, path: &str) -> Resolution {
        self.table.resolve(path)
    }

    fn routes(&self) -> Vec<RouteSummary> {
        self.table.routes()
    }

    async fn navigate(&self, path: &str) -> Result<Page, NavigationError> {
        self.console.debug(format_args!("navigate {path}"));
        let resolved = self
            .table
            .resolve_final(path)
            .inspect_err(|e| self.console.error(e))?;

        let route = resolved.route;
        if let Some(from) = resolved.redirected_from.first() {
            if self.table.fallback() == Some(route.path.as_str()) {
                self.console.warn(format_args!("no route for {from}, showing {}", route.path));
            } else {
                self.console.info(format_args!("redirect {from} -> {}", route.path));
            }
        }

        let layout = match &route.layout {
            Some(layout) => Some(self.activate(layout).await?),
            None => None,
        };
        let view = self.activate(&route.view).await?;

        Ok(Page {
            requested: path.to_string(),
            route,
            redirected_from: resolved.redirected_from,
            layout,
            view,
        })
    }
}
