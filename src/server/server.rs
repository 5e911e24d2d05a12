use crate::application_impl::*;
use crate::application_port::*;
use crate::domain::*;
use crate::domain_port::*;
use crate::infra::*;
use crate::logger::*;
use crate::settings::Settings;
use anyhow::anyhow;
use std::sync::Arc;

pub struct Server {
    pub navigation_service: Arc<dyn NavigationService>,
    pub view_loader: Arc<dyn ViewLoader>,
    pub console: Arc<ConsoleLogger>,
}

impl Server {
    pub fn try_new(settings: &Settings) -> anyhow::Result<Self> {
        let console = Arc::new(ConsoleLogger::new(
            settings.log.is_development(),
            Arc::new(StdConsole),
        ));

        let view_source: Arc<dyn ViewSource> = match settings.views.backend.as_str() {
            "fake" => Arc::new(FakeViewSource::new()),
            "fs" => Arc::new(FsViewSource::new(&settings.views.root)),
            other => return Err(anyhow!("unknown views backend: {other:?}")),
        };
        info!(backend = %settings.views.backend, root = %settings.views.root, "view source ready");

        let table = portal_table()?;
        info!(routes = table.len(), "route table ready");

        Ok(Self::new(table, view_source, console))
    }

    pub fn new(table: RouteTable, view_source: Arc<dyn ViewSource>, console: Arc<ConsoleLogger>) -> Self {
        let view_loader: Arc<dyn ViewLoader> = Arc::new(LazyViewLoader::new(view_source));
        let navigation_service: Arc<dyn NavigationService> = Arc::new(NavigationServiceImpl::new(
            Arc::new(table),
            view_loader.clone(),
            console.clone(),
        ));

        Self {
            navigation_service,
            view_loader,
            console,
        }
    }

    pub fn shutdown(&self) {
        let loaded = self.view_loader.loaded_views();
        info!(views = loaded.len(), "server stopped");
        self.console.info(format_args!("stopped after loading {} view(s)", loaded.len()));
    }

    #[cfg(test)]
    pub(crate) fn for_tests() -> Self {
        let table = portal_table().unwrap();
        let console = Arc::new(ConsoleLogger::new(true, Arc::new(MemoryConsole::new())));
        Self::new(table, Arc::new(FakeViewSource::new()), console)
    }
}
