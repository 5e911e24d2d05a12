use crate::domain_model::ViewRef;
use crate::domain_port::{ViewSource, ViewSourceError};
use crate::logger::*;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

const VIEW_EXTENSION: &str = "html";

/// Reads `<root>/<view>.html` from disk each time it is asked.
#[derive(Debug)]
pub struct FsViewSource {
    root: PathBuf,
}

impl FsViewSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn path_of(&self, view: &ViewRef) -> Result<PathBuf, ViewSourceError> {
        let relative = Path::new(view.as_str());
        let is_plain = !view.as_str().is_empty()
            && relative
                .components()
                .all(|c| matches!(c, Component::Normal(_)));
        if !is_plain {
            return Err(ViewSourceError::InvalidReference(view.clone()));
        }
        Ok(self.root.join(relative).with_extension(VIEW_EXTENSION))
    }
}

#[async_trait::async_trait]
impl ViewSource for FsViewSource {
    async fn fetch(&self, view: &ViewRef) -> Result<String, ViewSourceError> {
        let path = self.path_of(view)?;
        debug!(path = %path.display(), "reading view");
        match tokio::fs::read_to_string(&path).await {
            Ok(markup) => Ok(markup),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(ViewSourceError::NotFound(view.clone())),
            Err(e) => Err(ViewSourceError::Io(e)),
        }
    }
}
