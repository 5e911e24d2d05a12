use crate::domain_model::ViewRef;

/// Where raw view markup comes from.
#[async_trait::async_trait]
pub trait ViewSource: Send + Sync {
    async fn fetch(&self, view: &ViewRef) -> Result<String, ViewSourceError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ViewSourceError {
    #[error("view {0} not found")]
    NotFound(ViewRef),
    #[error("invalid view reference {0}")]
    InvalidReference(ViewRef),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
