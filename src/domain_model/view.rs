use crate::domain_model::ViewRef;

/// Markup of a view after it has been fetched on first activation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewModule {
    pub view: ViewRef,
    pub markup: String,
}

/// Marker in a layout's markup where the active child view is placed.
pub const OUTLET: &str = "{{outlet}}";
