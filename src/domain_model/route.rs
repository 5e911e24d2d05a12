use serde::Serialize;
use std::fmt;

/// Path of the wildcard entry that receives every unmatched request.
pub const CATCH_ALL: &str = "*";

/// Reference to a lazily loaded view, e.g. `manager/Home`.
#[derive(Debug, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Serialize)]
#[serde(transparent)]
pub struct ViewRef(pub String);

impl ViewRef {
    pub fn new(view: impl Into<String>) -> Self {
        Self(view.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ViewRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RouteMeta {
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteTarget {
    View(ViewRef),
    Redirect(String),
}

/// One entry of the declarative route tree.
///
/// Top-level paths are absolute (`/login`), child paths are relative to
/// their section (`home` under `/manager`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteEntry {
    pub path: String,
    pub meta: RouteMeta,
    pub target: RouteTarget,
    pub children: Vec<RouteEntry>,
}

impl RouteEntry {
    pub fn view(path: impl Into<String>, view: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            meta: RouteMeta::default(),
            target: RouteTarget::View(ViewRef::new(view)),
            children: Vec::new(),
        }
    }

    pub fn redirect(path: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            meta: RouteMeta::default(),
            target: RouteTarget::Redirect(to.into()),
            children: Vec::new(),
        }
    }

    pub fn section(
        path: impl Into<String>,
        layout: impl Into<String>,
        children: Vec<RouteEntry>,
    ) -> Self {
        Self {
            children,
            ..Self::view(path, layout)
        }
    }

    pub fn catch_all(to: impl Into<String>) -> Self {
        Self::redirect(CATCH_ALL, to)
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.meta.name = Some(name.into());
        self
    }
}

/// A leaf route selected for a request path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteMatch {
    pub path: String,
    pub name: Option<String>,
    pub view: ViewRef,
    /// Layout of the enclosing section, if the route is nested.
    pub layout: Option<ViewRef>,
    pub section: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Resolution {
    Matched(RouteMatch),
    Redirect { from: String, to: String },
    NotFound { path: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteSummary {
    pub path: String,
    pub name: Option<String>,
    pub section: Option<String>,
}

impl From<&RouteMatch> for RouteSummary {
    fn from(route: &RouteMatch) -> Self {
        Self {
            path: route.path.clone(),
            name: route.name.clone(),
            section: route.section.clone(),
        }
    }
}
