use crate::domain_model::*;
use std::collections::{HashMap, HashSet};

/// Upper bound on redirect hops followed by [`RouteTable::resolve_final`].
pub const MAX_REDIRECTS: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteTableError {
    #[error("empty route path under {parent}")]
    EmptyPath { parent: String },
    #[error("top-level route {0} must start with '/'")]
    RelativePath(String),
    #[error("child route {0} must be relative to its section")]
    AbsoluteChildPath(String),
    #[error("duplicate route path {0}")]
    DuplicatePath(String),
    #[error("section {0} must render a layout view")]
    SectionWithoutLayout(String),
    #[error("route {0} nests deeper than one section")]
    UnsupportedNesting(String),
    #[error("catch-all route must redirect")]
    CatchAllWithoutRedirect,
    #[error("redirect from {from} to {to} does not reach a view")]
    UnresolvableRedirect { from: String, to: String },
    #[error("no route matches {0}")]
    NoRoute(String),
    #[error("too many redirects resolving {0}")]
    TooManyRedirects(String),
}

/// Final outcome of following every redirect for a request path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRoute {
    pub route: RouteMatch,
    /// Paths visited before landing on `route`, in order.
    pub redirected_from: Vec<String>,
}

/// Immutable, validated index over a route tree.
#[derive(Debug, Clone)]
pub struct RouteTable {
    leaves: Vec<RouteMatch>,
    index: HashMap<String, usize>,
    redirects: HashMap<String, String>,
    fallback: Option<String>,
}

impl RouteTable {
    pub fn try_new(entries: Vec<RouteEntry>) -> Result<Self, RouteTableError> {
        check_siblings(&entries)?;

        let mut table = RouteTable {
            leaves: Vec::new(),
            index: HashMap::new(),
            redirects: HashMap::new(),
            fallback: None,
        };

        for entry in entries {
            if entry.path == CATCH_ALL {
                match entry.target {
                    RouteTarget::Redirect(to) => table.fallback = Some(normalize(&to).to_string()),
                    RouteTarget::View(_) => return Err(RouteTableError::CatchAllWithoutRedirect),
                }
                continue;
            }
            if entry.path.is_empty() {
                return Err(RouteTableError::EmptyPath {
                    parent: "/".to_string(),
                });
            }
            if !entry.path.starts_with('/') {
                return Err(RouteTableError::RelativePath(entry.path));
            }
            if entry.children.is_empty() {
                let path = normalize(&entry.path).to_string();
                table.insert(path, entry.meta, entry.target, None)?;
            } else {
                table.insert_section(entry)?;
            }
        }

        table.check_redirects()?;
        Ok(table)
    }

    /// Resolves a single step: a leaf match, one redirect, or nothing.
    pub fn resolve(&self, path: &str) -> Resolution {
        let path = normalize(path);
        if let Some(&i) = self.index.get(path) {
            return Resolution::Matched(self.leaves[i].clone());
        }
        if let Some(to) = self.redirects.get(path) {
            return Resolution::Redirect {
                from: path.to_string(),
                to: to.clone(),
            };
        }
        match &self.fallback {
            Some(to) => Resolution::Redirect {
                from: path.to_string(),
                to: to.clone(),
            },
            None => Resolution::NotFound {
                path: path.to_string(),
            },
        }
    }

    pub fn resolve_final(&self, path: &str) -> Result<ResolvedRoute, RouteTableError> {
        let mut current = normalize(path).to_string();
        let mut redirected_from = Vec::new();
        for _ in 0..=MAX_REDIRECTS {
            match self.resolve(&current) {
                Resolution::Matched(route) => {
                    return Ok(ResolvedRoute {
                        route,
                        redirected_from,
                    });
                }
                Resolution::Redirect { from, to } => {
                    redirected_from.push(from);
                    current = to;
                }
                Resolution::NotFound { path } => return Err(RouteTableError::NoRoute(path)),
            }
        }
        Err(RouteTableError::TooManyRedirects(normalize(path).to_string()))
    }

    /// Leaf routes in declaration order.
    pub fn routes(&self) -> Vec<RouteSummary> {
        self.leaves.iter().map(RouteSummary::from).collect()
    }

    /// Target of the catch-all entry, if the table has one.
    pub fn fallback(&self) -> Option<&str> {
        self.fallback.as_deref()
    }

    pub fn len(&self) -> usize {
        self.leaves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.leaves.is_empty()
    }

    fn insert_section(&mut self, entry: RouteEntry) -> Result<(), RouteTableError> {
        let section = normalize(&entry.path).to_string();
        let layout = match entry.target {
            RouteTarget::View(layout) => layout,
            RouteTarget::Redirect(_) => return Err(RouteTableError::SectionWithoutLayout(section)),
        };
        check_siblings(&entry.children)?;

        for child in entry.children {
            if child.path.is_empty() {
                return Err(RouteTableError::EmptyPath { parent: section });
            }
            if child.path.starts_with('/') {
                return Err(RouteTableError::AbsoluteChildPath(child.path));
            }
            let path = format!("{}/{}", section.trim_end_matches('/'), child.path);
            if !child.children.is_empty() {
                return Err(RouteTableError::UnsupportedNesting(path));
            }
            let parent = Some((layout.clone(), section.clone()));
            self.insert(normalize(&path).to_string(), child.meta, child.target, parent)?;
        }
        Ok(())
    }

    fn insert(
        &mut self,
        path: String,
        meta: RouteMeta,
        target: RouteTarget,
        parent: Option<(ViewRef, String)>,
    ) -> Result<(), RouteTableError> {
        if self.index.contains_key(&path) || self.redirects.contains_key(&path) {
            return Err(RouteTableError::DuplicatePath(path));
        }
        match target {
            RouteTarget::View(view) => {
                let (layout, section) = parent.unzip();
                self.index.insert(path.clone(), self.leaves.len());
                self.leaves.push(RouteMatch {
                    path,
                    name: meta.name,
                    view,
                    layout,
                    section,
                });
            }
            RouteTarget::Redirect(to) => {
                self.redirects.insert(path, normalize(&to).to_string());
            }
        }
        Ok(())
    }

    fn check_redirects(&self) -> Result<(), RouteTableError> {
        let targets = self
            .redirects
            .iter()
            .map(|(from, to)| (from.clone(), to.clone()))
            .chain(
                self.fallback
                    .iter()
                    .map(|to| (CATCH_ALL.to_string(), to.clone())),
            );
        for (from, to) in targets {
            if !self.reaches_view(&to) {
                return Err(RouteTableError::UnresolvableRedirect { from, to });
            }
        }
        Ok(())
    }

    /// Chases `to` through explicit redirects only. The catch-all never
    /// counts, so a mistyped target cannot land on the not-found page.
    fn reaches_view(&self, to: &str) -> bool {
        let mut current = to;
        for _ in 0..=MAX_REDIRECTS {
            if self.index.contains_key(current) {
                return true;
            }
            match self.redirects.get(current) {
                Some(next) => current = next.as_str(),
                None => return false,
            }
        }
        false
    }
}

/// Strips query and fragment, and a single trailing slash.
pub fn normalize(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let path = &path[..end];
    if path.is_empty() {
        return "/";
    }
    match path.strip_suffix('/') {
        Some(trimmed) if !trimmed.is_empty() => trimmed,
        _ => path,
    }
}

fn check_siblings(entries: &[RouteEntry]) -> Result<(), RouteTableError> {
    let mut seen = HashSet::new();
    for entry in entries {
        if !seen.insert(entry.path.as_str()) {
            return Err(RouteTableError::DuplicatePath(entry.path.clone()));
        }
    }
    Ok(())
}
