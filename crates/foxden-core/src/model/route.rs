use serde::{Deserialize, Serialize};

use crate::errors::{FoxdenError, Result};

/// Identifier of a page view
///
/// One variant per page the site can show. The set is closed: the route
/// table is validated to cover every variant exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ViewId {
    Home,
    Menu,
    Bbq,
    Lunch,
    Contacts,
}

impl ViewId {
    /// All views, in navigation order
    pub const ALL: [ViewId; 5] = [
        ViewId::Home,
        ViewId::Menu,
        ViewId::Bbq,
        ViewId::Lunch,
        ViewId::Contacts,
    ];

    /// Canonical path this view is served under
    pub fn canonical_path(self) -> &'static str {
        match self {
            ViewId::Home => "/",
            ViewId::Menu => "/menu",
            ViewId::Bbq => "/bbq",
            ViewId::Lunch => "/lunch",
            ViewId::Contacts => "/contacts",
        }
    }

    /// Label used for this view's link in the header navigation
    pub fn nav_label(self) -> &'static str {
        match self {
            ViewId::Home => "Главная",
            ViewId::Menu => "Меню",
            ViewId::Bbq => "Шашлыки",
            ViewId::Lunch => "Корпоративные обеды",
            ViewId::Contacts => "Контакты",
        }
    }

    /// Filesystem-safe slug, used for snapshot file names
    pub fn slug(self) -> &'static str {
        match self {
            ViewId::Home => "home",
            ViewId::Menu => "menu",
            ViewId::Bbq => "bbq",
            ViewId::Lunch => "lunch",
            ViewId::Contacts => "contacts",
        }
    }
}

impl std::fmt::Display for ViewId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.slug())
    }
}

/// Normalized URL path
///
/// A RoutePath always starts with `/`, carries no query string or
/// fragment, and has no trailing slash except for the root itself.
/// Transitions are keyed by this string, not by the resolved view.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoutePath(String);

impl RoutePath {
    /// Normalize a raw path string
    ///
    /// Strips query string and fragment, collapses a trailing slash
    /// (`/menu/` and `/menu` are the same route), and rejects anything
    /// that does not start with `/`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPath` for an empty string or a path without a
    /// leading `/`.
    pub fn parse(raw: &str) -> Result<Self> {
        let without_fragment = raw.split('#').next().unwrap_or("");
        let without_query = without_fragment.split('?').next().unwrap_or("");

        if without_query.is_empty() {
            return Err(FoxdenError::InvalidPath {
                path: raw.to_string(),
                reason: "path is empty".to_string(),
            });
        }
        if !without_query.starts_with('/') {
            return Err(FoxdenError::InvalidPath {
                path: raw.to_string(),
                reason: "must start with '/'".to_string(),
            });
        }

        let normalized = if without_query.len() > 1 {
            without_query.trim_end_matches('/')
        } else {
            without_query
        };
        // "/menu///" trims down to "/menu"; "///" trims down to the root
        let normalized = if normalized.is_empty() { "/" } else { normalized };

        Ok(Self(normalized.to_string()))
    }

    /// Path for a view's canonical address
    pub fn canonical(view: ViewId) -> Self {
        Self(view.canonical_path().to_string())
    }

    /// Get the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RoutePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single route table entry: one path mapped to exactly one view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    /// Normalized path the route answers to
    pub path: RoutePath,
    /// View rendered when the route is active
    pub view: ViewId,
}

impl Route {
    /// Create a route for a view at its canonical path
    pub fn canonical(view: ViewId) -> Self {
        Self {
            path: RoutePath::canonical(view),
            view,
        }
    }
}
