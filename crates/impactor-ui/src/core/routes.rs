//! Static route table mapping URL paths to page views.
//!
//! # Design
//! - The table is fixed at compile time; resolution is a pure lookup.
//! - Paths match exactly (case-sensitive, no trailing-slash folding).
//! - Unknown paths surface as [`RouteError::NotFound`] for the caller to render.

use thiserror::Error;

/// Page view rendered for a resolved route.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum View {
    /// Landing page.
    Home,
    /// Background information about impacts and data sources.
    Info,
    /// Interactive impact visualization.
    Visualization,
}

impl View {
    /// All views in navigation order.
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::Home, Self::Info, Self::Visualization]
    }

    /// Path the view is mounted at.
    #[must_use]
    pub fn path(self) -> &'static str {
        self.entry().path
    }

    /// Route name for the view.
    #[must_use]
    pub fn name(self) -> &'static str {
        self.entry().name
    }

    fn entry(self) -> &'static RouteEntry {
        match self {
            Self::Home => &ROUTES[0],
            Self::Info => &ROUTES[1],
            Self::Visualization => &ROUTES[2],
        }
    }
}

/// One row of the route table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteEntry {
    /// URL path, unique across the table.
    pub path: &'static str,
    /// Stable route name.
    pub name: &'static str,
    /// View rendered for the path.
    pub view: View,
}

/// The application route table.
pub static ROUTES: [RouteEntry; 3] = [
    RouteEntry {
        path: "/",
        name: "Home",
        view: View::Home,
    },
    RouteEntry {
        path: "/Info",
        name: "Info",
        view: View::Info,
    },
    RouteEntry {
        path: "/visualization",
        name: "Visualization",
        view: View::Visualization,
    },
];

/// Route resolution failure.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RouteError {
    /// No route is registered for the requested path.
    #[error("no route for path {path:?}")]
    NotFound {
        /// Path that failed to resolve.
        path: String,
    },
}

/// Resolve a requested path to the view that should render.
///
/// # Errors
///
/// Returns [`RouteError::NotFound`] when the path is not in [`ROUTES`].
pub fn resolve(path: &str) -> Result<View, RouteError> {
    ROUTES
        .iter()
        .find(|entry| entry.path == path)
        .map(|entry| entry.view)
        .ok_or_else(|| {
            log::debug!("route miss for {path}");
            RouteError::NotFound {
                path: path.to_string(),
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn configured_paths_resolve_to_their_views() {
        assert_eq!(resolve("/"), Ok(View::Home));
        assert_eq!(resolve("/Info"), Ok(View::Info));
        assert_eq!(resolve("/visualization"), Ok(View::Visualization));
    }

    #[test]
    fn unknown_paths_are_not_found() {
        for path in ["", "/info", "/Info/", "/visualisation", "/404", "Info", "/a/b"] {
            assert_eq!(
                resolve(path),
                Err(RouteError::NotFound {
                    path: path.to_string()
                }),
                "{path}"
            );
        }
    }

    #[test]
    fn table_paths_are_unique_and_views_round_trip() {
        let paths: HashSet<_> = ROUTES.iter().map(|entry| entry.path).collect();
        assert_eq!(paths.len(), ROUTES.len());
        for view in View::all() {
            assert_eq!(resolve(view.path()), Ok(view));
        }
        assert_eq!(View::Visualization.name(), "Visualization");
    }

    #[test]
    fn not_found_error_names_the_path() {
        let err = resolve("/missing").unwrap_err();
        assert_eq!(err.to_string(), "no route for path \"/missing\"");
    }
}
