//! Central route configuration.
//!
//! One declarative table maps every navigable destination to its view tag,
//! display metadata and prefetch policy. The table is the single source of
//! truth for metadata lookups, hover prefetching and idle prefetching.

use std::future::Future;
use std::pin::Pin;

/// Deferred view-loading operation. Resolves once the route's data and
/// critical assets are warm; the error string is only ever logged.
pub type LoadFuture = Pin<Box<dyn Future<Output = Result<(), String>>>>;

/// A loader as stored in the table: plain function pointer, no captures.
pub type LoaderFn = fn() -> LoadFuture;

/// View tag for a destination. Replaces the open string-keyed loader map
/// with an exhaustively matched variant per route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteKind {
    Home,
    About,
    Apart,
    NotFound,
}

impl RouteKind {
    /// Absolute path used as the prefetch-cache key. The dynamic segment is
    /// kept in template form; the cache strips it before resolving a loader.
    pub fn prefetch_path(self) -> &'static str {
        match self {
            RouteKind::Home => "/",
            RouteKind::About => "/about",
            RouteKind::Apart => "/apart/:id",
            RouteKind::NotFound => "*",
        }
    }

    pub fn loader(self) -> LoaderFn {
        match self {
            RouteKind::Home => load_home,
            RouteKind::About => load_about,
            RouteKind::Apart => load_apart,
            RouteKind::NotFound => load_nothing,
        }
    }
}

fn load_home() -> LoadFuture {
    Box::pin(async {
        contracts::catalog::load()
            .map(|_| ())
            .map_err(|err| format!("listing catalog failed to decode: {err}"))
    })
}

fn load_about() -> LoadFuture {
    Box::pin(async { Ok(()) })
}

fn load_apart() -> LoadFuture {
    // Detail pages read the same catalog as the grid.
    load_home()
}

fn load_nothing() -> LoadFuture {
    Box::pin(async { Ok(()) })
}

/// One navigable destination with its metadata and prefetch policy.
#[derive(Debug, Clone, Copy)]
pub struct RouteDescriptor {
    pub kind: RouteKind,
    /// Router-relative path pattern ("/" for the index route).
    pub path: &'static str,
    pub title: Option<&'static str>,
    pub description: Option<&'static str>,
    /// 1 = high, 2 = medium, 3 = low. `None` means not prioritized.
    pub prefetch_priority: Option<u8>,
    pub prefetch_on_hover: bool,
}

/// Display/SEO metadata for a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteMetadata {
    pub title: Option<&'static str>,
    pub description: Option<&'static str>,
}

pub const ROUTES: &[RouteDescriptor] = &[
    RouteDescriptor {
        kind: RouteKind::Home,
        path: "/",
        title: Some("Kasa - Accueil"),
        description: Some("Trouvez votre logement idéal parmi notre sélection"),
        prefetch_priority: Some(1),
        prefetch_on_hover: true,
    },
    RouteDescriptor {
        kind: RouteKind::About,
        path: "about",
        title: Some("Kasa - À propos"),
        description: Some("Découvrez notre entreprise et nos valeurs"),
        prefetch_priority: Some(2),
        prefetch_on_hover: true,
    },
    RouteDescriptor {
        kind: RouteKind::Apart,
        path: "apart/:id",
        title: Some("Kasa - Détails du logement"),
        description: Some("Découvrez les détails de ce logement"),
        prefetch_priority: Some(2),
        prefetch_on_hover: true,
    },
    RouteDescriptor {
        kind: RouteKind::NotFound,
        path: "*",
        title: Some("Kasa - Page non trouvée"),
        description: Some("La page que vous recherchez n'existe pas"),
        prefetch_priority: Some(3),
        prefetch_on_hover: false,
    },
];

/// Metadata for an exactly matching route, `None` otherwise.
///
/// A leading slash is stripped before comparison so "/about" matches the
/// relative pattern "about". The wildcard entry is never used as a fallback
/// here; unmatched paths simply have no metadata.
pub fn resolve_metadata(path: &str) -> Option<RouteMetadata> {
    ROUTES
        .iter()
        .find(|route| route.path == path || route.path == path.strip_prefix('/').unwrap_or(path))
        .map(|route| RouteMetadata {
            title: route.title,
            description: route.description,
        })
}

/// Routes worth warming ahead of navigation: hover-prefetchable and priority
/// at most 2, ascending by priority. Declaration order breaks ties; entries
/// without a priority count as 3 and are excluded.
pub fn list_prefetchable() -> Vec<&'static RouteDescriptor> {
    let mut routes: Vec<&'static RouteDescriptor> = ROUTES
        .iter()
        .filter(|route| route.prefetch_on_hover && route.prefetch_priority.unwrap_or(3) <= 2)
        .collect();
    routes.sort_by_key(|route| route.prefetch_priority.unwrap_or(3));
    routes
}

/// Loader for a normalized (parameter-free) path, `None` for anything the
/// table does not know about.
pub fn resolve_loader(normalized_path: &str) -> Option<LoaderFn> {
    match normalized_path {
        "/" => Some(RouteKind::Home.loader()),
        "/about" => Some(RouteKind::About.loader()),
        "/apart" => Some(RouteKind::Apart.loader()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_metadata_exact_match() {
        let meta = resolve_metadata("/").expect("home has metadata");
        assert_eq!(meta.title, Some("Kasa - Accueil"));

        let meta = resolve_metadata("/about").expect("about has metadata");
        assert_eq!(meta.title, Some("Kasa - À propos"));

        // Relative form matches too.
        assert_eq!(resolve_metadata("about"), resolve_metadata("/about"));
    }

    #[test]
    fn test_resolve_metadata_unknown_path_is_none() {
        assert!(resolve_metadata("/does-not-exist").is_none());
        // A concrete detail path is not an exact match for the pattern.
        assert!(resolve_metadata("/apart/1").is_none());
    }

    #[test]
    fn test_resolve_metadata_no_wildcard_fallback() {
        assert!(resolve_metadata("/nope/nested/deep").is_none());
    }

    #[test]
    fn test_list_prefetchable_filter_and_order() {
        let routes = list_prefetchable();
        let kinds: Vec<RouteKind> = routes.iter().map(|r| r.kind).collect();
        assert_eq!(
            kinds,
            vec![RouteKind::Home, RouteKind::About, RouteKind::Apart]
        );

        let priorities: Vec<u8> = routes
            .iter()
            .map(|r| r.prefetch_priority.unwrap_or(3))
            .collect();
        let mut sorted = priorities.clone();
        sorted.sort_unstable();
        assert_eq!(priorities, sorted);

        // The wildcard route (priority 3, no hover) never shows up.
        assert!(routes.iter().all(|r| r.kind != RouteKind::NotFound));
    }

    #[test]
    fn test_resolve_loader_known_paths() {
        assert!(resolve_loader("/").is_some());
        assert!(resolve_loader("/about").is_some());
        assert!(resolve_loader("/apart").is_some());
    }

    #[test]
    fn test_resolve_loader_unknown_path() {
        assert!(resolve_loader("/contact").is_none());
        assert!(resolve_loader("").is_none());
    }

    #[test]
    fn test_catalog_loader_resolves_ok() {
        let result = futures::executor::block_on(load_home());
        assert!(result.is_ok());
    }
}
