//! Best-effort warming of route code/data and static resources ahead of
//! navigation.
//!
//! The cache is an explicit instance provided through context (see
//! [`use_prefetch`]) so tests get isolation by constructing their own instead
//! of resetting ambient module state. All operations are advisory: a failed
//! warm-up is logged and retried later, never surfaced to the user.

pub mod idle;
pub mod link;

use crate::routes::table::{resolve_loader, LoaderFn};
use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard};

use leptos::prelude::*;

/// What a preload hint is for. Maps to the `as` attribute of
/// `<link rel="preload">`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Image,
    Font,
    Script,
    Style,
    Fetch,
}

impl ResourceKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ResourceKind::Image => "image",
            ResourceKind::Font => "font",
            ResourceKind::Script => "script",
            ResourceKind::Style => "style",
            ResourceKind::Fetch => "fetch",
        }
    }
}

/// Snapshot of the cache contents. Vectors keep insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PrefetchStats {
    pub routes_cached: usize,
    pub resources_cached: usize,
    pub cached_routes: Vec<String>,
    pub cached_resources: Vec<String>,
}

#[derive(Default)]
struct CacheState {
    warmed_routes: Vec<String>,
    warmed_resources: Vec<String>,
}

type ResolverFn = fn(&str) -> Option<LoaderFn>;

/// Process-wide prefetch bookkeeping, shared by cheap clone.
#[derive(Clone)]
pub struct PrefetchCache {
    state: Arc<Mutex<CacheState>>,
    resolver: ResolverFn,
}

impl Default for PrefetchCache {
    fn default() -> Self {
        Self::new()
    }
}

impl PrefetchCache {
    /// Cache wired to the application route table.
    pub fn new() -> Self {
        Self::with_resolver(resolve_loader)
    }

    /// Cache with a custom path→loader resolver. Test seam.
    pub fn with_resolver(resolver: ResolverFn) -> Self {
        Self {
            state: Arc::new(Mutex::new(CacheState::default())),
            resolver,
        }
    }

    // Single-threaded UI loop; a poisoned lock can only follow a panic that
    // already aborted rendering, so recover rather than propagate.
    fn lock(&self) -> MutexGuard<'_, CacheState> {
        self.state.lock().unwrap_or_else(|err| err.into_inner())
    }

    /// Warms the route for `path`.
    ///
    /// The warmed marker is inserted synchronously, before the returned
    /// future is first polled, so duplicate calls issued back-to-back all
    /// short-circuit while the first load is still in flight. A failed load
    /// rolls the marker back (permitting a retry) and logs a warning; the
    /// returned future always completes without error.
    pub fn prefetch_route(&self, path: &str) -> impl Future<Output = ()> + 'static {
        let loader = {
            let mut state = self.lock();
            if state.warmed_routes.iter().any(|p| p == path) {
                None
            } else {
                state.warmed_routes.push(path.to_string());
                // Unknown normalized paths still count as warmed: there is
                // simply nothing to load for them.
                (self.resolver)(normalize_path(path))
            }
        };

        let state = Arc::clone(&self.state);
        let path = path.to_string();
        async move {
            let Some(loader) = loader else {
                return;
            };
            if let Err(err) = loader().await {
                log::warn!("failed to prefetch route {path}: {err}");
                let mut state = state.lock().unwrap_or_else(|e| e.into_inner());
                state.warmed_routes.retain(|p| p != &path);
            }
        }
    }

    /// Issues a browser preload hint for `url` once.
    ///
    /// Hints are fire-and-forget: the URL is marked warmed even though the
    /// browser gives no success/failure signal for the hint itself.
    pub fn preload_resource(&self, url: &str, kind: ResourceKind) {
        {
            let mut state = self.lock();
            if state.warmed_resources.iter().any(|u| u == url) {
                return;
            }
            state.warmed_resources.push(url.to_string());
        }
        insert_preload_hint(url, kind);
    }

    pub fn stats(&self) -> PrefetchStats {
        let state = self.lock();
        PrefetchStats {
            routes_cached: state.warmed_routes.len(),
            resources_cached: state.warmed_resources.len(),
            cached_routes: state.warmed_routes.clone(),
            cached_resources: state.warmed_resources.clone(),
        }
    }

    /// Empties both sets. Test isolation; not called in normal operation.
    pub fn clear(&self) {
        let mut state = self.lock();
        state.warmed_routes.clear();
        state.warmed_resources.clear();
    }
}

/// Strips a trailing dynamic-parameter suffix, e.g. "/apart/:id" → "/apart".
/// Only the single template form the route table uses is recognized.
pub fn normalize_path(path: &str) -> &str {
    path.split("/:").next().unwrap_or(path)
}

#[cfg(target_arch = "wasm32")]
fn insert_preload_hint(url: &str, kind: ResourceKind) {
    let head = match web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.head())
    {
        Some(head) => head,
        None => return,
    };

    let document = match head.owner_document() {
        Some(doc) => doc,
        None => return,
    };

    if let Ok(link) = document.create_element("link") {
        let _ = link.set_attribute("rel", "preload");
        let _ = link.set_attribute("href", url);
        let _ = link.set_attribute("as", kind.as_str());
        // Fonts are fetched anonymously by the browser's font loader; an
        // un-annotated hint would be ignored and the font fetched twice.
        if kind == ResourceKind::Font {
            let _ = link.set_attribute("crossorigin", "anonymous");
        }
        let _ = head.append_child(&link);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn insert_preload_hint(_url: &str, _kind: ResourceKind) {}

/// The cache provided at the application root.
pub fn use_prefetch() -> PrefetchCache {
    use_context::<PrefetchCache>().expect("PrefetchCache not found in context")
}
