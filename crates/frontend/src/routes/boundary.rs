//! Deferred-load boundary around each routed view.

use super::table::RouteKind;
use crate::shared::i18n::use_i18n;
use crate::shared::prefetch::use_prefetch;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Accessible spinner shown while a route's loader is pending.
#[component]
pub fn LoadingFallback() -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <div class="loading" role="status">
            <span class="loading__spinner" aria-hidden="true"></span>
            <span class="visually-hidden">{move || i18n.t("loading.label")}</span>
        </div>
    }
}

/// Runs the route's load operation before rendering its children, showing
/// [`LoadingFallback`] while pending.
///
/// The load goes through the prefetch cache: a route already warmed by hover
/// or idle prefetching resolves immediately, and a first-visit load marks the
/// route warmed for everyone else.
#[component]
pub fn RouteBoundary(kind: RouteKind, children: ChildrenFn) -> impl IntoView {
    let cache = use_prefetch();
    let (ready, set_ready) = signal(false);

    spawn_local(async move {
        cache.prefetch_route(kind.prefetch_path()).await;
        set_ready.set(true);
    });

    view! {
        <Show when=move || ready.get() fallback=|| view! { <LoadingFallback /> }>
            {children()}
        </Show>
    }
}
