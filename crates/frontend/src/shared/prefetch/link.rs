use super::use_prefetch;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Navigational link that warms its destination on hover or touch.
///
/// The router intercepts clicks on same-origin anchors, so this renders a
/// plain `<a>`; `mouseenter`/`touchstart` schedule `prefetch_route` off the
/// event without blocking it. Caller-supplied handlers still run after the
/// prefetch is scheduled.
#[component]
pub fn PrefetchLink(
    #[prop(into)] href: String,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional, into)] aria_label: Option<Signal<String>>,
    #[prop(optional)] on_mouse_enter: Option<Callback<web_sys::MouseEvent>>,
    #[prop(optional)] on_touch_start: Option<Callback<web_sys::TouchEvent>>,
    children: Children,
) -> impl IntoView {
    let cache = use_prefetch();
    let target = href.clone();

    let warm = move || {
        let cache = cache.clone();
        let path = target.clone();
        spawn_local(async move {
            cache.prefetch_route(&path).await;
        });
    };

    let hover = {
        let warm = warm.clone();
        move |ev: web_sys::MouseEvent| {
            warm();
            if let Some(cb) = on_mouse_enter {
                cb.run(ev);
            }
        }
    };
    let touch = move |ev: web_sys::TouchEvent| {
        warm();
        if let Some(cb) = on_touch_start {
            cb.run(ev);
        }
    };

    let label = move || aria_label.map(|label| label.get());

    view! {
        <a
            href=href
            class=class
            aria-label=label
            on:mouseenter=hover
            on:touchstart=touch
        >
            {children()}
        </a>
    }
}
