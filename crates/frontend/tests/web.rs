//! Browser-only tests for the DOM-facing halves of the prefetch and focus
//! subsystems. Run with `wasm-pack test --headless --firefox crates/frontend`.

#![cfg(target_arch = "wasm32")]

use frontend::shared::focus::{announce, focus_main_content};
use frontend::shared::prefetch::idle::schedule_idle_prefetch;
use frontend::shared::prefetch::{PrefetchCache, ResourceKind};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web_sys::Document {
    web_sys::window().unwrap().document().unwrap()
}

#[wasm_bindgen_test]
fn preload_hint_inserts_tagged_link() {
    let cache = PrefetchCache::new();
    cache.preload_resource("/assets/test-hero.webp", ResourceKind::Image);

    let link = document()
        .query_selector(r#"link[rel="preload"][href="/assets/test-hero.webp"]"#)
        .unwrap()
        .expect("a preload hint should be in the head");
    assert_eq!(link.get_attribute("as").as_deref(), Some("image"));
    assert!(link.get_attribute("crossorigin").is_none());
}

#[wasm_bindgen_test]
fn font_hint_requests_anonymous_fetch() {
    let cache = PrefetchCache::new();
    cache.preload_resource("/assets/test-font.woff2", ResourceKind::Font);

    let link = document()
        .query_selector(r#"link[rel="preload"][href="/assets/test-font.woff2"]"#)
        .unwrap()
        .expect("a preload hint should be in the head");
    assert_eq!(link.get_attribute("as").as_deref(), Some("font"));
    assert_eq!(link.get_attribute("crossorigin").as_deref(), Some("anonymous"));
}

#[wasm_bindgen_test]
async fn prefetch_unknown_route_resolves() {
    let cache = PrefetchCache::new();
    cache.prefetch_route("/does-not-exist").await;

    let stats = cache.stats();
    assert_eq!(stats.routes_cached, 1);
    assert!(document()
        .query_selector(r#"link[href="/does-not-exist"]"#)
        .unwrap()
        .is_none());
}

#[wasm_bindgen_test]
fn idle_scheduling_does_not_throw() {
    let cache = PrefetchCache::new();
    schedule_idle_prefetch(&cache, vec!["/about".to_string()]);
}

#[wasm_bindgen_test]
fn focus_moves_to_main_content() {
    let doc = document();
    let main = doc.create_element("main").unwrap();
    main.set_id("focus-test-main");
    doc.body().unwrap().append_child(&main).unwrap();

    let focused = focus_main_content("#focus-test-main", false);
    assert!(focused);

    // The target was made keyboard-focusable and holds focus.
    assert_eq!(main.get_attribute("tabindex").as_deref(), Some("-1"));
    let active = doc.active_element().expect("something has focus");
    assert_eq!(active.id(), "focus-test-main");

    main.remove();
}

#[wasm_bindgen_test]
fn missing_focus_target_is_skipped() {
    assert!(!focus_main_content("#no-such-element", false));
}

#[wasm_bindgen_test]
async fn announcement_populates_then_clears_live_region() {
    announce("/about");

    let region = document()
        .query_selector(r#"[role="status"][aria-live="polite"]"#)
        .unwrap()
        .expect("live region created on demand");
    assert_eq!(
        region.text_content().as_deref(),
        Some("Navigated to about page")
    );

    // The text clears after a second so an identical follow-up announcement
    // is not swallowed by screen readers that skip unchanged text.
    gloo_timers::future::TimeoutFuture::new(1100).await;
    assert_eq!(region.text_content().as_deref(), Some(""));
}
