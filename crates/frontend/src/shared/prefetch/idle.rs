//! Background warming of prioritized routes once the page is interactive.

use super::PrefetchCache;

/// Arranges for each path to be warmed when the browser reports idle time,
/// or after a 1000 ms fallback delay where `requestIdleCallback` does not
/// exist. Never throws: scheduling failures are silently dropped, and per-path
/// load failures are already absorbed by `prefetch_route`.
pub fn schedule_idle_prefetch(cache: &PrefetchCache, paths: Vec<String>) {
    #[cfg(target_arch = "wasm32")]
    schedule(cache.clone(), paths);

    #[cfg(not(target_arch = "wasm32"))]
    let _ = (cache, paths);
}

#[cfg(target_arch = "wasm32")]
fn schedule(cache: PrefetchCache, paths: Vec<String>) {
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::spawn_local;

    const FALLBACK_DELAY_MS: u32 = 1000;

    let warm_all = move || {
        for path in paths {
            let cache = cache.clone();
            spawn_local(async move {
                cache.prefetch_route(&path).await;
            });
        }
    };

    let Some(window) = web_sys::window() else {
        return;
    };

    let has_idle_callback =
        js_sys::Reflect::has(&window, &JsValue::from_str("requestIdleCallback")).unwrap_or(false);

    if has_idle_callback {
        let callback = Closure::once_into_js(warm_all);
        let _ = window.request_idle_callback(callback.unchecked_ref());
    } else {
        spawn_local(async move {
            TimeoutFuture::new(FALLBACK_DELAY_MS).await;
            warm_all();
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schedule_never_panics_off_browser() {
        let cache = PrefetchCache::new();
        schedule_idle_prefetch(&cache, vec!["/about".to_string(), "/contact".to_string()]);
    }
}
