//! Keyboard focus and screen-reader announcements on navigation.
//!
//! Every real location change moves focus to the main content region and
//! announces the new page through a polite live region, so assistive
//! technology users hear where a client-side navigation took them.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos_router::hooks::use_location;
use wasm_bindgen::JsCast;

const DEFAULT_TARGET_SELECTOR: &str = "#main-content";
const DEFAULT_FOCUS_DELAY_MS: u32 = 100;
const ANNOUNCEMENT_CLEAR_MS: u32 = 1000;

#[derive(Clone)]
pub struct FocusOptions {
    /// CSS selector of the element receiving focus after navigation.
    pub target_selector: String,
    /// Delay before focusing, leaving the new view time to render.
    pub delay_ms: u32,
    /// Log skipped focus attempts.
    pub debug: bool,
}

impl Default for FocusOptions {
    fn default() -> Self {
        Self {
            target_selector: DEFAULT_TARGET_SELECTOR.to_string(),
            delay_ms: DEFAULT_FOCUS_DELAY_MS,
            debug: false,
        }
    }
}

/// Last path the focus manager acted on. `note` reports whether a path is a
/// real change, recording it when it is.
struct PathTracker {
    current: String,
}

impl PathTracker {
    fn new(initial: String) -> Self {
        Self { current: initial }
    }

    fn note(&mut self, path: &str) -> bool {
        if self.current == path {
            return false;
        }
        self.current = path.to_string();
        true
    }
}

/// Watches the router location and runs the focus/announce sequence on every
/// path change. Invoke once, near the application root.
///
/// Re-renders that do not change the path are ignored. Rapid sequential
/// navigations supersede each other: the pending timer is cancelled before a
/// new one is armed, so only the latest path gets focused and announced.
pub fn use_focus_management(options: FocusOptions) {
    let location = use_location();
    let previous_path = StoredValue::new(PathTracker::new(location.pathname.get_untracked()));
    let pending = StoredValue::new_local(None::<Timeout>);

    Effect::new(move |_| {
        let path = location.pathname.get();
        let changed = previous_path
            .try_update_value(|tracker| tracker.note(&path))
            .unwrap_or(false);
        if !changed {
            return;
        }

        let opts = options.clone();
        let timer = Timeout::new(opts.delay_ms, move || {
            if focus_main_content(&opts.target_selector, opts.debug) {
                announce(&path);
            }
        });
        pending.update_value(|slot| {
            if let Some(stale) = slot.take() {
                stale.cancel();
            }
            *slot = Some(timer);
        });
    });
}

/// Focuses the element matching `selector`, making it keyboard-focusable
/// first if needed. Returns whether anything was focused; a missing target
/// is skipped silently.
pub fn focus_main_content(selector: &str, debug: bool) -> bool {
    let target = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.query_selector(selector).ok().flatten());

    let Some(target) = target else {
        if debug {
            log::debug!("focus target not found: {selector}");
        }
        return false;
    };

    if !target.has_attribute("tabindex") {
        let _ = target.set_attribute("tabindex", "-1");
    }
    if let Some(element) = target.dyn_ref::<web_sys::HtmlElement>() {
        let _ = element.focus();
        if debug {
            log::debug!("focused {selector}");
        }
        return true;
    }
    false
}

/// Sets the live region text to a description of `path`, creating the region
/// on first use. The text clears after a second so an identical follow-up
/// announcement is not swallowed by screen readers that skip unchanged text.
pub fn announce(path: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    let announcer = document
        .query_selector(r#"[role="status"][aria-live="polite"]"#)
        .ok()
        .flatten()
        .or_else(|| {
            let element = document.create_element("div").ok()?;
            let _ = element.set_attribute("role", "status");
            let _ = element.set_attribute("aria-live", "polite");
            let _ = element.set_attribute("aria-atomic", "true");
            element.set_class_name("visually-hidden");
            document.body()?.append_child(&element).ok()?;
            Some(element)
        });

    let Some(announcer) = announcer else {
        return;
    };

    announcer.set_text_content(Some(&format!("Navigated to {}", route_announcement(path))));

    let announcer = announcer.clone();
    Timeout::new(ANNOUNCEMENT_CLEAR_MS, move || {
        announcer.set_text_content(Some(""));
    })
    .forget();
}

/// Human-readable page name for a path: exact names for known routes, a
/// dedicated case for listing details, words derived from the path otherwise.
pub fn route_announcement(path: &str) -> String {
    match path {
        "/" => "home page".to_string(),
        "/about" => "about page".to_string(),
        p if p.starts_with("/apart/") => "accommodation details page".to_string(),
        p => {
            let words: Vec<&str> = p.split('/').filter(|part| !part.is_empty()).collect();
            if words.is_empty() {
                "page".to_string()
            } else {
                words.join(" ")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_routes() {
        assert_eq!(route_announcement("/"), "home page");
        assert_eq!(route_announcement("/about"), "about page");
    }

    #[test]
    fn test_listing_detail_pattern() {
        assert_eq!(route_announcement("/apart/1"), "accommodation details page");
        assert_eq!(
            route_announcement("/apart/anything"),
            "accommodation details page"
        );
    }

    #[test]
    fn test_unknown_path_falls_back_to_words() {
        assert_eq!(route_announcement("/some/deep/path"), "some deep path");
        assert_eq!(route_announcement("//"), "page");
    }

    #[test]
    fn test_repeated_path_is_ignored() {
        let mut tracker = PathTracker::new("/".to_string());
        assert!(!tracker.note("/"));
        assert!(tracker.note("/about"));
        assert!(!tracker.note("/about"));
        assert!(tracker.note("/"));
    }

    #[test]
    fn test_default_options() {
        let opts = FocusOptions::default();
        assert_eq!(opts.target_selector, "#main-content");
        assert_eq!(opts.delay_ms, 100);
        assert!(!opts.debug);
    }
}
