use crate::layout::{Footer, Header};
use crate::pages::{AboutPage, ApartPage, HomePage, NotFoundPage};
use crate::routes::list_prefetchable;
use crate::shared::focus::{use_focus_management, FocusOptions};
use crate::shared::i18n::{use_i18n, I18nProvider};
use crate::shared::prefetch::idle::schedule_idle_prefetch;
use crate::shared::prefetch::PrefetchCache;
use crate::shared::seo::use_seo;
use leptos::prelude::*;
use leptos_router::components::{Outlet, ParentRoute, Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn App() -> impl IntoView {
    // One prefetch cache for the whole app, injected through context.
    let cache = PrefetchCache::new();
    provide_context(cache.clone());

    // Warm the likely destinations in the background once the browser idles.
    let prioritized = list_prefetchable()
        .iter()
        .map(|route| route.kind.prefetch_path().to_string())
        .collect();
    schedule_idle_prefetch(&cache, prioritized);

    view! {
        <I18nProvider>
            <Router>
                <Routes fallback=|| view! { <NotFoundPage /> }>
                    <ParentRoute path=path!("") view=Shell>
                        <Route path=path!("") view=HomePage />
                        <Route path=path!("about") view=AboutPage />
                        <Route path=path!("apart/:id") view=ApartPage />
                        <Route path=path!("*any") view=NotFoundPage />
                    </ParentRoute>
                </Routes>
            </Router>
        </I18nProvider>
    }
}

/// Shared chrome around every routed view: skip link, header, the focusable
/// main region the focus manager targets, and the footer.
#[component]
fn Shell() -> impl IntoView {
    let i18n = use_i18n();
    use_seo();
    use_focus_management(FocusOptions::default());

    view! {
        <a href="#main-content" class="skip-link">{move || i18n.t("skip_link.label")}</a>
        <Header />
        <main id="main-content" tabindex="-1">
            <Outlet />
        </main>
        <Footer />
    }
}
