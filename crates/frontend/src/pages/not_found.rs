use crate::shared::i18n::use_i18n;
use crate::shared::prefetch::link::PrefetchLink;
use leptos::prelude::*;

/// Wildcard route: generic 404 covering every unresolved path.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <div class="not-found">
            <h1 class="not-found__code">{move || i18n.t("not_found.code")}</h1>
            <p class="not-found__message">{move || i18n.t("not_found.message")}</p>
            <PrefetchLink href="/" class="not-found__link">
                {move || i18n.t("not_found.back_home")}
            </PrefetchLink>
        </div>
    }
}
