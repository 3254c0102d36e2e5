use crate::shared::i18n::{use_i18n, LanguageSwitcher};
use crate::shared::prefetch::link::PrefetchLink;
use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <header class="header">
            <div class="header__container">
                <PrefetchLink href="/" aria_label=Signal::derive(move || i18n.t("header.back_home"))>
                    <img
                        class="header__logo"
                        src="/assets/logo.svg"
                        alt=move || i18n.t("header.logo_alt")
                    />
                </PrefetchLink>

                <nav class="header__nav" aria-label=move || i18n.t("header.nav_label")>
                    <PrefetchLink href="/">{move || i18n.t("header.home")}</PrefetchLink>
                    <PrefetchLink href="/about">{move || i18n.t("header.about")}</PrefetchLink>
                    <LanguageSwitcher />
                </nav>
            </div>
        </header>
    }
}
