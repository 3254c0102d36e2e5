use crate::shared::i18n::use_i18n;
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <footer class="footer">
            <img class="footer__logo" src="/assets/logo-white.svg" alt="Kasa" />
            <p class="footer__copyright">{move || i18n.t("footer.copyright")}</p>
        </footer>
    }
}
