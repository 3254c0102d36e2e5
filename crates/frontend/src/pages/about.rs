use crate::routes::{RouteBoundary, RouteKind};
use crate::shared::components::{Banner, Collapse};
use crate::shared::i18n::use_i18n;
use leptos::prelude::*;

const VALUES: &[(&str, &str)] = &[
    ("about.reliability.title", "about.reliability.text"),
    ("about.respect.title", "about.respect.text"),
    ("about.service.title", "about.service.text"),
    ("about.security.title", "about.security.text"),
];

/// Static company page: banner plus one collapsible panel per value.
#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <RouteBoundary kind=RouteKind::About>
            <AboutView />
        </RouteBoundary>
    }
}

#[component]
fn AboutView() -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <div class="about">
            <div class="about__container">
                <Banner
                    image="/assets/banner-mountain.jpg"
                    alt=Signal::derive(move || i18n.t("about.banner.alt"))
                />

                <div class="about__collapses">
                    {VALUES
                        .iter()
                        .map(|&(title_key, text_key)| {
                            view! {
                                <Collapse title=Signal::derive(move || i18n.t(title_key))>
                                    <p>{move || i18n.t(text_key)}</p>
                                </Collapse>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
