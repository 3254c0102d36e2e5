use crate::routes::{RouteBoundary, RouteKind};
use crate::shared::components::{Banner, Card};
use crate::shared::i18n::use_i18n;
use crate::shared::prefetch::{use_prefetch, ResourceKind};
use leptos::prelude::*;

/// Listing grid with the hero banner. One card per catalog entry.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <RouteBoundary kind=RouteKind::Home>
            <HomeView />
        </RouteBoundary>
    }
}

#[component]
fn HomeView() -> impl IntoView {
    let i18n = use_i18n();
    let cache = use_prefetch();

    // Covers are the first thing the user scrolls through; hint them all.
    for listing in contracts::catalog::listings() {
        cache.preload_resource(&listing.cover, ResourceKind::Image);
    }

    view! {
        <div class="home">
            <div class="home__container">
                <Banner
                    image="/assets/banner-coast.jpg"
                    alt=Signal::derive(move || i18n.t("home.banner.alt"))
                    text=Signal::derive(move || i18n.t("home.banner.text"))
                />

                <section class="home__cards">
                    {contracts::catalog::listings()
                        .iter()
                        .map(|listing| view! { <Card item=listing.clone() /> })
                        .collect_view()}
                </section>
            </div>
        </div>
    }
}
