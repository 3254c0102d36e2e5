use crate::routes::{RouteBoundary, RouteKind};
use crate::shared::components::{Collapse, Slideshow, StarRating};
use crate::shared::i18n::use_i18n;
use crate::shared::prefetch::{use_prefetch, ResourceKind};
use contracts::Listing;
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

/// Listing detail page. An unknown id renders the not-found branch; that is
/// an expected state, not an error.
#[component]
pub fn ApartPage() -> impl IntoView {
    view! {
        <RouteBoundary kind=RouteKind::Apart>
            <ApartView />
        </RouteBoundary>
    }
}

#[component]
fn ApartView() -> impl IntoView {
    let params = use_params_map();
    let listing = move || {
        let id = params.with(|p| p.get("id")).unwrap_or_default();
        contracts::catalog::find(&id)
    };

    view! {
        <div class="apart">
            {move || match listing() {
                Some(listing) => view! { <ApartDetails listing=listing.clone() /> }.into_any(),
                None => view! { <ApartNotFound /> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn ApartDetails(listing: Listing) -> impl IntoView {
    let i18n = use_i18n();
    let cache = use_prefetch();

    for picture in &listing.pictures {
        cache.preload_resource(picture, ResourceKind::Image);
    }

    let rating = listing.rating_value();
    let equipments = listing.equipments.clone();

    view! {
        <div class="apart__container">
            <Slideshow images=listing.pictures.clone() />

            <article class="apart__content">
                <section class="apart__heading">
                    <h2 class="apart__title">{listing.title.clone()}</h2>
                    <h3 class="apart__location">{listing.location.clone()}</h3>
                    <div class="apart__tags">
                        {listing
                            .tags
                            .iter()
                            .map(|tag| view! { <span class="apart__tag">{tag.clone()}</span> })
                            .collect_view()}
                    </div>
                </section>

                <section class="apart__aside">
                    <div class="apart__host">
                        <h3 class="apart__host-name">{listing.host.name.clone()}</h3>
                        <img
                            class="apart__host-img"
                            src=listing.host.picture.clone()
                            alt=move || i18n.t("apart.host_picture_alt")
                        />
                    </div>
                    <StarRating rating=rating />
                </section>
            </article>

            <div class="apart__collapses">
                <div class="apart__collapse">
                    <Collapse title=Signal::derive(move || i18n.t("apart.description"))>
                        <p>{listing.description.clone()}</p>
                    </Collapse>
                </div>
                <div class="apart__collapse">
                    <Collapse title=Signal::derive(move || i18n.t("apart.equipments"))>
                        {equipments
                            .iter()
                            .map(|equipment| view! { <div>{equipment.clone()}</div> })
                            .collect_view()}
                    </Collapse>
                </div>
            </div>
        </div>
    }
}

#[component]
fn ApartNotFound() -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <div class="apart__error">
            <p>{move || i18n.t("apart.not_found")}</p>
            <a href="/">{move || i18n.t("apart.back_home")}</a>
        </div>
    }
}
