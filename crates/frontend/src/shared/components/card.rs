use crate::shared::prefetch::link::PrefetchLink;
use contracts::Listing;
use leptos::prelude::*;

/// Listing card for the grid. The whole card is a prefetching link to the
/// detail page.
#[component]
pub fn Card(item: Listing) -> impl IntoView {
    let href = format!("/apart/{}", item.id);

    view! {
        <PrefetchLink href=href class="card">
            <img class="card__img" src=item.cover alt=item.title.clone() />
            <div class="card__overlay">
                <h2 class="card__title">{item.title}</h2>
            </div>
        </PrefetchLink>
    }
}
