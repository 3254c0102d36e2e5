use crate::shared::i18n::use_i18n;
use leptos::prelude::*;

const MAX_STARS: u8 = 5;

/// Five-star rating display driven by the listing's digit rating.
#[component]
pub fn StarRating(rating: u8) -> impl IntoView {
    let i18n = use_i18n();
    let filled = rating.min(MAX_STARS);

    view! {
        <div
            class="star-rating"
            role="img"
            aria-label=move || {
                format!("{}: {}/{}", i18n.t("rating.label"), filled, MAX_STARS)
            }
        >
            {(0..MAX_STARS)
                .map(|i| {
                    let class = if i < filled { "star star--filled" } else { "star" };
                    view! { <span class=class aria-hidden="true">"★"</span> }
                })
                .collect_view()}
        </div>
    }
}
