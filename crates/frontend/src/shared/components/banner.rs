use leptos::prelude::*;

/// Full-width hero image with an optional overlaid text.
#[component]
pub fn Banner(
    #[prop(into)] image: String,
    #[prop(into)] alt: Signal<String>,
    #[prop(optional, into)] text: Option<Signal<String>>,
) -> impl IntoView {
    view! {
        <div class="banner">
            <img class="banner__img" src=image alt=alt />
            {text.map(|text| view! { <h1 class="banner__text">{text}</h1> })}
        </div>
    }
}
