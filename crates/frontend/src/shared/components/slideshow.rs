use crate::shared::i18n::use_i18n;
use leptos::prelude::*;

/// Picture carousel with wrap-around navigation.
///
/// Arrows and the counter disappear when there is a single picture.
#[component]
pub fn Slideshow(images: Vec<String>) -> impl IntoView {
    let i18n = use_i18n();
    let count = images.len();
    let (index, set_index) = signal(0usize);

    let previous = move |_| {
        set_index.update(|i| *i = if *i == 0 { count.saturating_sub(1) } else { *i - 1 });
    };
    let next = move |_| {
        set_index.update(|i| *i = if *i + 1 >= count { 0 } else { *i + 1 });
    };

    let images = StoredValue::new(images);
    let current = move || {
        images.with_value(|imgs| imgs.get(index.get()).cloned().unwrap_or_default())
    };

    view! {
        <div class="slideshow">
            <img class="slideshow__img" src=current alt="" />
            <Show when={move || count > 1}>
                <button
                    class="slideshow__arrow slideshow__arrow--left"
                    aria-label=move || i18n.t("slideshow.previous")
                    on:click=previous
                >
                    "‹"
                </button>
                <button
                    class="slideshow__arrow slideshow__arrow--right"
                    aria-label=move || i18n.t("slideshow.next")
                    on:click=next
                >
                    "›"
                </button>
                <span class="slideshow__counter">
                    {move || format!("{}/{}", index.get() + 1, count)}
                </span>
            </Show>
        </div>
    }
}
