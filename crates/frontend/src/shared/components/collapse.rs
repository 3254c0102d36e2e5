use leptos::prelude::*;

/// Collapsible panel with a toggle header.
#[component]
pub fn Collapse(#[prop(into)] title: Signal<String>, children: ChildrenFn) -> impl IntoView {
    let (open, set_open) = signal(false);

    view! {
        <div class="collapse">
            <button
                class="collapse__header"
                aria-expanded=move || open.get().to_string()
                on:click=move |_| set_open.update(|o| *o = !*o)
            >
                <span class="collapse__title">{title}</span>
                <span
                    class=move || {
                        if open.get() { "collapse__chevron collapse__chevron--open" } else { "collapse__chevron" }
                    }
                    aria-hidden="true"
                >
                    "⌃"
                </span>
            </button>
            <Show when=move || open.get()>
                <div class="collapse__content">{children()}</div>
            </Show>
        </div>
    }
}
