//! Applies route metadata to the document on navigation.

use crate::routes::resolve_metadata;
use leptos::prelude::*;
use leptos_router::hooks::use_location;

/// Keeps `document.title` and the description meta tag in sync with the
/// route table. Paths without configured metadata leave the document as-is.
pub fn use_seo() {
    let location = use_location();

    Effect::new(move |_| {
        let path = location.pathname.get();
        let Some(meta) = resolve_metadata(&path) else {
            return;
        };
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };

        if let Some(title) = meta.title {
            document.set_title(title);
        }
        if let Some(description) = meta.description {
            set_meta_description(&document, description);
        }
    });
}

fn set_meta_description(document: &web_sys::Document, content: &str) {
    let tag = document
        .query_selector(r#"meta[name="description"]"#)
        .ok()
        .flatten()
        .or_else(|| {
            let tag = document.create_element("meta").ok()?;
            let _ = tag.set_attribute("name", "description");
            document.head()?.append_child(&tag).ok()?;
            Some(tag)
        });

    if let Some(tag) = tag {
        let _ = tag.set_attribute("content", content);
    }
}
