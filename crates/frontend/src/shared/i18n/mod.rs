//! Interface language management.
//!
//! Context-based language switch with the preference persisted in
//! localStorage. Strings live in a bundled table keyed by dotted identifiers.

mod strings;

use leptos::prelude::*;
use web_sys::window;

pub use strings::lookup;

/// Languages the interface ships strings for.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Language {
    #[default]
    Fr,
    En,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Fr => "fr",
            Language::En => "en",
        }
    }

    /// Label shown on the switcher button: the language you would switch to.
    pub fn other_label(&self) -> &'static str {
        match self {
            Language::Fr => "EN",
            Language::En => "FR",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "en" => Language::En,
            _ => Language::Fr,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Language::Fr => Language::En,
            Language::En => Language::Fr,
        }
    }
}

const LANGUAGE_STORAGE_KEY: &str = "app-language";

fn load_language_from_storage() -> Language {
    window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(LANGUAGE_STORAGE_KEY).ok().flatten())
        .map(|s| Language::from_str(&s))
        .unwrap_or_default()
}

fn save_language_to_storage(language: Language) {
    if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(LANGUAGE_STORAGE_KEY, language.as_str());
    }
}

/// Language context type.
#[derive(Clone, Copy)]
pub struct I18nContext {
    pub language: RwSignal<Language>,
}

impl I18nContext {
    pub fn set_language(&self, language: Language) {
        self.language.set(language);
        save_language_to_storage(language);
    }

    pub fn toggle(&self) {
        self.set_language(self.language.get().toggled());
    }

    /// Translated string for a dotted key, tracking the current language.
    pub fn t(&self, key: &'static str) -> String {
        translate(self.language.get(), key)
    }
}

/// Translated string for `key`, the key itself when no entry exists.
pub fn translate(language: Language, key: &str) -> String {
    lookup(language, key).unwrap_or(key).to_string()
}

/// Provides the language context to children components.
#[component]
pub fn I18nProvider(children: Children) -> impl IntoView {
    let language = RwSignal::new(load_language_from_storage());
    provide_context(I18nContext { language });

    children()
}

/// Hook to use the language context.
pub fn use_i18n() -> I18nContext {
    use_context::<I18nContext>().expect("I18nContext not found. Wrap your app with I18nProvider.")
}

/// Button that flips the interface language.
#[component]
pub fn LanguageSwitcher() -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <button
            class="language-switcher"
            aria-label=move || translate(i18n.language.get(), "header.switch_language")
            on:click=move |_| i18n.toggle()
        >
            {move || i18n.language.get().other_label()}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_known_key_both_languages() {
        assert_eq!(translate(Language::Fr, "header.home"), "Accueil");
        assert_eq!(translate(Language::En, "header.home"), "Home");
    }

    #[test]
    fn test_translate_unknown_key_returns_key() {
        assert_eq!(translate(Language::Fr, "no.such.key"), "no.such.key");
    }

    #[test]
    fn test_language_round_trip() {
        assert_eq!(Language::from_str("en"), Language::En);
        assert_eq!(Language::from_str("fr"), Language::Fr);
        assert_eq!(Language::from_str("??"), Language::Fr);
        assert_eq!(Language::Fr.toggled(), Language::En);
        assert_eq!(Language::En.toggled(), Language::Fr);
    }
}
