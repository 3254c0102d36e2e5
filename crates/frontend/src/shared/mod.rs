pub mod components;
pub mod focus;
pub mod i18n;
pub mod prefetch;
pub mod seo;
